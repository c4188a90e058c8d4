//! Daily summaries and day browsing.
//!
//! Everything here is derived from store queries; nothing is persisted.

use chrono::{Duration, NaiveDate};

use crate::backend::domain::models::{EventRecord, EventType};

/// Days of history shown in the day strip before today
pub const DAY_STRIP_DAYS_BACK: i64 = 90;
/// Days shown in the day strip after today
pub const DAY_STRIP_DAYS_FORWARD: i64 = 14;

/// Fixed-width count of each event kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyTally {
    counts: [u32; 6],
}

impl DailyTally {
    pub fn from_events(events: &[EventRecord]) -> Self {
        let mut tally = Self::default();
        for event in events {
            tally.counts[event.event_type.index()] += 1;
        }
        tally
    }

    pub fn count(&self, event_type: EventType) -> u32 {
        self.counts[event_type.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Every kind in summary order, zeros included
    pub fn items(&self) -> Vec<(EventType, u32)> {
        EventType::SUMMARY_ORDER
            .iter()
            .map(|t| (*t, self.count(*t)))
            .collect()
    }

    /// Only the kinds that occurred, in summary order
    pub fn non_zero_items(&self) -> Vec<(EventType, u32)> {
        self.items().into_iter().filter(|(_, count)| *count > 0).collect()
    }
}

/// The fixed browsing range anchored on `today`: 90 days back through 14 days ahead
pub fn day_strip(today: NaiveDate) -> Vec<NaiveDate> {
    (-DAY_STRIP_DAYS_BACK..=DAY_STRIP_DAYS_FORWARD)
        .filter_map(|offset| today.checked_add_signed(Duration::days(offset)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn events(types: &[EventType]) -> Vec<EventRecord> {
        let pet_id = Uuid::new_v4();
        types
            .iter()
            .map(|t| EventRecord::new(*t, Utc::now(), pet_id))
            .collect()
    }

    #[test]
    fn test_tally_counts_each_kind() {
        let tally = DailyTally::from_events(&events(&[
            EventType::Pee,
            EventType::Walk,
            EventType::Pee,
            EventType::Treat,
        ]));
        assert_eq!(tally.count(EventType::Pee), 2);
        assert_eq!(tally.count(EventType::Walk), 1);
        assert_eq!(tally.count(EventType::Food), 0);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_items_use_summary_order() {
        let tally = DailyTally::from_events(&events(&[EventType::Water, EventType::Food]));
        let kinds: Vec<EventType> = tally.items().into_iter().map(|(t, _)| t).collect();
        assert_eq!(kinds, EventType::SUMMARY_ORDER.to_vec());
        assert_eq!(
            tally.non_zero_items(),
            vec![(EventType::Food, 1), (EventType::Water, 1)]
        );
    }

    #[test]
    fn test_empty_tally() {
        let tally = DailyTally::from_events(&[]);
        assert!(tally.is_empty());
        assert!(tally.non_zero_items().is_empty());
        assert_eq!(tally.items().len(), 6);
    }

    #[test]
    fn test_day_strip_range() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let days = day_strip(today);
        assert_eq!(days.len(), 105);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2026, 7, 18).unwrap());
        assert_eq!(days[90], today);
        assert_eq!(*days.last().unwrap(), NaiveDate::from_ymd_opt(2026, 10, 30).unwrap());
    }
}
