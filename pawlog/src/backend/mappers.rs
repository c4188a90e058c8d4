//! Conversions from domain records to the presentation DTOs in `shared`.

use chrono::{Datelike, NaiveDate};
use shared::{DayPill, EventKind, EventRow, PetSummary, TallyItem};

use crate::backend::domain::models::{EventRecord, EventType, PetRecord};
use crate::backend::domain::pet_store::PetStore;
use crate::backend::domain::summary::{day_strip, DailyTally};

pub struct EventMapper;

impl EventMapper {
    pub fn kind_to_dto(event_type: EventType) -> EventKind {
        match event_type {
            EventType::Pee => EventKind::Pee,
            EventType::Poop => EventKind::Poop,
            EventType::Water => EventKind::Water,
            EventType::Walk => EventKind::Walk,
            EventType::Food => EventKind::Food,
            EventType::Treat => EventKind::Treat,
        }
    }

    pub fn kind_from_dto(kind: EventKind) -> EventType {
        match kind {
            EventKind::Pee => EventType::Pee,
            EventKind::Poop => EventType::Poop,
            EventKind::Water => EventType::Water,
            EventKind::Walk => EventType::Walk,
            EventKind::Food => EventType::Food,
            EventKind::Treat => EventType::Treat,
        }
    }

    pub fn to_dto(event: &EventRecord) -> EventRow {
        EventRow {
            id: event.id.to_string(),
            pet_id: event.pet_id.to_string(),
            kind: Self::kind_to_dto(event.event_type),
            label: event.event_type.label().to_string(),
            timestamp: event.timestamp.to_rfc3339(),
        }
    }
}

pub struct PetMapper;

impl PetMapper {
    pub fn to_dto(pet: &PetRecord, store: &PetStore, today: NaiveDate) -> PetSummary {
        PetSummary {
            id: pet.id.to_string(),
            name: pet.name.clone(),
            initial: pet.initial(),
            subtitle: pet.subtitle(today),
            color: store.color_for(pet).name().to_string(),
            is_active: store.active_pet_id() == Some(pet.id),
        }
    }

    /// Every pet in display order
    pub fn all_to_dto(store: &PetStore, today: NaiveDate) -> Vec<PetSummary> {
        store
            .pets()
            .iter()
            .map(|pet| Self::to_dto(pet, store, today))
            .collect()
    }
}

pub struct SummaryMapper;

impl SummaryMapper {
    /// Only kinds that occurred, in summary order
    pub fn tally_to_dto(tally: &DailyTally) -> Vec<TallyItem> {
        tally
            .non_zero_items()
            .into_iter()
            .map(|(event_type, count)| TallyItem {
                kind: EventMapper::kind_to_dto(event_type),
                label: event_type.label().to_string(),
                count,
            })
            .collect()
    }

    pub fn day_strip_to_dto(today: NaiveDate, selected: NaiveDate) -> Vec<DayPill> {
        day_strip(today)
            .into_iter()
            .map(|date| DayPill {
                date: date.format("%Y-%m-%d").to_string(),
                day_of_month: date.day(),
                weekday: date.format("%a").to_string(),
                is_today: date == today,
                is_selected: date == selected,
            })
            .collect()
    }
}
