use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of care event, as rendered by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Pee,
    Poop,
    Water,
    Walk,
    Food,
    Treat,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventKind::Pee => "Pee",
            EventKind::Poop => "Poop",
            EventKind::Water => "Water",
            EventKind::Walk => "Walk",
            EventKind::Food => "Food",
            EventKind::Treat => "Treat",
        };
        write!(f, "{}", label)
    }
}

/// One logged event, ready for a list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    pub id: String,
    /// ID of the pet this event belongs to
    pub pet_id: String,
    pub kind: EventKind,
    /// Display label, e.g. "Walk"
    pub label: String,
    /// Timestamp with timezone (RFC 3339)
    pub timestamp: String,
}

/// A pet profile as shown in pickers and header cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetSummary {
    pub id: String,
    pub name: String,
    /// Single upper-case letter for the avatar
    pub initial: String,
    /// "breed · age", "breed", "age", or absent
    pub subtitle: Option<String>,
    /// Avatar colour name, e.g. "teal"
    pub color: String,
    pub is_active: bool,
}

/// Count of one event kind for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyItem {
    pub kind: EventKind,
    pub label: String,
    pub count: u32,
}

/// One entry of the horizontal day strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPill {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub day_of_month: u32,
    /// Short weekday name, e.g. "Mon"
    pub weekday: String,
    pub is_today: bool,
    pub is_selected: bool,
}
