//! Domain model for a pet profile.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::stored_time::deserialize_optional_date;

/// A profile representing one animal being tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    pub id: Uuid,
    pub name: String,
    pub breed: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub birthdate: Option<NaiveDate>,
}

impl PetRecord {
    /// Create a new pet with a fresh id
    pub fn new(
        name: impl Into<String>,
        breed: Option<String>,
        birthdate: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            breed,
            birthdate,
        }
    }

    /// Single upper-case initial for avatar display
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Human-readable age on `today`, e.g. "3 yrs", "5 mo" or "< 1 mo"
    pub fn age_description(&self, today: NaiveDate) -> Option<String> {
        let birthdate = self.birthdate?;
        let months = whole_months_between(birthdate, today);
        let years = months / 12;

        let description = if years > 0 {
            format!("{} yr{}", years, if years == 1 { "" } else { "s" })
        } else if months > 0 {
            format!("{} mo", months)
        } else {
            "< 1 mo".to_string()
        };
        Some(description)
    }

    /// Summary line combining breed and age when present
    pub fn subtitle(&self, today: NaiveDate) -> Option<String> {
        match (self.breed.as_deref(), self.age_description(today)) {
            (Some(breed), Some(age)) => Some(format!("{} · {}", breed, age)),
            (Some(breed), None) => Some(breed.to_string()),
            (None, Some(age)) => Some(age),
            (None, None) => None,
        }
    }
}

/// Full calendar months from `from` to `to`, never negative
fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0)
}

/// Avatar colours, cycled by list position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AvatarColor {
    #[default]
    Blue,
    Purple,
    Orange,
    Teal,
    Pink,
    Green,
}

impl AvatarColor {
    pub const PALETTE: [AvatarColor; 6] = [
        AvatarColor::Blue,
        AvatarColor::Purple,
        AvatarColor::Orange,
        AvatarColor::Teal,
        AvatarColor::Pink,
        AvatarColor::Green,
    ];

    /// Colour for the pet at `position` in the list
    pub fn for_position(position: usize) -> Self {
        Self::PALETTE[position % Self::PALETTE.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            AvatarColor::Blue => "blue",
            AvatarColor::Purple => "purple",
            AvatarColor::Orange => "orange",
            AvatarColor::Teal => "teal",
            AvatarColor::Pink => "pink",
            AvatarColor::Green => "green",
        }
    }
}
