use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing tier, ordered from the cheapest (A) to the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    A,
    B,
    C,
    #[serde(rename = "Out of area", alias = "OutOfArea")]
    OutOfArea,
}

impl ZoneId {
    pub fn code(&self) -> &'static str {
        match self {
            ZoneId::A => "A",
            ZoneId::B => "B",
            ZoneId::C => "C",
            ZoneId::OutOfArea => "Out of area",
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, ZoneId::OutOfArea)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One entry of the zone catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    /// Inclusive upper bound of one-way drive time; `None` marks the catch-all.
    #[serde(default)]
    pub max_drive_minutes: Option<u32>,
    pub label: String,
    #[serde(default)]
    pub note: String,
}

impl Zone {
    pub fn bounded(id: ZoneId, max_drive_minutes: u32, label: &str, note: &str) -> Self {
        Self {
            id,
            max_drive_minutes: Some(max_drive_minutes),
            label: label.to_string(),
            note: note.to_string(),
        }
    }

    pub fn catch_all(id: ZoneId, label: &str, note: &str) -> Self {
        Self {
            id,
            max_drive_minutes: None,
            label: label.to_string(),
            note: note.to_string(),
        }
    }

    pub fn is_catch_all(&self) -> bool {
        self.max_drive_minutes.is_none()
    }

    /// Inclusive check: a value sitting exactly on the bound belongs here.
    pub fn contains(&self, drive_minutes: f64) -> bool {
        match self.max_drive_minutes {
            Some(max) => drive_minutes <= f64::from(max),
            None => true,
        }
    }
}
