use serde::Serialize;

/// The two tracked event categories.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Pee,
    Poop,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::Pee, EventKind::Poop];

    pub fn ek_as_str(&self) -> &'static str {
        match self {
            EventKind::Pee => "pee",
            EventKind::Poop => "poop",
        }
    }

    /// Human readable name used in predictions
    pub fn display_name(&self) -> &'static str {
        match self {
            EventKind::Pee => "Pee",
            EventKind::Poop => "Poop",
        }
    }
}
