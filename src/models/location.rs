use serde::{Serialize, Serializer};
use std::fmt;

/// Where an event happened: one of the configured location tokens, or unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Known(String),
    Unknown,
}

impl Location {
    pub fn is_known(&self) -> bool {
        matches!(self, Location::Known(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Location::Known(token) => token,
            Location::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
