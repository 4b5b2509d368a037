//! Tokens the parser and the predictor look for inside chat messages.

use crate::models::event_kind::EventKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default = "default_pee_token")]
    pub pee_token: String,
    #[serde(default = "default_poop_token")]
    pub poop_token: String,
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
    #[serde(default = "default_system_notices")]
    pub system_notices: Vec<String>,
    #[serde(default = "default_edit_markers")]
    pub edit_markers: Vec<String>,
}

fn default_pee_token() -> String {
    "פיפי".to_string()
}
fn default_poop_token() -> String {
    "קקי".to_string()
}
fn default_locations() -> Vec<String> {
    ["בחוץ", "בבית", "outside", "inside"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_system_notices() -> Vec<String> {
    [
        "Messages and calls are end-to-end encrypted",
        "ההודעות והשיחות מוצפנות מקצה לקצה",
        "joined using this group's invite link",
        "הצטרף/ה באמצעות קישור ההזמנה",
        "created group",
        "יצר/ה את הקבוצה",
        "This message was deleted",
        "You deleted this message",
        "הודעה זו נמחקה",
        "מחקת את ההודעה הזו",
        "<Media omitted>",
        "<המדיה לא נכללה>",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_edit_markers() -> Vec<String> {
    ["<This message was edited>", "<ההודעה נערכה>"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            pee_token: default_pee_token(),
            poop_token: default_poop_token(),
            locations: default_locations(),
            system_notices: default_system_notices(),
            edit_markers: default_edit_markers(),
        }
    }
}

impl Vocabulary {
    /// Label token bound to a tracked event kind
    pub fn token(&self, kind: EventKind) -> &str {
        match kind {
            EventKind::Pee => &self.pee_token,
            EventKind::Poop => &self.poop_token,
        }
    }

    pub fn mentions(&self, label: &str, kind: EventKind) -> bool {
        let token = self.token(kind);
        !token.is_empty() && label.contains(token)
    }

    /// A combined occurrence names both tracked kinds in one label
    pub fn is_combined(&self, label: &str) -> bool {
        EventKind::ALL.iter().all(|k| self.mentions(label, *k))
    }

    pub fn is_system_notice(&self, line: &str) -> bool {
        self.system_notices
            .iter()
            .any(|n| !n.is_empty() && line.contains(n.as_str()))
    }

    pub fn strip_edit_markers(&self, message: &str) -> String {
        self.edit_markers
            .iter()
            .filter(|m| !m.is_empty())
            .fold(message.to_string(), |acc, m| acc.replace(m.as_str(), ""))
    }
}
