use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Target platform for a generated hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Linkedin,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short, platform-tailored promotional text derived from an item.
///
/// Hooks are ephemeral: created on demand, returned by value, and simply
/// dropped when the caller discards them. `content_item_id` is a
/// back-reference, not ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedHook {
    pub id: String,
    pub content_item_id: String,
    pub text: String,
    pub platform: Platform,
    pub created_at: DateTime<Utc>,
}
