//! Typed auto-responder settings schema
//!
//! The settings table is a generic key-value store with free-text values.
//! The auto-responder keys have declared types (boolean, string) and this
//! module is the single encode/decode boundary between the typed record and
//! the stored strings.
//!
//! Encoding rules:
//! - `auto_responder_enabled`: stored as the literal `"true"` / `"false"`.
//!   Decode is exact-match on `"true"`; any other stored value (including
//!   `"TRUE"`, `"1"`, or an absent row) decodes to `false`.
//! - `auto_responder_text`: stored verbatim; an absent row decodes to `""`.

use serde::{Deserialize, Serialize};

/// Settings key for the auto-responder enabled flag (boolean)
pub const AUTO_RESPONDER_ENABLED_KEY: &str = "auto_responder_enabled";

/// Settings key for the auto-responder message text (string)
pub const AUTO_RESPONDER_TEXT_KEY: &str = "auto_responder_text";

/// Auto-responder configuration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoResponderSettings {
    /// Whether the auto-responder is active
    pub enabled: bool,
    /// Message text sent while the auto-responder is active
    pub text: String,
}

impl AutoResponderSettings {
    /// Decode the record from raw stored values (None = row absent)
    pub fn from_stored(enabled: Option<String>, text: Option<String>) -> Self {
        Self {
            enabled: decode_enabled(enabled.as_deref()),
            text: text.unwrap_or_default(),
        }
    }

    /// String form of the enabled flag as it is persisted
    pub fn enabled_stored_value(&self) -> &'static str {
        encode_enabled(self.enabled)
    }
}

/// Decode the stored enabled flag: exact string-equality against "true"
pub fn decode_enabled(stored: Option<&str>) -> bool {
    stored == Some("true")
}

/// Encode the enabled flag to its stored string form
pub fn encode_enabled(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}
