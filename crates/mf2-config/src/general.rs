//! General application configuration.

use serde::{Deserialize, Serialize};

const fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Start from the bundled h-card, h-adr, h-entry and h-event vocabularies.
    #[serde(default = "enabled")]
    pub builtin_vocabularies: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            builtin_vocabularies: true,
        }
    }
}
