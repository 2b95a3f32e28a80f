//! Voice validation modes
//!
//! A mode decides how the ticks added to a voice relate to the measure
//! budget:
//!
//! - `Strict`: the default. Ticks must fill the voice exactly.
//! - `Soft`: ticks can be added without restriction.
//! - `Full`: ticks need not fill the voice, but can't exceed the budget.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoiceMode {
    #[default]
    Strict,
    Soft,
    Full,
}

impl VoiceMode {
    /// Whether adds are checked against the measure ceiling
    pub fn enforces_ceiling(self) -> bool {
        match self {
            VoiceMode::Strict | VoiceMode::Full => true,
            VoiceMode::Soft => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VoiceMode::Strict => "strict",
            VoiceMode::Soft => "soft",
            VoiceMode::Full => "full",
        }
    }
}

impl fmt::Display for VoiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoiceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(VoiceMode::Strict),
            "soft" => Ok(VoiceMode::Soft),
            "full" => Ok(VoiceMode::Full),
            other => Err(format!("unknown voice mode: {}", other)),
        }
    }
}
