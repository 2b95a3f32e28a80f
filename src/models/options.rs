//! Voice configuration record
//!
//! The layout pass stores one of these per voice (usually as JSON) and
//! builds the voice from it with `Voice::with_options`.

use serde::{Deserialize, Serialize};

use super::mode::VoiceMode;
use super::time_signature::TimeSignature;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoiceOptions {
    #[serde(default)]
    pub time: TimeSignature,
    #[serde(default)]
    pub mode: VoiceMode,
}

impl VoiceOptions {
    pub fn new(time: TimeSignature, mode: VoiceMode) -> Self {
        Self { time, mode }
    }

    /// Load options from a JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
