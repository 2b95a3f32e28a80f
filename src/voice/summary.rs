//! Read model of a voice's accounting state
//!
//! This is what the multi-voice formatter consumes when it lines voices up
//! against each other.

use serde::{Deserialize, Serialize};

use crate::models::VoiceMode;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VoiceSummary {
    pub total_ticks: i64,
    pub ticks_used: i64,
    pub smallest_tick_count: i64,
    pub largest_tick_width: i64,
    pub mode: VoiceMode,
    pub tickable_count: usize,
    pub complete: bool,
}

impl VoiceSummary {
    /// Ticks still available before the measure is full (negative in an
    /// overfilled soft voice)
    pub fn remaining_ticks(&self) -> i64 {
        self.total_ticks - self.ticks_used
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VoiceSummary {
        VoiceSummary {
            total_ticks: 16384,
            ticks_used: 12288,
            smallest_tick_count: 4096,
            largest_tick_width: 0,
            mode: VoiceMode::Full,
            tickable_count: 3,
            complete: false,
        }
    }

    #[test]
    fn test_remaining_ticks() {
        assert_eq!(sample().remaining_ticks(), 4096);
    }

    #[test]
    fn test_to_json() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"mode\":\"full\""));
        assert!(json.contains("\"ticks_used\":12288"));
        let back: VoiceSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
