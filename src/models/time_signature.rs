//! Time signature model
//!
//! A time signature fixes the tick budget of one measure: `num_beats` beats,
//! each lasting `resolution / beat_value` ticks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::defaults::{DEFAULT_BEAT_VALUE, DEFAULT_NUM_BEATS, RESOLUTION};

/// Errors from parsing a `"<beats>/<value>"` time signature
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSignatureError {
    #[error("missing '/' in time signature: {0:?}")]
    MissingSlash(String),

    #[error("invalid number in time signature: {0:?}")]
    InvalidNumber(String),

    #[error("time signature parts must be positive: {0:?}")]
    ZeroPart(String),
}

/// Meter of a measure, immutable for the lifetime of a voice
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "RawTimeSignature")]
pub struct TimeSignature {
    /// Beats per measure
    pub num_beats: u32,
    /// Note value of one beat (4 = quarter note)
    pub beat_value: u32,
    /// Ticks per whole note
    pub resolution: u32,
}

/// Unchecked serde shape of a time signature
#[derive(Deserialize)]
struct RawTimeSignature {
    num_beats: u32,
    beat_value: u32,
    #[serde(default = "default_resolution")]
    resolution: u32,
}

fn default_resolution() -> u32 {
    RESOLUTION
}

impl TryFrom<RawTimeSignature> for TimeSignature {
    type Error = TimeSignatureError;

    fn try_from(raw: RawTimeSignature) -> Result<Self, Self::Error> {
        let time = Self::with_resolution(raw.num_beats, raw.beat_value, raw.resolution);
        if time.num_beats == 0 || time.beat_value == 0 || time.resolution == 0 {
            return Err(TimeSignatureError::ZeroPart(format!(
                "{} @ {}",
                time, time.resolution
            )));
        }
        Ok(time)
    }
}

impl TimeSignature {
    /// Create a time signature at the default resolution
    pub fn new(num_beats: u32, beat_value: u32) -> Self {
        Self::with_resolution(num_beats, beat_value, RESOLUTION)
    }

    pub fn with_resolution(num_beats: u32, beat_value: u32, resolution: u32) -> Self {
        Self {
            num_beats,
            beat_value,
            resolution,
        }
    }

    /// Ticks in one beat (integer division, like the measure total)
    pub fn ticks_per_beat(&self) -> i64 {
        i64::from(self.resolution) / i64::from(self.beat_value)
    }

    /// Tick capacity of one measure: `num_beats * (resolution / beat_value)`
    pub fn total_ticks(&self) -> i64 {
        i64::from(self.num_beats) * self.ticks_per_beat()
    }

    /// Parse `"3/4"`, `"6/8"`, ... at the default resolution
    pub fn parse(text: &str) -> Result<Self, TimeSignatureError> {
        let (beats, value) = text
            .trim()
            .split_once('/')
            .ok_or_else(|| TimeSignatureError::MissingSlash(text.to_string()))?;

        let parse_part = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| TimeSignatureError::InvalidNumber(text.to_string()))
        };
        let num_beats = parse_part(beats)?;
        let beat_value = parse_part(value)?;

        if num_beats == 0 || beat_value == 0 {
            return Err(TimeSignatureError::ZeroPart(text.to_string()));
        }

        Ok(Self::new(num_beats, beat_value))
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_BEATS, DEFAULT_BEAT_VALUE)
    }
}

impl FromStr for TimeSignature {
    type Err = TimeSignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num_beats, self.beat_value)
    }
}
