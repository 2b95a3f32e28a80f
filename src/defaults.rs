//! Default values for tick accounting
//!
//! Provides the tick resolution and the default meter used when a caller
//! does not supply one.

/// Ticks per whole note
/// 16384 divides evenly down to 1/1024 notes, so every common beat value
/// yields an integral tick count per beat
pub const RESOLUTION: u32 = 16384;

/// Default beats per measure (common time)
pub const DEFAULT_NUM_BEATS: u32 = 4;

/// Default beat value (4 = quarter note)
pub const DEFAULT_BEAT_VALUE: u32 = 4;
