//! Notation Voice
//!
//! Rhythmic tick accounting for a single notational voice. A voice checks
//! the durations of its notes, rests and other tickables against the tick
//! budget of its time signature, and hands them to their own draw routines
//! in order.

pub mod defaults;
pub mod models;
pub mod voice;

// Re-export commonly used types
pub use models::*;
pub use voice::{Result, Tickable, Voice, VoiceError, VoiceGroupId, VoiceId, VoiceSummary};
