//! Models module for voice tick accounting
//!
//! This module contains the value types a voice is configured with:
//! the time signature, the validation mode and the stored options record.

pub mod mode;
pub mod options;
pub mod time_signature;

// Re-export commonly used types
pub use mode::VoiceMode;
pub use options::VoiceOptions;
pub use time_signature::{TimeSignature, TimeSignatureError};
