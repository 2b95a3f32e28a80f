//! Error types for voice tick accounting
//!
//! Both kinds are fatal to the failing call but not to the voice: it stays
//! usable afterwards.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoiceError {
    /// A strict or full voice was asked to hold more ticks than it has.
    /// The voice's total ticks have already been reduced when this is returned.
    #[error("BadArgument: {0}")]
    BadArgument(String),

    /// The voice has not been assigned to a voice group yet
    #[error("NoVoiceGroup: {0}")]
    NoVoiceGroup(String),
}

impl VoiceError {
    pub(crate) fn too_many_ticks() -> Self {
        VoiceError::BadArgument("Too many ticks.".to_string())
    }

    pub(crate) fn no_voice_group() -> Self {
        VoiceError::NoVoiceGroup("No voice group for voice.".to_string())
    }

    /// Stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            VoiceError::BadArgument(_) => "BadArgument",
            VoiceError::NoVoiceGroup(_) => "NoVoiceGroup",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            VoiceError::BadArgument(msg) | VoiceError::NoVoiceGroup(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, VoiceError>;
