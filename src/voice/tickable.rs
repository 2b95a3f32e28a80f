//! Collaborator capabilities consumed by a voice
//!
//! A `Tickable` is anything that occupies (or explicitly does not occupy)
//! musical time: notes, rests, clef changes. The voice only counts its ticks
//! and hands it the drawing context; glyph geometry lives in the implementor.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Non-owning handle a tickable keeps back to the voice that accepted it
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoiceId(u64);

static NEXT_VOICE_ID: AtomicU64 = AtomicU64::new(1);

impl VoiceId {
    /// Allocate a process-unique id
    pub(crate) fn next() -> Self {
        VoiceId(NEXT_VOICE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Non-owning handle to an externally owned group of synchronized voices
/// (typically an index into the formatter's group list)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoiceGroupId(pub usize);

/// A time-occupying musical element
pub trait Tickable {
    /// Rendering surface handed to `set_context`
    type Context: Clone;
    /// Staff geometry handed to `set_stave`
    type Stave: Clone;
    /// Failure raised by the element's own draw routine
    type Error;

    /// True for symbols with no temporal footprint (e.g. a clef change)
    fn should_ignore_ticks(&self) -> bool;

    /// Duration in ticks
    fn ticks(&self) -> u32;

    fn set_voice(&mut self, voice: VoiceId);

    fn set_context(&mut self, context: Self::Context);

    fn set_stave(&mut self, stave: Self::Stave);

    fn draw(&mut self) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_ids_are_unique() {
        let a = VoiceId::next();
        let b = VoiceId::next();
        assert_ne!(a, b);
        assert!(b.value() > a.value());
    }
}
