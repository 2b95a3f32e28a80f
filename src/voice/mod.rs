//! Voice: tick accounting for one rhythmic line
//!
//! A voice is built from a time signature, accepts tickables one at a time
//! while checking them against the measure's tick budget, and later draws
//! them in insertion order.
//!
//! ```text
//! TimeSignature → Voice::new → add_tickable* → summary / is_complete → draw
//! ```
//!
//! The smallest tick count it tracks is what the formatter uses to space
//! symbols proportionally to their duration.

pub mod errors;
pub mod summary;
pub mod tickable;

pub use errors::{Result, VoiceError};
pub use summary::VoiceSummary;
pub use tickable::{Tickable, VoiceGroupId, VoiceId};

use crate::models::{TimeSignature, VoiceMode, VoiceOptions};

/// One rhythmic line of tickables, checked against a measure's tick budget
#[derive(Debug)]
pub struct Voice<T: Tickable> {
    id: VoiceId,
    time: TimeSignature,
    total_ticks: i64,
    ticks_used: i64,
    smallest_tick_count: i64,
    /// Filled by a width-aware formatting pass; stays 0 here
    largest_tick_width: i64,
    mode: VoiceMode,
    tickables: Vec<T>,
    voice_group: Option<VoiceGroupId>,
}

impl<T: Tickable> Voice<T> {
    pub fn new(time: TimeSignature) -> Self {
        // Counters are set by init
        let mut voice = Self {
            id: VoiceId::next(),
            time,
            total_ticks: 0,
            ticks_used: 0,
            smallest_tick_count: 0,
            largest_tick_width: 0,
            mode: VoiceMode::Strict,
            tickables: Vec::new(),
            voice_group: None,
        };
        voice.init(time);
        voice
    }

    /// Build a voice from a stored configuration record
    pub fn with_options(options: VoiceOptions) -> Self {
        let mut voice = Self::new(options.time);
        voice.set_mode(options.mode);
        voice
    }

    /// Reset the voice for a new time signature.
    ///
    /// Clears the tickables, counters, mode and voice group. The voice keeps
    /// its id so handles held by the layout pass stay valid.
    pub fn init(&mut self, time: TimeSignature) {
        self.time = time;
        self.total_ticks = time.total_ticks();

        self.tickables.clear();
        self.ticks_used = 0;
        self.smallest_tick_count = self.total_ticks;
        self.largest_tick_width = 0;
        self.mode = VoiceMode::Strict;
        self.voice_group = None;

        log::debug!(
            "voice {:?}: init {} ({} ticks)",
            self.id,
            time,
            self.total_ticks
        );
    }

    pub fn id(&self) -> VoiceId {
        self.id
    }

    pub fn time(&self) -> TimeSignature {
        self.time
    }

    /// Voice group this voice was assigned to by the multi-voice formatter
    pub fn voice_group(&self) -> Result<VoiceGroupId> {
        self.voice_group.ok_or_else(VoiceError::no_voice_group)
    }

    pub fn set_voice_group(&mut self, group: VoiceGroupId) -> &mut Self {
        self.voice_group = Some(group);
        self
    }

    /// `true` selects `Strict`, `false` selects `Soft`. `Full` is only
    /// reachable through `set_mode`.
    pub fn set_strict(&mut self, strict: bool) -> &mut Self {
        self.mode = if strict {
            VoiceMode::Strict
        } else {
            VoiceMode::Soft
        };
        self
    }

    /// Change the validation policy for subsequent adds.
    /// Tickables already accepted are not re-validated.
    pub fn set_mode(&mut self, mode: VoiceMode) -> &mut Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> VoiceMode {
        self.mode
    }

    /// Strict and full voices are complete only when the used ticks match
    /// the total exactly; soft voices are always complete.
    pub fn is_complete(&self) -> bool {
        match self.mode {
            VoiceMode::Strict | VoiceMode::Full => self.ticks_used == self.total_ticks,
            VoiceMode::Soft => true,
        }
    }

    pub fn total_ticks(&self) -> i64 {
        self.total_ticks
    }

    pub fn ticks_used(&self) -> i64 {
        self.ticks_used
    }

    pub fn largest_tick_width(&self) -> i64 {
        self.largest_tick_width
    }

    pub fn smallest_tick_count(&self) -> i64 {
        self.smallest_tick_count
    }

    pub fn tickables(&self) -> &[T] {
        &self.tickables
    }

    /// Add a tickable to the end of the voice.
    ///
    /// In strict and full mode an add that would overflow the measure fails
    /// with `BadArgument`, and the rejected duration is taken off
    /// `total_ticks` (not off `ticks_used`, which keeps its previous value).
    /// The rejected tickable is dropped.
    pub fn add_tickable(&mut self, mut tickable: T) -> Result<&mut Self> {
        if !tickable.should_ignore_ticks() {
            let num_ticks = i64::from(tickable.ticks());
            let ticks_used = self.ticks_used + num_ticks;

            if self.mode.enforces_ceiling() && ticks_used > self.total_ticks {
                self.total_ticks -= num_ticks;
                log::warn!(
                    "voice {:?}: rejected {} ticks ({} of {} used, {} mode); total shrinks to {}",
                    self.id,
                    num_ticks,
                    self.ticks_used,
                    self.total_ticks + num_ticks,
                    self.mode,
                    self.total_ticks
                );
                return Err(VoiceError::too_many_ticks());
            }

            self.ticks_used = ticks_used;

            // Smallest tickable drives proportional spacing
            if num_ticks < self.smallest_tick_count {
                self.smallest_tick_count = num_ticks;
            }
        }

        tickable.set_voice(self.id);
        self.tickables.push(tickable);

        log::debug!(
            "voice {:?}: {} tickables, {}/{} ticks",
            self.id,
            self.tickables.len(),
            self.ticks_used,
            self.total_ticks
        );
        Ok(self)
    }

    /// Add tickables in order. The first failure is returned immediately;
    /// tickables accepted before it stay in the voice.
    pub fn add_tickables<I>(&mut self, tickables: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
    {
        for tickable in tickables {
            self.add_tickable(tickable)?;
        }
        Ok(self)
    }

    /// Draw every tickable in insertion order on the given surface and stave.
    /// A tickable's draw error stops the pass and is returned as-is.
    pub fn draw(
        &mut self,
        context: &T::Context,
        stave: &T::Stave,
    ) -> std::result::Result<(), T::Error> {
        for (index, tickable) in self.tickables.iter_mut().enumerate() {
            log::trace!("voice {:?}: drawing tickable {}", self.id, index);
            tickable.set_context(context.clone());
            tickable.set_stave(stave.clone());
            tickable.draw()?;
        }
        Ok(())
    }

    /// Snapshot of the accounting state for the formatter
    pub fn summary(&self) -> VoiceSummary {
        VoiceSummary {
            total_ticks: self.total_ticks,
            ticks_used: self.ticks_used,
            smallest_tick_count: self.smallest_tick_count,
            largest_tick_width: self.largest_tick_width,
            mode: self.mode,
            tickable_count: self.tickables.len(),
            complete: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal tickable: a duration and an ignore flag
    #[derive(Debug)]
    struct Rest {
        ticks: u32,
        ignore: bool,
        voice: Option<VoiceId>,
    }

    fn rest(ticks: u32) -> Rest {
        Rest {
            ticks,
            ignore: false,
            voice: None,
        }
    }

    impl Tickable for Rest {
        type Context = ();
        type Stave = ();
        type Error = ();

        fn should_ignore_ticks(&self) -> bool {
            self.ignore
        }

        fn ticks(&self) -> u32 {
            self.ticks
        }

        fn set_voice(&mut self, voice: VoiceId) {
            self.voice = Some(voice);
        }

        fn set_context(&mut self, _context: ()) {}

        fn set_stave(&mut self, _stave: ()) {}

        fn draw(&mut self) -> std::result::Result<(), ()> {
            Ok(())
        }
    }

    fn common_time() -> Voice<Rest> {
        Voice::new(TimeSignature::new(4, 4))
    }

    #[test]
    fn test_new_voice_defaults() {
        let voice = common_time();
        assert_eq!(voice.total_ticks(), 16384);
        assert_eq!(voice.ticks_used(), 0);
        assert_eq!(voice.smallest_tick_count(), 16384);
        assert_eq!(voice.largest_tick_width(), 0);
        assert_eq!(voice.mode(), VoiceMode::Strict);
        assert!(voice.tickables().is_empty());
        assert!(!voice.is_complete());
    }

    #[test]
    fn test_add_sets_voice_reference() {
        let mut voice = common_time();
        voice.add_tickable(rest(4096)).unwrap();
        assert_eq!(voice.tickables()[0].voice, Some(voice.id()));
    }

    #[test]
    fn test_strict_overflow_shrinks_total_ticks() {
        let mut voice = common_time();
        voice.add_tickables(vec![rest(8192), rest(4096)]).unwrap();

        let err = voice.add_tickable(rest(8192)).unwrap_err();
        assert_eq!(err.kind(), "BadArgument");
        // The rejected duration comes off the budget, not off ticks_used
        assert_eq!(voice.total_ticks(), 16384 - 8192);
        assert_eq!(voice.ticks_used(), 12288);
        assert_eq!(voice.tickables().len(), 2);
    }

    #[test]
    fn test_failed_add_keeps_smallest_tick_count() {
        let mut voice = common_time();
        voice.add_tickable(rest(16384)).unwrap();
        assert!(voice.add_tickable(rest(64)).is_err());
        assert_eq!(voice.smallest_tick_count(), 16384);
    }

    #[test]
    fn test_set_strict_toggles_soft() {
        let mut voice = common_time();
        voice.set_strict(false);
        assert_eq!(voice.mode(), VoiceMode::Soft);
        voice.set_mode(VoiceMode::Full).set_strict(true);
        assert_eq!(voice.mode(), VoiceMode::Strict);
    }

    #[test]
    fn test_init_resets_everything_but_id() {
        let mut voice = common_time();
        let id = voice.id();
        voice
            .set_mode(VoiceMode::Soft)
            .set_voice_group(VoiceGroupId(3))
            .add_tickables(vec![rest(16384), rest(16384)])
            .unwrap();

        voice.init(TimeSignature::new(3, 4));
        assert_eq!(voice.id(), id);
        assert_eq!(voice.time(), TimeSignature::new(3, 4));
        assert_eq!(voice.total_ticks(), 12288);
        assert_eq!(voice.ticks_used(), 0);
        assert_eq!(voice.smallest_tick_count(), 12288);
        assert_eq!(voice.mode(), VoiceMode::Strict);
        assert!(voice.tickables().is_empty());
        assert!(voice.voice_group().is_err());
    }

    #[test]
    fn test_with_options() {
        let options = VoiceOptions::new(TimeSignature::new(2, 4), VoiceMode::Full);
        let voice: Voice<Rest> = Voice::with_options(options);
        assert_eq!(voice.total_ticks(), 8192);
        assert_eq!(voice.mode(), VoiceMode::Full);
    }
}
