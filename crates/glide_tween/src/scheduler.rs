//! Animation scheduler
//!
//! Owns free-standing tweens and sequences behind slotmap ids and updates
//! them all once per frame. The scheduler has no orchestration logic of its
//! own; it measures the frame delta and caches each animation's latest
//! result for polling.

use slotmap::{new_key_type, SlotMap};
use std::time::Instant;

use crate::sequence::Sequence;
use crate::tween::Tween;

new_key_type! {
    pub struct TweenId;
    pub struct SequenceId;
}

struct TweenSlot {
    tween: Tween,
    value: f32,
    finished: bool,
}

struct SequenceSlot {
    sequence: Sequence,
    value: f32,
    finished: bool,
}

/// Ticks all registered animations and caches their latest values.
pub struct TweenScheduler {
    tweens: SlotMap<TweenId, TweenSlot>,
    sequences: SlotMap<SequenceId, SequenceSlot>,
    last_frame: Instant,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
            sequences: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    pub fn add_tween(&mut self, tween: Tween) -> TweenId {
        let value = tween.value();
        let finished = tween.is_finished();
        self.tweens.insert(TweenSlot {
            tween,
            value,
            finished,
        })
    }

    pub fn add_sequence(&mut self, sequence: Sequence) -> SequenceId {
        let value = sequence.tweens().first().map_or(0.0, Tween::value);
        let finished = !sequence.has_tweens();
        self.sequences.insert(SequenceSlot {
            sequence,
            value,
            finished,
        })
    }

    pub fn tween(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(id).map(|slot| &slot.tween)
    }

    pub fn tween_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        self.tweens.get_mut(id).map(|slot| &mut slot.tween)
    }

    pub fn remove_tween(&mut self, id: TweenId) -> Option<Tween> {
        self.tweens.remove(id).map(|slot| slot.tween)
    }

    pub fn sequence(&self, id: SequenceId) -> Option<&Sequence> {
        self.sequences.get(id).map(|slot| &slot.sequence)
    }

    pub fn sequence_mut(&mut self, id: SequenceId) -> Option<&mut Sequence> {
        self.sequences.get_mut(id).map(|slot| &mut slot.sequence)
    }

    pub fn remove_sequence(&mut self, id: SequenceId) -> Option<Sequence> {
        self.sequences.remove(id).map(|slot| slot.sequence)
    }

    /// Advance every animation by the wall-clock time since the last tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(dt);
    }

    /// Advance every animation by an explicit delta. Useful for fixed-step
    /// callers and tests.
    pub fn advance(&mut self, dt: f32) {
        for (_, slot) in self.tweens.iter_mut() {
            let (value, finished) = slot.tween.update(dt);
            slot.value = value;
            slot.finished = finished;
        }
        for (id, slot) in self.sequences.iter_mut() {
            let (value, _, finished) = slot.sequence.update(dt);
            slot.value = value;
            if finished && !slot.finished {
                tracing::trace!(?id, "sequence finished");
            }
            slot.finished = finished;
        }
    }

    /// Latest value produced for a tween.
    pub fn tween_value(&self, id: TweenId) -> Option<f32> {
        self.tweens.get(id).map(|slot| slot.value)
    }

    /// Latest value produced for a sequence.
    pub fn sequence_value(&self, id: SequenceId) -> Option<f32> {
        self.sequences.get(id).map(|slot| slot.value)
    }

    pub fn tween_finished(&self, id: TweenId) -> Option<bool> {
        self.tweens.get(id).map(|slot| slot.finished)
    }

    pub fn sequence_finished(&self, id: SequenceId) -> Option<bool> {
        self.sequences.get(id).map(|slot| slot.finished)
    }

    /// Whether anything registered is still mid-flight.
    pub fn has_active_animations(&self) -> bool {
        self.tweens.iter().any(|(_, slot)| !slot.finished)
            || self.sequences.iter().any(|(_, slot)| !slot.finished)
    }

    pub fn animation_count(&self) -> usize {
        self.tweens.len() + self.sequences.len()
    }
}

impl Default for TweenScheduler {
    fn default() -> Self {
        Self::new()
    }
}
