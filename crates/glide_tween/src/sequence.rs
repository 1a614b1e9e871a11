//! Sequence orchestration
//!
//! A [`Sequence`] chains tweens end to end and drives the active one each
//! frame. When a tween finishes mid-frame, its leftover time carries into
//! the next tween within the same [`Sequence::update`] call, so a large
//! delta can cross several tween boundaries (and loop boundaries) at once.
//!
//! The orchestration state is `(index, reverse, yoyo, loop_remaining)`.
//! `index` is allowed to sit at `-1` or `len` between calls as the marker
//! for "ran off that end"; every public operation that needs a live tween
//! resolves it first.

use crate::tween::Tween;

/// An ordered, loopable, reversible chain of tweens.
///
/// Tweens are owned by value: adding a tween copies it, and nothing the
/// caller does to the original afterwards affects the sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    pub(crate) tweens: Vec<Tween>,
    pub(crate) index: isize,
    pub(crate) yoyo: bool,
    pub(crate) reverse: bool,
    pub(crate) loop_count: i32,
    pub(crate) loop_remaining: i32,
}

impl Sequence {
    /// Create a sequence that plays the given tweens in order, once.
    pub fn new(tweens: Vec<Tween>) -> Self {
        Self {
            tweens,
            index: 0,
            yoyo: false,
            reverse: false,
            loop_count: 1,
            loop_remaining: 1,
        }
    }

    /// Append one or more tweens, in order, to the end of the chain.
    pub fn add(&mut self, tweens: impl IntoIterator<Item = Tween>) {
        self.tweens.extend(tweens);
    }

    /// Remove the tween at `index`. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.tweens.len() {
            self.tweens.remove(index);
        }
    }

    /// Advance the sequence by `dt` and return
    /// `(value, tween_completed, sequence_completed)`.
    ///
    /// `tween_completed` reports whether any tween boundary was crossed
    /// during this call. `sequence_completed` reports that the final loop
    /// has been exhausted (or that the sequence is empty). Neither is
    /// sticky; they describe this call only.
    ///
    /// An empty sequence returns the `(0.0, false, true)` sentinel rather
    /// than failing: an animation tick never aborts a frame.
    pub fn update(&mut self, dt: f32) -> (f32, bool, bool) {
        if !self.has_tweens() {
            return (0.0, false, true);
        }

        let mut remaining = dt;
        let mut tween_completed = false;

        loop {
            let len = self.tweens.len() as isize;

            if self.index < 0 || self.index >= len {
                if self.yoyo {
                    if self.index >= len {
                        // Bounce off the far end: flip direction, re-enter
                        // the last tween. No loop is consumed here.
                        self.reverse = true;
                        self.index = len - 1;
                        let tween = &mut self.tweens[self.index as usize];
                        tween.reverse = true;
                        tween.reset();
                    } else {
                        // Bounce off the start: this is where a yoyo lap
                        // ends and a loop is spent.
                        self.reverse = false;
                        if self.loop_remaining >= 1 {
                            self.loop_remaining -= 1;
                        }
                        self.index = 0;
                        if self.loop_remaining == 0 || remaining == 0.0 {
                            return (self.tweens[0].begin, tween_completed, true);
                        }
                        tracing::trace!(
                            remaining = self.loop_remaining,
                            "sequence yoyo loop consumed"
                        );
                        let tween = &mut self.tweens[0];
                        tween.reverse = false;
                        tween.reset();
                    }
                } else {
                    // Ran off either end: one full traversal is done.
                    if self.loop_remaining >= 1 {
                        self.loop_remaining -= 1;
                    }
                    if self.loop_remaining == 0 || remaining == 0.0 {
                        // The index stays out of range as the at-rest
                        // completed marker; clamp only to pick the
                        // boundary value.
                        let clamped = self.index.clamp(0, len - 1) as usize;
                        let value = if self.index < 0 {
                            self.tweens[clamped].begin
                        } else {
                            self.tweens[clamped].end
                        };
                        return (value, tween_completed, true);
                    }
                    tracing::trace!(
                        remaining = self.loop_remaining,
                        "sequence loop consumed"
                    );
                    self.index = if self.index >= len { 0 } else { len - 1 };
                    let tween = &mut self.tweens[self.index as usize];
                    tween.reverse = self.reverse;
                    tween.reset();
                }
            }

            let (value, finished) = self.tweens[self.index as usize].update(remaining);
            if !finished {
                return (value, tween_completed, false);
            }

            // Carry the leftover into the next tween. Direction is handled
            // by stepping the index, so only the magnitude travels.
            tween_completed = true;
            remaining = self.tweens[self.index as usize].overflow.abs();
            self.index += if self.reverse { -1 } else { 1 };
            if self.index >= 0 && self.index < len {
                let tween = &mut self.tweens[self.index as usize];
                tween.reverse = self.reverse;
                tween.reset();
            }
        }
    }

    /// The active tween index. Can sit at `-1` or `len` after a completed
    /// traversal.
    pub fn index(&self) -> isize {
        self.index
    }

    /// Jump to `index`, resetting the currently active tween first. The new
    /// index is not validated; an out-of-range value resolves on the next
    /// [`Sequence::update`].
    pub fn set_index(&mut self, index: isize) {
        let reverse = self.reverse;
        if let Some(active) = self.active_tween_mut() {
            active.reverse = reverse;
            active.reset();
        }
        self.index = index;
    }

    /// Set both the intended loop count and the remaining count. `-1` loops
    /// forever.
    pub fn set_loop(&mut self, count: i32) {
        self.loop_count = count;
        self.loop_remaining = count;
    }

    /// When set, hitting either end of the chain reverses direction instead
    /// of restarting from the front.
    pub fn set_yoyo(&mut self, yoyo: bool) {
        self.yoyo = yoyo;
    }

    /// Set the playback direction.
    ///
    /// A stale out-of-range index from a completed traversal is clamped
    /// back into range, and the new direction is pushed onto the active
    /// tween without resetting its clock, so reversal picks up exactly
    /// where playback stopped.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
        if self.tweens.is_empty() {
            return;
        }
        self.index = self.index.clamp(0, self.tweens.len() as isize - 1);
        self.tweens[self.index as usize].reverse = reverse;
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    pub fn is_yoyo(&self) -> bool {
        self.yoyo
    }

    /// Loops left to run; `-1` means unbounded.
    pub fn loop_remaining(&self) -> i32 {
        self.loop_remaining
    }

    /// Rewind everything: restore the loop budget, reset every tween, and
    /// jump back to the first one.
    pub fn reset(&mut self) {
        self.loop_remaining = self.loop_count;
        for tween in &mut self.tweens {
            tween.reset();
        }
        self.index = 0;
    }

    pub fn has_tweens(&self) -> bool {
        !self.tweens.is_empty()
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    fn active_tween_mut(&mut self) -> Option<&mut Tween> {
        usize::try_from(self.index)
            .ok()
            .and_then(|i| self.tweens.get_mut(i))
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_ease::Easing;

    fn linear(begin: f32, end: f32, duration: f32) -> Tween {
        Tween::new(begin, end, duration, Easing::Linear)
    }

    #[test]
    fn test_new() {
        let mut seq = Sequence::new(vec![linear(0.0, 1.0, 1.0)]);
        let (current, tween_done, seq_done) = seq.update(0.0);
        assert_eq!(current, 0.0);
        assert!(!tween_done);
        assert!(!seq_done);
        assert_eq!(seq.index(), 0);
    }

    #[test]
    fn test_update_within_first_tween() {
        let mut seq = Sequence::new(vec![linear(0.0, 1.0, 1.0), linear(1.0, 2.0, 1.0)]);
        let (current, tween_done, seq_done) = seq.update(0.5);
        assert_eq!(current, 0.5);
        assert!(!tween_done);
        assert!(!seq_done);
        assert_eq!(seq.index(), 0);
    }

    #[test]
    fn test_reset() {
        let mut seq = Sequence::new(vec![linear(0.0, 1.0, 1.0), linear(1.0, 2.0, 1.0)]);
        seq.update(1.5);
        seq.reset();
        assert_eq!(seq.index(), 0);
        assert_eq!(seq.tweens()[0].time(), 0.0);
        assert_eq!(seq.tweens()[0].overflow(), 0.0);
        assert_eq!(seq.tweens()[1].time(), 0.0);
        assert_eq!(seq.tweens()[1].overflow(), 0.0);
    }

    #[test]
    fn test_complete_first_exactly() {
        let mut seq = Sequence::new(vec![linear(0.0, 1.0, 1.0), linear(1.0, 2.0, 1.0)]);
        let (current, tween_done, seq_done) = seq.update(1.0);
        assert_eq!(current, 1.0);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.index(), 1);
    }

    #[test]
    fn test_overflow_into_second() {
        let mut seq = Sequence::new(vec![linear(0.0, 1.0, 1.0), linear(1.0, 2.0, 1.0)]);
        let (current, tween_done, seq_done) = seq.update(1.5);
        assert_eq!(current, 1.5);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.index(), 1);
    }

    #[test]
    fn test_chained_updates() {
        let mut seq = Sequence::new(vec![linear(0.0, 5.0, 1.0), linear(5.0, 0.0, 1.0)]);
        let (current, tween_done, seq_done) = seq.update(0.5);
        assert_eq!(current, 2.5);
        assert!(!tween_done);
        assert!(!seq_done);

        let (current, tween_done, seq_done) = seq.update(1.0);
        assert_eq!(current, 2.5);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.index(), 1);
    }

    #[test]
    fn test_overflow_and_complete() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 1.0, 1.0),
            linear(1.0, 2.0, 1.0),
            linear(2.0, 3.0, 1.0),
        ]);
        let (current, tween_done, seq_done) = seq.update(3.5);
        assert_eq!(current, 3.0);
        assert!(tween_done);
        assert!(seq_done);
        assert_eq!(seq.index(), 3);
    }

    #[test]
    fn test_loops() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 1.0, 1.0),
            linear(1.0, 2.0, 1.0),
            linear(2.0, 3.0, 1.0),
        ]);
        seq.set_loop(2);

        let (current, tween_done, seq_done) = seq.update(5.25);
        assert_eq!(current, 2.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 1);
        assert_eq!(seq.index(), 2);

        let (current, tween_done, seq_done) = seq.update(0.75);
        assert_eq!(current, 3.0);
        assert!(tween_done);
        assert!(seq_done);
        assert_eq!(seq.loop_remaining(), 0);
        assert_eq!(seq.index(), 3);
    }

    #[test]
    fn test_exact_boundary_terminates_with_loops_remaining() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 1.0, 1.0),
            linear(1.0, 2.0, 1.0),
            linear(2.0, 3.0, 1.0),
        ]);
        seq.set_loop(2);

        // Landing exactly on the boundary leaves no time to distribute, so
        // the call terminates even though a lap is still budgeted.
        let (current, tween_done, seq_done) = seq.update(3.0);
        assert_eq!(current, 3.0);
        assert!(tween_done);
        assert!(seq_done);
        assert_eq!(seq.loop_remaining(), 1);
        assert_eq!(seq.index(), 3);

        // The next call re-enters the parked boundary and spends the
        // remaining lap there.
        let (current, tween_done, seq_done) = seq.update(1.0);
        assert_eq!(current, 3.0);
        assert!(!tween_done);
        assert!(seq_done);
        assert_eq!(seq.loop_remaining(), 0);
        assert_eq!(seq.index(), 3);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut seq = Sequence::new(vec![linear(0.0, 1.0, 1.0)]);
        seq.add([linear(1.0, 2.0, 1.0), linear(2.0, 3.0, 1.0)]);
        assert_eq!(seq.tweens().len(), 3);

        let (current, tween_done, seq_done) = seq.update(2.5);
        assert_eq!(current, 2.5);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.index(), 2);
    }

    #[test]
    fn test_loops_forever() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 1.0, 1.0),
            linear(1.0, 2.0, 1.0),
            linear(2.0, 3.0, 1.0),
        ]);
        seq.set_loop(-1);
        let (current, tween_done, seq_done) = seq.update(3.0 * 1_000_000.0 + 2.25);
        assert_eq!(current, 2.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), -1);
        assert_eq!(seq.index(), 2);
    }

    #[test]
    fn test_yoyo() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 1.0, 1.0),
            linear(1.0, 2.0, 1.0),
            linear(2.0, 3.0, 1.0),
        ]);
        seq.set_yoyo(true);

        // Forward 3.0 to the end, then 2.75 back down.
        let (current, tween_done, seq_done) = seq.update(5.75);
        assert_eq!(current, 0.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 1);
        assert_eq!(seq.index(), 0);
        assert!(seq.is_reverse());

        // The last 0.25 lands on the start, which ends the lap.
        let (current, tween_done, seq_done) = seq.update(0.25);
        assert_eq!(current, 0.0);
        assert!(tween_done);
        assert!(seq_done);
        assert_eq!(seq.loop_remaining(), 0);
        assert_eq!(seq.index(), 0);
        assert!(!seq.is_reverse());
    }

    #[test]
    fn test_yoyo_with_loops() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 1.0, 1.0),
            linear(1.0, 2.0, 1.0),
            linear(2.0, 3.0, 1.0),
        ]);
        seq.set_yoyo(true);
        seq.set_loop(2);

        let (current, tween_done, seq_done) = seq.update(7.25);
        assert_eq!(current, 1.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 1);
        assert_eq!(seq.index(), 1);

        let (current, tween_done, seq_done) = seq.update(4.75);
        assert_eq!(current, 0.0);
        assert!(tween_done);
        assert!(seq_done);
        assert_eq!(seq.loop_remaining(), 0);
        assert_eq!(seq.index(), 0);
    }

    #[test]
    fn test_set_reverse() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 1.0, 1.0),
            linear(1.0, 2.0, 1.0),
            linear(2.0, 3.0, 1.0),
        ]);
        seq.set_loop(2);

        let (current, tween_done, seq_done) = seq.update(2.25);
        assert_eq!(current, 2.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 2);
        assert_eq!(seq.index(), 2);

        seq.set_reverse(true);

        // Runs back down through the chain
        let (current, tween_done, seq_done) = seq.update(2.0);
        assert_eq!(current, 0.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 2);
        assert_eq!(seq.index(), 0);
        assert!(seq.is_reverse());

        // Crossing the start consumes a loop and wraps to the far end,
        // still in reverse
        let (current, tween_done, seq_done) = seq.update(2.0);
        assert_eq!(current, 1.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 1);
        assert_eq!(seq.index(), 1);
        assert!(seq.is_reverse());

        // Hits the start with no loops left; index parks at -1
        let (current, tween_done, seq_done) = seq.update(2.0);
        assert_eq!(current, 0.0);
        assert!(tween_done);
        assert!(seq_done);
        assert_eq!(seq.loop_remaining(), 0);
        assert_eq!(seq.index(), -1);
        assert!(seq.is_reverse());
    }

    #[test]
    fn test_set_reverse_with_yoyo() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 1.0, 1.0),
            linear(1.0, 2.0, 1.0),
            linear(2.0, 3.0, 1.0),
        ]);
        seq.set_yoyo(true);
        seq.set_loop(2);

        let (current, tween_done, seq_done) = seq.update(2.25);
        assert_eq!(current, 2.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 2);
        assert_eq!(seq.index(), 2);

        seq.set_reverse(true);

        let (current, tween_done, seq_done) = seq.update(2.0);
        assert_eq!(current, 0.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 2);
        assert_eq!(seq.index(), 0);

        // Consumes a loop at the start despite never reaching the end,
        // then heads forward again
        let (current, tween_done, seq_done) = seq.update(2.0);
        assert_eq!(current, 1.75);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 1);
        assert_eq!(seq.index(), 1);

        // Hits the end and yoyos
        let (current, tween_done, seq_done) = seq.update(2.0);
        assert_eq!(current, 2.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 1);
        assert_eq!(seq.index(), 2);
        assert!(seq.is_reverse());

        seq.set_reverse(false);

        // Hits the end again and yoyos the same way
        let (current, tween_done, seq_done) = seq.update(1.5);
        assert_eq!(current, 2.25);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 1);
        assert_eq!(seq.index(), 2);

        // Runs out the loop budget at the start
        let (current, tween_done, seq_done) = seq.update(2.5);
        assert_eq!(current, 0.0);
        assert!(tween_done);
        assert!(seq_done);
        assert_eq!(seq.loop_remaining(), 0);
        assert_eq!(seq.index(), 0);
    }

    #[test]
    fn test_set_reverse_after_complete() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 1.0, 1.0),
            linear(1.0, 2.0, 1.0),
            linear(2.0, 3.0, 1.0),
        ]);
        seq.set_loop(1);

        let (current, tween_done, seq_done) = seq.update(3.0);
        assert_eq!(current, 3.0);
        assert!(tween_done);
        assert!(seq_done);
        assert_eq!(seq.loop_remaining(), 0);
        assert_eq!(seq.index(), 3);

        // Reversing clamps the stale index back into range
        seq.set_reverse(true);
        seq.set_loop(1);

        let (current, tween_done, seq_done) = seq.update(2.0);
        assert_eq!(current, 1.0);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.loop_remaining(), 1);
        assert_eq!(seq.index(), 0);
        assert!(seq.is_reverse());
    }

    #[test]
    fn test_remove() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 1.0, 1.0),
            linear(1.0, 2.0, 1.0),
            linear(2.0, 3.0, 1.0),
            linear(3.0, 4.0, 1.0),
            linear(4.0, 5.0, 1.0),
        ]);
        assert_eq!(seq.tweens().len(), 5);
        seq.remove(2);
        assert_eq!(seq.tweens().len(), 4);

        let (current, tween_done, seq_done) = seq.update(2.5);
        assert_eq!(current, 3.5);
        assert!(tween_done);
        assert!(!seq_done);
        assert_eq!(seq.index(), 2);

        seq.remove(0);
        seq.remove(0);
        seq.remove(0);
        assert_eq!(seq.tweens().len(), 1);
        // Out-of-range removes are no-ops
        seq.remove(0);
        assert_eq!(seq.tweens().len(), 0);
        seq.remove(2);
        assert_eq!(seq.tweens().len(), 0);
    }

    #[test]
    fn test_empty_sequence() {
        let mut seq = Sequence::default();
        assert!(!seq.has_tweens());
        seq.add([linear(0.0, 5.0, 1.0)]);
        assert!(seq.has_tweens());
        seq.remove(0);
        assert!(!seq.has_tweens());

        let (current, tween_done, seq_done) = seq.update(1.0);
        assert_eq!(current, 0.0);
        assert!(!tween_done);
        assert!(seq_done);
    }

    #[test]
    fn test_set_index() {
        let mut seq = Sequence::new(vec![linear(0.0, 1.0, 1.0), linear(1.0, 2.0, 1.0)]);
        seq.set_index(1);
        let (current, tween_done, seq_done) = seq.update(1.5);
        assert_eq!(current, 2.0);
        assert!(tween_done);
        assert!(seq_done);
        assert_eq!(seq.index(), 2);
    }

    #[test]
    fn test_set_index_out_of_range_resolves_lazily() {
        let mut seq = Sequence::new(vec![linear(0.0, 1.0, 1.0), linear(1.0, 2.0, 1.0)]);
        seq.set_index(7);
        let (current, tween_done, seq_done) = seq.update(0.5);
        assert_eq!(current, 2.0);
        assert!(!tween_done);
        assert!(seq_done);
    }

    #[test]
    fn test_removal_mid_flight() {
        let mut seq = Sequence::new(vec![
            linear(0.0, 5.0, 1.0),
            linear(5.0, 0.0, 1.0),
            linear(0.0, 2.0, 2.0),
            linear(2.0, 0.0, 2.0),
            linear(0.0, 1.0, 100.0),
        ]);
        seq.remove(0);
        seq.remove(0);
        assert_eq!(seq.tweens().len(), 3);

        let (current, tween_done, seq_done) = seq.update(1.0);
        assert_eq!(current, 1.0);
        assert!(!tween_done);
        assert!(!seq_done);

        let (current, tween_done, seq_done) = seq.update(1.0);
        assert_eq!(current, 2.0);
        assert_eq!(seq.index(), 1);
        assert!(tween_done);
        assert!(!seq_done);

        let (_, _, seq_done) = seq.update(2.0);
        assert_eq!(seq.index(), 2);
        assert!(!seq_done);

        // Removing the now-active tail leaves the index dangling; the next
        // update resolves it as completion instead of indexing out of range.
        seq.remove(2);
        let (_, tween_done, seq_done) = seq.update(1.0);
        assert!(!tween_done);
        assert!(seq_done);
    }
}
