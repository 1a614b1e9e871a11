//! The single-tween time/value state machine
//!
//! A [`Tween`] interpolates between two values over a duration, clamping its
//! clock to `[0, duration]` and accounting any leftover time in `overflow`.
//! The overflow is what lets a [`crate::Sequence`] hand the remainder of a
//! frame's delta to the next tween in the chain.

use glide_ease::Easing;

/// A timed interpolation between two values along an easing curve.
///
/// Plain value type: copying a tween copies its whole playback state, which
/// is how sequences take ownership of the tweens handed to them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub(crate) begin: f32,
    pub(crate) end: f32,
    pub(crate) change: f32,
    pub(crate) duration: f32,
    pub(crate) time: f32,
    pub(crate) overflow: f32,
    pub(crate) easing: Easing,
    pub(crate) reverse: bool,
}

impl Tween {
    /// Create a tween from `begin` to `end` over `duration`.
    ///
    /// `duration` must be positive; the update path assumes it and does not
    /// re-check. The restore path in [`crate::record`] is where a bad
    /// duration gets rejected.
    pub fn new(begin: f32, end: f32, duration: f32, easing: Easing) -> Self {
        Self {
            begin,
            end,
            change: end - begin,
            duration,
            time: 0.0,
            overflow: 0.0,
            easing,
            reverse: false,
        }
    }

    /// Set the absolute elapsed time and return `(value, finished)`.
    ///
    /// The clock clamps to `[0, duration]`; whatever was cut off lands in
    /// [`Tween::overflow`] with its sign intact (negative for an undershoot,
    /// positive for an overshoot).
    ///
    /// `finished` follows the playback direction: a reversed tween is done
    /// at `time <= 0`, a forward one at `time >= duration`. Note that a
    /// freshly constructed tween flipped to reverse therefore reports
    /// finished before it has ever advanced.
    pub fn set(&mut self, time: f32) -> (f32, bool) {
        let value = if time <= 0.0 {
            self.overflow = time;
            self.time = 0.0;
            self.begin
        } else if time >= self.duration {
            self.overflow = time - self.duration;
            self.time = self.duration;
            self.end
        } else {
            self.overflow = 0.0;
            self.time = time;
            self.easing.apply(self.time, self.begin, self.change, self.duration)
        };
        (value, self.is_finished())
    }

    /// Advance the clock by `dt` (against it when reversed) and return
    /// `(value, finished)`. `dt` may be zero or negative.
    pub fn update(&mut self, dt: f32) -> (f32, bool) {
        if self.reverse {
            self.set(self.time - dt)
        } else {
            self.set(self.time + dt)
        }
    }

    /// Rewind to the starting edge for the current direction: `duration`
    /// when reversed, `0` otherwise. Overflow is zero afterwards.
    pub fn reset(&mut self) {
        if self.reverse {
            self.set(self.duration);
        } else {
            self.set(0.0);
        }
    }

    /// The value at the current clock position, without mutating anything.
    pub fn value(&self) -> f32 {
        if self.time <= 0.0 {
            self.begin
        } else if self.time >= self.duration {
            self.end
        } else {
            self.easing.apply(self.time, self.begin, self.change, self.duration)
        }
    }

    /// Whether the tween has reached its finishing edge for the current
    /// direction.
    pub fn is_finished(&self) -> bool {
        if self.reverse {
            self.time <= 0.0
        } else {
            self.time >= self.duration
        }
    }

    pub fn begin(&self) -> f32 {
        self.begin
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Signed leftover time from the most recent time-setting operation.
    pub fn overflow(&self) -> f32 {
        self.overflow
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Flip the playback direction without touching the clock.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }
}
