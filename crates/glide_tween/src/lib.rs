//! Glide Tween System
//!
//! Timed interpolation driven by a caller-owned update loop: feed an elapsed
//! delta once per frame, get back the current value and completion signals.
//!
//! # Features
//!
//! - **Tweens**: single interpolations with clamping and signed overflow
//!   accounting
//! - **Sequences**: ordered chains with looping, reversal, and yoyo
//!   bouncing, carrying leftover time across tween boundaries in one call
//! - **Scheduler**: slotmap-backed bookkeeping for many animations at once
//! - **Persistence**: serde records restored through an explicit easing
//!   registry
//!
//! Everything is single-threaded and non-blocking; the update path never
//! errors and never allocates.

pub mod record;
pub mod scheduler;
pub mod sequence;
pub mod tween;

pub use glide_ease::{curves, EaseFn, Easing, EasingRegistry};
pub use record::{RestoreError, SequenceRecord, TweenRecord};
pub use scheduler::{SequenceId, TweenId, TweenScheduler};
pub use sequence::Sequence;
pub use tween::Tween;
