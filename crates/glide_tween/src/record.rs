//! Persisted snapshots of tweens and sequences
//!
//! Records are plain serde structs: saving is an infallible snapshot, and
//! restoring resolves easing names back to curves through an
//! [`EasingRegistry`] the caller supplies. Restore is the one place this
//! crate validates configuration; the per-frame update path never does.

use glide_ease::EasingRegistry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sequence::Sequence;
use crate::tween::Tween;

/// Errors restoring a persisted record.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The record names an easing curve the registry cannot resolve.
    #[error("unknown easing function `{0}`")]
    UnknownEasing(String),
    /// A tween with a non-positive duration can never advance.
    #[error("duration must be positive, got {0}")]
    NonPositiveDuration(f32),
}

/// The persisted form of a [`Tween`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TweenRecord {
    pub begin: f32,
    pub end: f32,
    pub change: f32,
    pub duration: f32,
    pub time: f32,
    pub overflow: f32,
    pub reverse: bool,
    pub easing: String,
}

/// The persisted form of a [`Sequence`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub tweens: Vec<TweenRecord>,
    pub index: isize,
    pub yoyo: bool,
    pub reverse: bool,
    pub loop_count: i32,
    pub loop_remaining: i32,
}

impl Tween {
    /// Snapshot the full playback state.
    pub fn to_record(&self) -> TweenRecord {
        TweenRecord {
            begin: self.begin,
            end: self.end,
            change: self.change,
            duration: self.duration,
            time: self.time,
            overflow: self.overflow,
            reverse: self.reverse,
            easing: self.easing.name().to_owned(),
        }
    }

    /// Rebuild a tween from a record, resolving its easing name through
    /// `registry`.
    pub fn from_record(
        record: &TweenRecord,
        registry: &EasingRegistry,
    ) -> Result<Self, RestoreError> {
        if record.duration <= 0.0 {
            return Err(RestoreError::NonPositiveDuration(record.duration));
        }
        let easing = registry
            .resolve(&record.easing)
            .ok_or_else(|| RestoreError::UnknownEasing(record.easing.clone()))?;
        Ok(Self {
            begin: record.begin,
            end: record.end,
            change: record.change,
            duration: record.duration,
            time: record.time,
            overflow: record.overflow,
            easing,
            reverse: record.reverse,
        })
    }
}

impl Sequence {
    /// Snapshot the chain and its orchestration state.
    pub fn to_record(&self) -> SequenceRecord {
        SequenceRecord {
            tweens: self.tweens.iter().map(Tween::to_record).collect(),
            index: self.index,
            yoyo: self.yoyo,
            reverse: self.reverse,
            loop_count: self.loop_count,
            loop_remaining: self.loop_remaining,
        }
    }

    /// Rebuild a sequence from a record. Fails on the first tween whose
    /// record does not restore.
    pub fn from_record(
        record: &SequenceRecord,
        registry: &EasingRegistry,
    ) -> Result<Self, RestoreError> {
        let tweens = record
            .tweens
            .iter()
            .map(|t| Tween::from_record(t, registry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            tweens,
            index: record.index,
            yoyo: record.yoyo,
            reverse: record.reverse,
            loop_count: record.loop_count,
            loop_remaining: record.loop_remaining,
        })
    }
}
