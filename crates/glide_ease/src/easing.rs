//! Easing descriptors
//!
//! [`Easing`] names a curve without committing a tween to a concrete function
//! pointer. Built-in variants cover the whole catalog in [`crate::curves`];
//! caller-supplied curves ride along as [`Easing::Custom`] with a registered
//! string key so that persisted animations can be restored without any
//! runtime symbol inspection.

use crate::curves::{self, EaseFn};

/// A named easing curve.
///
/// Equality compares descriptors: built-in variants by kind, custom variants
/// by key and function pointer. The persisted form is the [`Easing::name`]
/// string, resolved back through an [`crate::EasingRegistry`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    OutInQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    OutInCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    OutInQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    OutInQuint,
    InSine,
    OutSine,
    InOutSine,
    OutInSine,
    InExpo,
    OutExpo,
    InOutExpo,
    OutInExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    OutInCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    OutInElastic,
    InBack,
    OutBack,
    InOutBack,
    OutInBack,
    InBounce,
    OutBounce,
    InOutBounce,
    OutInBounce,
    /// A caller-supplied curve identified by a registered key.
    Custom(&'static str, EaseFn),
}

impl Easing {
    /// Every built-in curve, in catalog order.
    pub const BUILTIN: [Easing; 41] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::OutInQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::OutInCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::OutInQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::OutInQuint,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
        Easing::OutInSine,
        Easing::InExpo,
        Easing::OutExpo,
        Easing::InOutExpo,
        Easing::OutInExpo,
        Easing::InCirc,
        Easing::OutCirc,
        Easing::InOutCirc,
        Easing::OutInCirc,
        Easing::InElastic,
        Easing::OutElastic,
        Easing::InOutElastic,
        Easing::OutInElastic,
        Easing::InBack,
        Easing::OutBack,
        Easing::InOutBack,
        Easing::OutInBack,
        Easing::InBounce,
        Easing::OutBounce,
        Easing::InOutBounce,
        Easing::OutInBounce,
    ];

    fn lookup(self) -> (&'static str, EaseFn) {
        match self {
            Easing::Linear => ("Linear", curves::linear),
            Easing::InQuad => ("InQuad", curves::in_quad),
            Easing::OutQuad => ("OutQuad", curves::out_quad),
            Easing::InOutQuad => ("InOutQuad", curves::in_out_quad),
            Easing::OutInQuad => ("OutInQuad", curves::out_in_quad),
            Easing::InCubic => ("InCubic", curves::in_cubic),
            Easing::OutCubic => ("OutCubic", curves::out_cubic),
            Easing::InOutCubic => ("InOutCubic", curves::in_out_cubic),
            Easing::OutInCubic => ("OutInCubic", curves::out_in_cubic),
            Easing::InQuart => ("InQuart", curves::in_quart),
            Easing::OutQuart => ("OutQuart", curves::out_quart),
            Easing::InOutQuart => ("InOutQuart", curves::in_out_quart),
            Easing::OutInQuart => ("OutInQuart", curves::out_in_quart),
            Easing::InQuint => ("InQuint", curves::in_quint),
            Easing::OutQuint => ("OutQuint", curves::out_quint),
            Easing::InOutQuint => ("InOutQuint", curves::in_out_quint),
            Easing::OutInQuint => ("OutInQuint", curves::out_in_quint),
            Easing::InSine => ("InSine", curves::in_sine),
            Easing::OutSine => ("OutSine", curves::out_sine),
            Easing::InOutSine => ("InOutSine", curves::in_out_sine),
            Easing::OutInSine => ("OutInSine", curves::out_in_sine),
            Easing::InExpo => ("InExpo", curves::in_expo),
            Easing::OutExpo => ("OutExpo", curves::out_expo),
            Easing::InOutExpo => ("InOutExpo", curves::in_out_expo),
            Easing::OutInExpo => ("OutInExpo", curves::out_in_expo),
            Easing::InCirc => ("InCirc", curves::in_circ),
            Easing::OutCirc => ("OutCirc", curves::out_circ),
            Easing::InOutCirc => ("InOutCirc", curves::in_out_circ),
            Easing::OutInCirc => ("OutInCirc", curves::out_in_circ),
            Easing::InElastic => ("InElastic", curves::in_elastic),
            Easing::OutElastic => ("OutElastic", curves::out_elastic),
            Easing::InOutElastic => ("InOutElastic", curves::in_out_elastic),
            Easing::OutInElastic => ("OutInElastic", curves::out_in_elastic),
            Easing::InBack => ("InBack", curves::in_back),
            Easing::OutBack => ("OutBack", curves::out_back),
            Easing::InOutBack => ("InOutBack", curves::in_out_back),
            Easing::OutInBack => ("OutInBack", curves::out_in_back),
            Easing::InBounce => ("InBounce", curves::in_bounce),
            Easing::OutBounce => ("OutBounce", curves::out_bounce),
            Easing::InOutBounce => ("InOutBounce", curves::in_out_bounce),
            Easing::OutInBounce => ("OutInBounce", curves::out_in_bounce),
            Easing::Custom(name, func) => (name, func),
        }
    }

    /// Evaluate the curve at elapsed time `t` within duration `d`, between
    /// `b` and `b + c`.
    pub fn apply(self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        (self.lookup().1)(t, b, c, d)
    }

    /// The stable string key for this curve, used as its persisted form.
    pub fn name(self) -> &'static str {
        self.lookup().0
    }

    /// Resolve a built-in curve by name. Custom curves live in an
    /// [`crate::EasingRegistry`] instead.
    pub fn from_name(name: &str) -> Option<Easing> {
        Self::BUILTIN.iter().copied().find(|e| e.name() == name)
    }
}
