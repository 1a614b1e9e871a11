//! Glide Easing Catalog
//!
//! Easing curves for the glide tween library.
//!
//! # Features
//!
//! - **Curve catalog**: 41 classic easing functions (quad through bounce,
//!   each in in/out/in-out/out-in form) sharing the `f(t, b, c, d)` contract
//! - **Descriptors**: the [`Easing`] enum names a curve for cheap copying,
//!   comparison, and persistence
//! - **Custom curves**: caller-supplied functions registered by key through
//!   an [`EasingRegistry`], no reflection anywhere

pub mod curves;
pub mod easing;
pub mod registry;

pub use curves::EaseFn;
pub use easing::Easing;
pub use registry::EasingRegistry;
