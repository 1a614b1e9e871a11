//! Name-to-curve resolution for restoring persisted animations

use rustc_hash::FxHashMap;

use crate::curves::EaseFn;
use crate::easing::Easing;

/// Resolves easing names back to callable curves.
///
/// Built-in names always resolve; caller-supplied curves must be registered
/// under the same key before a persisted animation referencing them can be
/// restored. An unresolvable name is the caller's error to surface, the
/// registry just reports `None`.
#[derive(Default)]
pub struct EasingRegistry {
    custom: FxHashMap<&'static str, EaseFn>,
}

impl EasingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom curve under `name`. Re-registering a name replaces
    /// the previous curve.
    pub fn register(&mut self, name: &'static str, func: EaseFn) {
        self.custom.insert(name, func);
    }

    /// Resolve a name to an [`Easing`], checking built-ins first.
    pub fn resolve(&self, name: &str) -> Option<Easing> {
        Easing::from_name(name).or_else(|| {
            self.custom
                .get_key_value(name)
                .map(|(key, func)| Easing::Custom(key, *func))
        })
    }
}
