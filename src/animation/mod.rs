//! Easing, the declarative timeline model and the engine seam.

pub(crate) mod ease;
pub(crate) mod engine;
pub(crate) mod timeline;
