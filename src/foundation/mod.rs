//! Identifiers, geometry re-exports and the crate error type.

pub(crate) mod core;
pub(crate) mod error;
