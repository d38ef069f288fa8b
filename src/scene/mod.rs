//! The visual-tree seam and an in-memory scene implementing it.

pub(crate) mod layout;
pub(crate) mod memory;
pub(crate) mod style;
pub(crate) mod tree;
