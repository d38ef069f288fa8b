use std::fmt;

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Handle of one node in a [`crate::VisualTree`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable identifier tying an outgoing element to its incoming counterpart.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct HeroKey(pub String);

impl HeroKey {
    /// Build a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeroKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HeroKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HeroKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A `[from, to]` pair for one animated scalar.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenRange {
    /// Value at the start of the transition.
    pub from: f64,
    /// Value at the end of the transition.
    pub to: f64,
}

impl TweenRange {
    /// Build a range from its endpoints.
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// A range that holds `value` for the whole transition.
    pub const fn constant(value: f64) -> Self {
        Self {
            from: value,
            to: value,
        }
    }

    /// `true` when both endpoints are equal.
    pub fn is_constant(self) -> bool {
        self.from == self.to
    }

    /// Linear interpolation at normalized progress `t`.
    pub fn lerp(self, t: f64) -> f64 {
        self.from + (self.to - self.from) * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
