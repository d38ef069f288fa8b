use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    foundation::core::{NodeId, TweenRange},
};

/// Property names understood by the animation engine.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AnimatedProperty {
    /// Node opacity.
    Opacity,
    /// Uniform scale about the node centre.
    Scale,
    /// Horizontal translation in viewport pixels.
    X,
    /// Vertical translation in viewport pixels.
    Y,
    /// Minimum layout width in pixels.
    MinWidth,
    /// Minimum layout height in pixels.
    MinHeight,
}

/// One `[from, to]` tween of a single property.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyTween {
    /// Animated property.
    pub property: AnimatedProperty,
    /// Value range over the transition.
    pub range: TweenRange,
}

/// Declarative description of how one node animates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineEntry {
    /// Node receiving the values.
    pub target: NodeId,
    /// Tweens keyed by property; a property appears at most once.
    pub tweens: SmallVec<[PropertyTween; 6]>,
    /// Start offset in seconds. Hero timelines are flat, so this is always `0`.
    pub at: f64,
}

impl TimelineEntry {
    /// Entry for `target` starting at offset zero with no tweens.
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            tweens: SmallVec::new(),
            at: 0.0,
        }
    }

    /// Add or replace the tween of `property`.
    pub fn tween(mut self, property: AnimatedProperty, range: TweenRange) -> Self {
        self.set(property, range);
        self
    }

    /// Add or replace the tween of `property` in place.
    pub fn set(&mut self, property: AnimatedProperty, range: TweenRange) {
        match self.tweens.iter_mut().find(|t| t.property == property) {
            Some(existing) => existing.range = range,
            None => self.tweens.push(PropertyTween { property, range }),
        }
    }

    /// Range tweened for `property`, if any.
    pub fn get(&self, property: AnimatedProperty) -> Option<TweenRange> {
        self.tweens
            .iter()
            .find(|t| t.property == property)
            .map(|t| t.range)
    }
}

/// Flat list of entries plus the timing shared by all of them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Entries in planning order.
    pub entries: Vec<TimelineEntry>,
    /// Duration of every entry.
    pub duration_secs: f64,
    /// Default easing of every entry.
    pub ease: Ease,
}

impl Timeline {
    /// Empty timeline with the given timing.
    pub fn new(duration_secs: f64, ease: Ease) -> Self {
        Self {
            entries: Vec::new(),
            duration_secs,
            ease,
        }
    }

    /// `true` when there is nothing to animate.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry targeting `node`.
    pub fn entry_for(&self, node: NodeId) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.target == node)
    }

    /// Serialize to pretty JSON, mainly for snapshots and debugging.
    pub fn to_json(&self) -> crate::HeroResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::HeroError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
