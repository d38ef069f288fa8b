use crate::{
    animation::timeline::{Timeline, TimelineEntry},
    hero::options::AnimationOptions,
};

/// Collects timeline entries and emits them in a stable order.
///
/// Order: container size, outgoing root, incoming root, then outgoing/incoming clone pairs.
/// Every entry starts at offset `0`, so the order only matters for determinism.
#[derive(Clone, Debug, Default)]
pub struct TransitionPlanner {
    container: Option<TimelineEntry>,
    roots: Vec<TimelineEntry>,
    clones: Vec<TimelineEntry>,
}

impl TransitionPlanner {
    /// Empty planner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container size entry.
    pub fn container(&mut self, entry: Option<TimelineEntry>) -> &mut Self {
        self.container = entry;
        self
    }

    /// Append root entries (outgoing first).
    pub fn roots(&mut self, entries: impl IntoIterator<Item = TimelineEntry>) -> &mut Self {
        self.roots.extend(entries);
        self
    }

    /// Append clone entries (outgoing/incoming per pair).
    pub fn clones(&mut self, entries: impl IntoIterator<Item = TimelineEntry>) -> &mut Self {
        self.clones.extend(entries);
        self
    }

    /// Assemble the flat timeline with the options' duration and easing.
    pub fn build(self, options: &AnimationOptions) -> Timeline {
        let mut timeline = Timeline::new(options.duration_secs, options.ease);
        timeline.entries.extend(self.container);
        timeline.entries.extend(self.roots);
        timeline.entries.extend(self.clones);
        for entry in &mut timeline.entries {
            entry.at = 0.0;
        }
        timeline
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/planner.rs"]
mod tests;
