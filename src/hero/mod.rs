//! The hero transition pipeline.
//!
//! `snapshot` measures, `matcher` pairs keys, `sizing` and `stage` prepare the container, roots
//! and overlay clones, `planner` emits the timeline and `reset` undoes everything afterwards.
//! `transition` ties them together behind [`animate`](crate::animate).

pub(crate) mod controller;
pub(crate) mod ledger;
pub(crate) mod matcher;
pub(crate) mod options;
pub(crate) mod planner;
pub(crate) mod reset;
pub(crate) mod sizing;
pub(crate) mod snapshot;
pub(crate) mod stage;
pub(crate) mod transition;
pub(crate) mod tween;
