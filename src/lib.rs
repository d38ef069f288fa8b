//! Shared-element ("hero") transitions for retained visual trees.
//!
//! Given an outgoing and an incoming subtree, `wavyte-hero` pairs descendants tagged with the
//! same hero key, overlays clones of each pair in a container and hands a flat, declarative
//! timeline to an animation engine. When the engine reports completion (or cancellation) every
//! staged change is undone and the caller is notified.
//!
//! # Pipeline overview
//!
//! 1. **Capture**: measure both roots and collect their tagged descendants ([`capture`])
//! 2. **Size**: decide the container rectangles per [`ContainerSize`] ([`size_container`])
//! 3. **Match**: pair tagged descendants by key ([`match_snapshots`])
//! 4. **Stage**: clone pairs into the container and hide the originals ([`stage_clones`])
//! 5. **Plan**: build the [`Timeline`] and play it ([`TransitionPlanner`], [`AnimationEngine`])
//! 6. **Reset**: restore styles and structure once the timeline ends ([`ResetCoordinator`])
//!
//! [`animate`] runs all of it. The UI is reached only through [`VisualTree`]; [`Scene`] is an
//! in-memory implementation with flex-column layout, and [`TimelinePlayer`] a reference engine.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: staging is synchronous; the only wait is on the engine handle.
//! - **Reversible**: every style the pipeline touches goes through a [`StyleLedger`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod foundation;
mod hero;
mod scene;

pub use animation::ease::Ease;
pub use animation::engine::{
    AnimationEngine, PlaybackHandle, TimelineHandle, TimelinePlayer, TimelineStatus,
};
pub use animation::timeline::{AnimatedProperty, PropertyTween, Timeline, TimelineEntry};
pub use foundation::core::{Affine, HeroKey, NodeId, Point, Rect, Size, TweenRange, Vec2};
pub use foundation::error::{HeroError, HeroResult};
pub use hero::controller::{ControllerRegistry, HeroController};
pub use hero::ledger::StyleLedger;
pub use hero::matcher::{MatchedPair, match_keys, match_snapshots};
pub use hero::options::{AnimationOptions, ContainerSize};
pub use hero::planner::TransitionPlanner;
pub use hero::reset::{ContentSwap, ResetCoordinator};
pub use hero::sizing::{ContainerFrame, size_container, stage_roots};
pub use hero::snapshot::{
    HERO_KEY_ATTR, HERO_TRANSITION_ATTR, PropertyRanges, TaggedElementInfo, TransitionSpec,
    VisualSnapshot, capture,
};
pub use hero::stage::{StagedClones, stage_clones};
pub use hero::transition::{
    ContentBuilder, HeroTransition, IncomingContent, OnFinished, TransitionState, animate,
};
pub use hero::tween::{BoundsTween, tween_bounds};
pub use scene::memory::Scene;
pub use scene::style::{PositionMode, Style, StylePatch, StyleValue, Visibility};
pub use scene::tree::VisualTree;
