use std::collections::BTreeSet;

use crate::{
    animation::engine::{AnimationEngine, TimelineHandle, TimelineStatus},
    animation::timeline::Timeline,
    foundation::core::{HeroKey, NodeId},
    foundation::error::HeroResult,
    hero::matcher::match_snapshots,
    hero::options::AnimationOptions,
    hero::planner::TransitionPlanner,
    hero::reset::{ContentSwap, ResetCoordinator},
    hero::sizing::{size_container, stage_roots},
    hero::snapshot::capture,
    hero::stage::stage_clones,
    scene::style::{PositionMode, StylePatch},
    scene::tree::VisualTree,
};

/// Renders incoming content into a target node on demand.
pub type ContentBuilder<'a, T> = Box<dyn FnOnce(&mut T, NodeId) -> HeroResult<()> + 'a>;

/// Callback receiving the settled node once a transition ends.
pub type OnFinished = Box<dyn FnOnce(NodeId)>;

/// Where the incoming state comes from.
pub enum IncomingContent<'a, T> {
    /// Already rendered root. The outgoing root is parked in the container during the
    /// transition and the callback receives this node.
    Rendered(NodeId),
    /// Content rendered into `target` before measuring. The outgoing root persists and
    /// adopts `target`'s children on reset; the callback receives the outgoing root.
    Build {
        /// Staging node the content is rendered into.
        target: NodeId,
        /// Renderer.
        build: ContentBuilder<'a, T>,
    },
}

impl<'a, T> IncomingContent<'a, T> {
    /// Already rendered incoming root.
    pub fn rendered(node: NodeId) -> Self {
        Self::Rendered(node)
    }

    /// Render into `target` with `build`.
    pub fn build(target: NodeId, build: impl FnOnce(&mut T, NodeId) -> HeroResult<()> + 'a) -> Self {
        Self::Build {
            target,
            build: Box::new(build),
        }
    }
}

/// Observable state of a [`HeroTransition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionState {
    /// Timeline still playing; staging is in place.
    Running,
    /// Timeline completed and everything was reset.
    Finished,
    /// Timeline was cancelled (or the transition forcibly settled) and everything was reset.
    Cancelled,
}

/// A hero transition in flight.
///
/// Drive it with [`HeroTransition::poll`] after advancing the engine. Reset runs exactly
/// once, when the engine reports completion or cancellation, or on [`HeroTransition::settle`].
///
/// Dropping a running transition does not reset anything: clones stay in the container and the
/// originals stay hidden. Call [`HeroTransition::settle`] before letting go of it.
#[must_use = "a running transition must be polled or settled, otherwise staging is never undone"]
pub struct HeroTransition<H> {
    handle: Option<H>,
    timeline: Timeline,
    matched: Vec<HeroKey>,
    reset: ResetCoordinator,
    on_finished: Option<OnFinished>,
    state: TransitionState,
}

impl<H: TimelineHandle> HeroTransition<H> {
    /// The planned timeline as handed to the engine.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Keys of the matched hero pairs, in planning order.
    pub fn matched_keys(&self) -> &[HeroKey] {
        &self.matched
    }

    /// Engine handle, absent for non-animated transitions.
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Reset bookkeeping, including the staged clones.
    pub fn coordinator(&self) -> &ResetCoordinator {
        &self.reset
    }

    /// Current state without polling the engine.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Check the engine and reset once it is done.
    pub fn poll<T: VisualTree>(&mut self, tree: &mut T) -> HeroResult<TransitionState> {
        if self.state != TransitionState::Running {
            return Ok(self.state);
        }
        let status = self
            .handle
            .as_ref()
            .map_or(TimelineStatus::Finished, TimelineHandle::status);
        match status {
            TimelineStatus::Running => Ok(TransitionState::Running),
            TimelineStatus::Finished => self.finish(tree, TransitionState::Finished),
            TimelineStatus::Cancelled => self.finish(tree, TransitionState::Cancelled),
        }
    }

    /// Cancel the timeline if it is still running and reset now. A no-op once settled.
    pub fn settle<T: VisualTree>(&mut self, tree: &mut T) -> HeroResult<TransitionState> {
        if self.state != TransitionState::Running {
            return Ok(self.state);
        }
        let state = match self.handle.as_ref() {
            Some(handle) if handle.status() == TimelineStatus::Finished => TransitionState::Finished,
            Some(handle) => {
                handle.cancel();
                TransitionState::Cancelled
            }
            None => TransitionState::Finished,
        };
        self.finish(tree, state)
    }

    fn finish<T: VisualTree>(
        &mut self,
        tree: &mut T,
        state: TransitionState,
    ) -> HeroResult<TransitionState> {
        if let Some(settled) = self.reset.reset(tree)? {
            if let Some(cb) = self.on_finished.take() {
                cb(settled);
            }
        }
        self.state = state;
        Ok(state)
    }
}

/// Plan and start one hero transition from `outgoing` to `incoming` inside `container`.
///
/// Both roots are measured first; a duplicate hero key fails here with nothing left staged.
/// The container is then sized per [`AnimationOptions::container_size`], matching tagged
/// descendants are cloned into the container, and the flat timeline is handed to `engine`.
/// `on_finished` fires once the returned transition settles.
#[allow(clippy::too_many_arguments)]
#[tracing::instrument(skip_all, fields(%container, %outgoing))]
pub fn animate<T, E>(
    tree: &mut T,
    engine: &mut E,
    container: NodeId,
    outgoing: NodeId,
    incoming: IncomingContent<'_, T>,
    blacklist: &[HeroKey],
    options: &AnimationOptions,
    on_finished: impl FnOnce(NodeId) + 'static,
) -> HeroResult<HeroTransition<E::Handle>>
where
    T: VisualTree,
    E: AnimationEngine,
{
    options.validate()?;

    let (incoming_root, swap) = match incoming {
        IncomingContent::Rendered(node) => (node, None),
        IncomingContent::Build { target, build } => {
            build(tree, target)?;
            (
                target,
                Some(ContentSwap {
                    persistent: outgoing,
                    source: target,
                }),
            )
        }
    };
    let settled = if swap.is_some() { outgoing } else { incoming_root };

    if !options.animate {
        if let Some(swap) = swap {
            let content = tree.children(swap.source)?;
            tree.replace_children(swap.persistent, &content)?;
        }
        on_finished(settled);
        return Ok(HeroTransition {
            handle: None,
            timeline: Timeline::new(options.duration_secs, options.ease),
            matched: Vec::new(),
            reset: ResetCoordinator::already_settled(container, settled),
            on_finished: None,
            state: TransitionState::Finished,
        });
    }

    let mut reset = ResetCoordinator::new(container, settled, swap);
    let staged = stage_transition(
        tree,
        &mut reset,
        container,
        outgoing,
        incoming_root,
        swap.is_none(),
        blacklist,
        options,
    );
    let (timeline, matched) = match staged {
        Ok(v) => v,
        Err(err) => {
            reset.abort(tree)?;
            return Err(err);
        }
    };

    let handle = match engine.play(timeline.clone()) {
        Ok(h) => h,
        Err(err) => {
            reset.abort(tree)?;
            return Err(err);
        }
    };
    tracing::debug!(
        entries = timeline.entries.len(),
        pairs = matched.len(),
        "hero timeline started"
    );

    Ok(HeroTransition {
        handle: Some(handle),
        timeline,
        matched,
        reset,
        on_finished: Some(Box::new(on_finished)),
        state: TransitionState::Running,
    })
}

#[allow(clippy::too_many_arguments)]
fn stage_transition<T: VisualTree>(
    tree: &mut T,
    reset: &mut ResetCoordinator,
    container: NodeId,
    outgoing: NodeId,
    incoming: NodeId,
    park_outgoing: bool,
    blacklist: &[HeroKey],
    options: &AnimationOptions,
) -> HeroResult<(Timeline, Vec<HeroKey>)> {
    let blacklist: BTreeSet<HeroKey> = blacklist.iter().cloned().collect();
    let ledger = &mut reset.ledger;
    let pinned = StylePatch::new().position(PositionMode::Fixed);
    ledger.stage(tree, outgoing, &pinned)?;
    ledger.stage(tree, incoming, &pinned)?;

    let out_snap = capture(tree, ledger, outgoing, &blacklist)?;
    let in_snap = capture(tree, ledger, incoming, &blacklist)?;

    if park_outgoing {
        reset.park(tree, outgoing)?;
    }
    let ledger = &mut reset.ledger;
    ledger.stage(
        tree,
        outgoing,
        &StylePatch::new().min_size(out_snap.bounds.size()),
    )?;
    ledger.stage(
        tree,
        incoming,
        &StylePatch::new().min_size(in_snap.bounds.size()),
    )?;

    let policy = options.container_size;
    let frame = size_container(
        tree,
        ledger,
        container,
        policy,
        out_snap.bounds,
        in_snap.bounds,
    )?;
    let root_entries = stage_roots(tree, ledger, policy, &out_snap, &in_snap, &frame)?;

    let pairs = match_snapshots(&out_snap, &in_snap);
    let (clones, clone_entries) = stage_clones(tree, ledger, container, &pairs)?;
    reset.clones = clones;

    let mut planner = TransitionPlanner::new();
    planner
        .container(frame.entry)
        .roots(root_entries)
        .clones(clone_entries);
    let matched = pairs.into_iter().map(|p| p.incoming.key).collect();
    Ok((planner.build(options), matched))
}

#[cfg(test)]
#[path = "../../tests/unit/hero/transition.rs"]
mod tests;
