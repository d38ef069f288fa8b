use std::collections::BTreeMap;

use crate::{
    animation::engine::AnimationEngine,
    foundation::core::{HeroKey, NodeId},
    foundation::error::{HeroError, HeroResult},
    hero::options::AnimationOptions,
    hero::transition::{HeroTransition, IncomingContent, TransitionState, animate},
    scene::tree::VisualTree,
};

/// Owns one hero region: the container, the persistent root and the staging node new content
/// is rendered into.
///
/// The staging node must be attached somewhere it can be measured. Each
/// [`HeroController::update`] settles the transition still in flight before starting the next.
pub struct HeroController<E: AnimationEngine> {
    container: NodeId,
    root: NodeId,
    staging: NodeId,
    blacklist: Vec<HeroKey>,
    defaults: AnimationOptions,
    engine: E,
    active: Option<HeroTransition<E::Handle>>,
}

impl<E: AnimationEngine> HeroController<E> {
    /// Controller with default options and an empty blacklist.
    pub fn new(container: NodeId, root: NodeId, staging: NodeId, engine: E) -> Self {
        Self {
            container,
            root,
            staging,
            blacklist: Vec::new(),
            defaults: AnimationOptions::default(),
            engine,
            active: None,
        }
    }

    /// Replace the default options used when `update` gets none.
    pub fn with_defaults(mut self, defaults: AnimationOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Keys never paired by this controller.
    pub fn with_blacklist(mut self, keys: impl IntoIterator<Item = HeroKey>) -> Self {
        self.blacklist = keys.into_iter().collect();
        self
    }

    /// Persistent root; holds the content after every settled update.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Default options.
    pub fn defaults(&self) -> &AnimationOptions {
        &self.defaults
    }

    /// The animation engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The animation engine, mutably (to drive a reference player).
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Transition in flight, if any.
    pub fn active(&self) -> Option<&HeroTransition<E::Handle>> {
        self.active.as_ref()
    }

    /// Render new content with `build` and transition the root to it.
    ///
    /// `on_finished` receives the persistent root once the transition settles, either from
    /// [`HeroController::poll`], [`HeroController::settle`] or the next `update`.
    #[tracing::instrument(skip_all, fields(root = %self.root))]
    pub fn update<T: VisualTree>(
        &mut self,
        tree: &mut T,
        build: impl FnOnce(&mut T, NodeId) -> HeroResult<()>,
        options: Option<AnimationOptions>,
        on_finished: impl FnOnce(NodeId) + 'static,
    ) -> HeroResult<TransitionState> {
        if let Some(mut previous) = self.active.take() {
            tracing::debug!("settling previous transition before update");
            previous.settle(tree)?;
        }

        let options = options.unwrap_or(self.defaults);
        let mut transition = animate(
            tree,
            &mut self.engine,
            self.container,
            self.root,
            IncomingContent::build(self.staging, build),
            &self.blacklist,
            &options,
            on_finished,
        )?;
        let state = transition.poll(tree)?;
        if state == TransitionState::Running {
            self.active = Some(transition);
        }
        Ok(state)
    }

    /// Poll the transition in flight. Returns `None` when idle.
    pub fn poll<T: VisualTree>(&mut self, tree: &mut T) -> HeroResult<Option<TransitionState>> {
        let Some(transition) = self.active.as_mut() else {
            return Ok(None);
        };
        let state = transition.poll(tree)?;
        if state != TransitionState::Running {
            self.active = None;
        }
        Ok(Some(state))
    }

    /// Settle the transition in flight immediately.
    pub fn settle<T: VisualTree>(&mut self, tree: &mut T) -> HeroResult<Option<TransitionState>> {
        match self.active.take() {
            Some(mut transition) => transition.settle(tree).map(Some),
            None => Ok(None),
        }
    }
}

/// Controllers addressable by id, for glue code that cannot pass them explicitly.
#[derive(Debug)]
pub struct ControllerRegistry<C> {
    controllers: BTreeMap<String, C>,
}

impl<C> Default for ControllerRegistry<C> {
    fn default() -> Self {
        Self {
            controllers: BTreeMap::new(),
        }
    }
}

impl<C> ControllerRegistry<C> {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `controller` under `id`, returning the one it replaces.
    pub fn register(&mut self, id: impl Into<String>, controller: C) -> Option<C> {
        self.controllers.insert(id.into(), controller)
    }

    /// Remove and return the controller registered under `id`.
    pub fn unregister(&mut self, id: &str) -> Option<C> {
        self.controllers.remove(id)
    }

    /// Controller registered under `id`.
    pub fn get(&self, id: &str) -> HeroResult<&C> {
        self.controllers
            .get(id)
            .ok_or_else(|| HeroError::controller_not_found(id))
    }

    /// Controller registered under `id`, mutably.
    pub fn get_mut(&mut self, id: &str) -> HeroResult<&mut C> {
        self.controllers
            .get_mut(id)
            .ok_or_else(|| HeroError::controller_not_found(id))
    }

    /// Number of registered controllers.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/controller.rs"]
mod tests;
