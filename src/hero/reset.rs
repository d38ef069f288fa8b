use crate::{
    foundation::core::NodeId,
    foundation::error::HeroResult,
    hero::ledger::StyleLedger,
    hero::stage::StagedClones,
    scene::tree::VisualTree,
};

/// Moves the incoming content into the persistent root once the transition ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentSwap {
    /// Node that stays mounted across transitions.
    pub persistent: NodeId,
    /// Node the incoming content was rendered into.
    pub source: NodeId,
}

/// A node moved into the container for the duration of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Parked {
    node: NodeId,
    // Previous parent and sibling index, if it was attached.
    origin: Option<(NodeId, usize)>,
}

/// Single owner of everything a transition staged.
///
/// [`ResetCoordinator::reset`] removes the clones, empties the container, restores every
/// staged style from the ledger, performs the optional content swap and reports the settled
/// node. [`ResetCoordinator::abort`] instead puts the tree back the way the transition found
/// it. Either runs at most once.
#[derive(Debug)]
pub struct ResetCoordinator {
    container: NodeId,
    settled: NodeId,
    pub(crate) ledger: StyleLedger,
    pub(crate) clones: Vec<StagedClones>,
    parked: Vec<Parked>,
    swap: Option<ContentSwap>,
    done: bool,
}

impl ResetCoordinator {
    /// Coordinator for a transition that settles on `settled`.
    pub fn new(container: NodeId, settled: NodeId, swap: Option<ContentSwap>) -> Self {
        Self {
            container,
            settled,
            ledger: StyleLedger::new(),
            clones: Vec::new(),
            parked: Vec::new(),
            swap,
            done: false,
        }
    }

    /// Coordinator with nothing left to do.
    pub(crate) fn already_settled(container: NodeId, settled: NodeId) -> Self {
        Self {
            done: true,
            ..Self::new(container, settled, None)
        }
    }

    /// `true` once [`ResetCoordinator::reset`] or [`ResetCoordinator::abort`] has run.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Node handed to the completion callback.
    pub fn settled(&self) -> NodeId {
        self.settled
    }

    /// Clones currently staged.
    pub fn clones(&self) -> &[StagedClones] {
        &self.clones
    }

    /// Move `node` to the end of the container, remembering where it came from.
    pub(crate) fn park<T: VisualTree>(&mut self, tree: &mut T, node: NodeId) -> HeroResult<()> {
        let origin = match tree.parent_of(node)? {
            Some(parent) => tree
                .children(parent)?
                .iter()
                .position(|&c| c == node)
                .map(|idx| (parent, idx)),
            None => None,
        };
        tree.append_child(self.container, node)?;
        self.parked.push(Parked { node, origin });
        Ok(())
    }

    /// Finish the transition. Returns the settled node the first time, `None` afterwards.
    pub fn reset<T: VisualTree>(&mut self, tree: &mut T) -> HeroResult<Option<NodeId>> {
        if self.done {
            return Ok(None);
        }

        self.remove_clones(tree)?;
        tree.replace_children(self.container, &[])?;
        self.parked.clear();

        let restored = self.ledger.restore(tree)?;

        if let Some(swap) = self.swap.take() {
            let content = tree.children(swap.source)?;
            tree.replace_children(swap.persistent, &content)?;
        }

        self.done = true;
        tracing::debug!(restored, settled = %self.settled, "hero transition reset");
        Ok(Some(self.settled))
    }

    /// Undo a transition that failed before it started playing.
    ///
    /// Clones are removed, parked nodes go back to their previous parent and position, and
    /// styles are restored. The container keeps its other children and no content is swapped.
    pub fn abort<T: VisualTree>(&mut self, tree: &mut T) -> HeroResult<()> {
        if self.done {
            return Ok(());
        }

        self.remove_clones(tree)?;
        while let Some(parked) = self.parked.pop() {
            match parked.origin {
                Some((parent, idx)) => {
                    let mut siblings: Vec<NodeId> = tree
                        .children(parent)?
                        .into_iter()
                        .filter(|&c| c != parked.node)
                        .collect();
                    siblings.insert(idx.min(siblings.len()), parked.node);
                    tree.replace_children(parent, &siblings)?;
                }
                None => {
                    let remaining: Vec<NodeId> = tree
                        .children(self.container)?
                        .into_iter()
                        .filter(|&c| c != parked.node)
                        .collect();
                    tree.replace_children(self.container, &remaining)?;
                }
            }
        }

        let restored = self.ledger.restore(tree)?;
        self.swap = None;
        self.done = true;
        tracing::debug!(restored, "hero transition aborted");
        Ok(())
    }

    fn remove_clones<T: VisualTree>(&mut self, tree: &mut T) -> HeroResult<()> {
        for staged in self.clones.drain(..) {
            for clone in [staged.outgoing, staged.incoming] {
                if tree.style(clone).is_ok() {
                    tree.remove(clone)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/reset.rs"]
mod tests;
