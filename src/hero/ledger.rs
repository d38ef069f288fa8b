use crate::{
    foundation::core::NodeId,
    foundation::error::HeroResult,
    scene::style::{Style, StylePatch},
    scene::tree::VisualTree,
};

/// Pre-transition styles of every node the pipeline touches.
///
/// A node's original [`Style`] is recorded the first time it is staged or registered as a
/// timeline target. [`StyleLedger::restore`] writes back only the properties that differ.
#[derive(Clone, Debug, Default)]
pub struct StyleLedger {
    originals: Vec<(NodeId, Style)>, // staging order
}

impl StyleLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current style of `node` unless already recorded.
    pub fn track<T: VisualTree>(&mut self, tree: &T, node: NodeId) -> HeroResult<()> {
        if self.original(node).is_none() {
            let style = tree.style(node)?;
            self.originals.push((node, style));
        }
        Ok(())
    }

    /// Record `node` and apply `patch` to it.
    pub fn stage<T: VisualTree>(
        &mut self,
        tree: &mut T,
        node: NodeId,
        patch: &StylePatch,
    ) -> HeroResult<()> {
        self.track(tree, node)?;
        tree.patch_style(node, patch)
    }

    /// Style `node` had before the transition touched it.
    pub fn original(&self, node: NodeId) -> Option<Style> {
        self.originals
            .iter()
            .find(|(n, _)| *n == node)
            .map(|(_, s)| *s)
    }

    /// Nodes currently recorded, in staging order.
    pub fn tracked(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.originals.iter().map(|(n, _)| *n)
    }

    /// `true` once everything has been restored.
    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Restore a single node and forget it.
    pub fn restore_node<T: VisualTree>(&mut self, tree: &mut T, node: NodeId) -> HeroResult<()> {
        if let Some(idx) = self.originals.iter().position(|(n, _)| *n == node) {
            let (node, original) = self.originals.remove(idx);
            restore_one(tree, node, &original)?;
        }
        Ok(())
    }

    /// Restore every recorded node in reverse staging order and clear the ledger.
    ///
    /// Returns the number of property assignments written. Nodes that no longer exist are
    /// skipped.
    pub fn restore<T: VisualTree>(&mut self, tree: &mut T) -> HeroResult<usize> {
        let mut written = 0;
        while let Some((node, original)) = self.originals.pop() {
            written += restore_one(tree, node, &original)?;
        }
        Ok(written)
    }
}

fn restore_one<T: VisualTree>(tree: &mut T, node: NodeId, original: &Style) -> HeroResult<usize> {
    let Ok(current) = tree.style(node) else {
        tracing::warn!(%node, "staged node vanished before reset; skipping");
        return Ok(0);
    };
    let patch = current.diff_to(original);
    if !patch.is_empty() {
        tree.patch_style(node, &patch)?;
    }
    Ok(patch.len())
}

#[cfg(test)]
#[path = "../../tests/unit/hero/ledger.rs"]
mod tests;
