use crate::{
    foundation::core::{NodeId, Rect},
    foundation::error::HeroResult,
    scene::style::{Style, StylePatch},
};

/// Retained visual tree the hero pipeline measures and mutates.
///
/// This is the seam to the host UI framework: the pipeline never looks at node internals
/// beyond attributes, measured geometry and the inline [`Style`] record. All geometry is
/// reported in viewport coordinates.
pub trait VisualTree {
    /// Attribute value of `node`, if set.
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Descendants of `root` (excluding `root`) carrying `attribute`, in document order.
    fn descendants_with_attribute(&self, root: NodeId, attribute: &str)
    -> HeroResult<Vec<NodeId>>;

    /// Bounding rectangle of `node` in viewport space, after transforms.
    ///
    /// Takes `&mut self` so implementations can lay out lazily.
    fn bounding_rect(&mut self, node: NodeId) -> HeroResult<Rect>;

    /// Current inline style of `node`.
    fn style(&self, node: NodeId) -> HeroResult<Style>;

    /// Replace the inline style of `node`.
    fn set_style(&mut self, node: NodeId, style: Style) -> HeroResult<()>;

    /// Parent of `node`, `None` when detached.
    fn parent_of(&self, node: NodeId) -> HeroResult<Option<NodeId>>;

    /// Direct children of `node`, in order.
    fn children(&self, node: NodeId) -> HeroResult<Vec<NodeId>>;

    /// Move `child` to the end of `parent`'s children, detaching it from any previous parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> HeroResult<()>;

    /// Detach all current children of `parent` and adopt `children` in their place.
    fn replace_children(&mut self, parent: NodeId, children: &[NodeId]) -> HeroResult<()>;

    /// Deep copy of `node` and its subtree, attributes and inline styles included. The copy
    /// starts detached.
    fn deep_clone(&mut self, node: NodeId) -> HeroResult<NodeId>;

    /// Destroy `node` and its subtree.
    fn remove(&mut self, node: NodeId) -> HeroResult<()>;

    /// Apply `patch` on top of the current style of `node`.
    fn patch_style(&mut self, node: NodeId, patch: &StylePatch) -> HeroResult<()> {
        let mut style = self.style(node)?;
        patch.apply_to(&mut style);
        self.set_style(node, style)
    }
}
