use std::collections::BTreeMap;

use crate::{
    foundation::core::{NodeId, Rect, Size},
    foundation::error::{HeroError, HeroResult},
    scene::style::Style,
    scene::tree::VisualTree,
};

#[derive(Clone, Debug)]
pub(crate) struct SceneNode {
    pub(crate) label: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) intrinsic: Size, // leaf content size
    pub(crate) style: Style,
}

/// In-memory [`VisualTree`] with a flex-column layout.
///
/// Every node stacks its in-flow children vertically at their content width. Leaves take
/// their intrinsic size. [`crate::PositionMode::Fixed`] nodes leave the flow and are laid
/// out shrink-to-fit at the viewport origin. Nodes not reachable from [`Scene::root`]
/// measure as an empty rectangle at the origin.
#[derive(Clone, Debug)]
pub struct Scene {
    pub(crate) nodes: Vec<Option<SceneNode>>,
    pub(crate) root: NodeId,
    pub(crate) viewport: Size,
    bounds: Option<Vec<Rect>>, // None while layout is dirty
}

impl Scene {
    /// Empty scene whose root fills `viewport`.
    pub fn new(viewport: Size) -> Self {
        let root = SceneNode {
            label: "root".to_string(),
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            intrinsic: Size::ZERO,
            style: Style::default(),
        };
        Self {
            nodes: vec![Some(root)],
            root: NodeId(0),
            viewport,
            bounds: None,
        }
    }

    /// The viewport-filling root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Create a detached node. `intrinsic` is used when the node has no in-flow children.
    pub fn create_node(&mut self, label: impl Into<String>, intrinsic: Size) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(SceneNode {
            label: label.into(),
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            intrinsic,
            style: Style::default(),
        }));
        id
    }

    /// Create a node and append it to `parent`.
    pub fn create_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        intrinsic: Size,
    ) -> HeroResult<NodeId> {
        let id = self.create_node(label, intrinsic);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Set an attribute on `node`.
    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> HeroResult<()> {
        self.node_mut(node)?
            .attributes
            .insert(name.into(), value.into());
        Ok(())
    }

    /// Label given at creation; clones keep the label of their source.
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.node(node).ok().map(|n| n.label.as_str())
    }

    /// Parent of `node`, if attached to one.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).ok().and_then(|n| n.parent)
    }

    /// `true` while `node` has not been removed.
    pub fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_ok()
    }

    /// `true` when `node` is reachable from the root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == self.root {
                return true;
            }
            cur = self.parent(n);
        }
        false
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Always `false`; the root cannot be removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub(crate) fn node(&self, node: NodeId) -> HeroResult<&SceneNode> {
        self.nodes
            .get(node.index())
            .and_then(|n| n.as_ref())
            .ok_or_else(|| HeroError::scene(format!("unknown node {node}")))
    }

    fn node_mut(&mut self, node: NodeId) -> HeroResult<&mut SceneNode> {
        self.nodes
            .get_mut(node.index())
            .and_then(|n| n.as_mut())
            .ok_or_else(|| HeroError::scene(format!("unknown node {node}")))
    }

    fn invalidate(&mut self) {
        self.bounds = None;
    }

    fn detach(&mut self, node: NodeId) -> HeroResult<()> {
        let Some(parent) = self.node(node)?.parent else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|&c| c != node);
        self.node_mut(node)?.parent = None;
        self.invalidate();
        Ok(())
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.parent(n);
        }
        false
    }

    fn clone_subtree(&mut self, node: NodeId, parent: Option<NodeId>) -> HeroResult<NodeId> {
        let src = self.node(node)?.clone();
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(SceneNode {
            parent,
            children: Vec::with_capacity(src.children.len()),
            ..src.clone()
        }));
        for child in src.children {
            let c = self.clone_subtree(child, Some(id))?;
            self.node_mut(id)?.children.push(c);
        }
        Ok(id)
    }
}

impl VisualTree for Scene {
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .ok()
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    fn descendants_with_attribute(
        &self,
        root: NodeId,
        attribute: &str,
    ) -> HeroResult<Vec<NodeId>> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(root)?.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = self.node(id)?;
            if node.attributes.contains_key(attribute) {
                out.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(out)
    }

    fn bounding_rect(&mut self, node: NodeId) -> HeroResult<Rect> {
        self.node(node)?;
        if self.bounds.is_none() {
            self.bounds = Some(self.compute_layout()?);
        }
        Ok(self
            .bounds
            .as_ref()
            .and_then(|b| b.get(node.index()))
            .copied()
            .unwrap_or(Rect::ZERO))
    }

    fn style(&self, node: NodeId) -> HeroResult<Style> {
        Ok(self.node(node)?.style)
    }

    fn set_style(&mut self, node: NodeId, style: Style) -> HeroResult<()> {
        self.node_mut(node)?.style = style;
        self.invalidate();
        Ok(())
    }

    fn parent_of(&self, node: NodeId) -> HeroResult<Option<NodeId>> {
        Ok(self.node(node)?.parent)
    }

    fn children(&self, node: NodeId) -> HeroResult<Vec<NodeId>> {
        Ok(self.node(node)?.children.clone())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> HeroResult<()> {
        self.node(parent)?;
        self.node(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(HeroError::scene(format!(
                "cannot append {child} inside its own subtree at {parent}"
            )));
        }
        self.detach(child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        self.invalidate();
        Ok(())
    }

    fn replace_children(&mut self, parent: NodeId, children: &[NodeId]) -> HeroResult<()> {
        for old in self.children(parent)? {
            self.detach(old)?;
        }
        for &child in children {
            self.append_child(parent, child)?;
        }
        self.invalidate();
        Ok(())
    }

    fn deep_clone(&mut self, node: NodeId) -> HeroResult<NodeId> {
        self.clone_subtree(node, None)
    }

    fn remove(&mut self, node: NodeId) -> HeroResult<()> {
        if node == self.root {
            return Err(HeroError::scene("cannot remove the scene root"));
        }
        self.detach(node)?;
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(n) = self.nodes.get_mut(id.index()).and_then(Option::take) {
                stack.extend(n.children);
            }
        }
        self.invalidate();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/memory.rs"]
mod tests;
