use taffy::prelude::{AvailableSpace, Size as TaffySize};
use taffy::style::{AlignItems, Dimension, Display, FlexDirection, Style as TaffyStyle};

use crate::{
    foundation::core::{Affine, NodeId, Rect, Vec2},
    foundation::error::HeroResult,
    scene::memory::Scene,
    scene::style::{PositionMode, Style},
};

#[derive(Debug, Clone, Copy)]
struct LayoutNodeCtx {
    intrinsic: TaffySize<f32>,
}

/// Taffy tree rebuilt from the scene for one measurement pass.
struct LayoutPass {
    taffy: taffy::TaffyTree<LayoutNodeCtx>,
    node_to_taffy: Vec<Option<taffy::NodeId>>,
    // Scene root first, then every fixed node in discovery order.
    layout_roots: Vec<NodeId>,
}

impl Scene {
    /// Lay out every attached node and return viewport-space bounds indexed by node id.
    pub(crate) fn compute_layout(&self) -> HeroResult<Vec<Rect>> {
        let mut pass = LayoutPass {
            taffy: taffy::TaffyTree::new(),
            node_to_taffy: vec![None; self.nodes.len()],
            layout_roots: Vec::new(),
        };

        let mut pending = vec![self.root];
        while let Some(root) = pending.pop() {
            pass.layout_roots.push(root);
            pass.build_subtree(self, root, &mut pending)?;
        }

        for &root in &pass.layout_roots {
            let Some(tid) = pass.node_to_taffy[root.index()] else {
                continue;
            };
            let available = if root == self.root {
                TaffySize {
                    width: AvailableSpace::Definite(self.viewport.width as f32),
                    height: AvailableSpace::Definite(self.viewport.height as f32),
                }
            } else {
                TaffySize {
                    width: AvailableSpace::MaxContent,
                    height: AvailableSpace::MaxContent,
                }
            };
            pass.taffy.compute_layout_with_measure(
                tid,
                available,
                |known_dimensions, _available_space, _node_id, node_context, _style| {
                    let intrinsic = node_context
                        .as_ref()
                        .map(|c| c.intrinsic)
                        .unwrap_or(TaffySize::ZERO);
                    known_dimensions.unwrap_or(intrinsic)
                },
            )?;
        }

        let mut bounds = vec![Rect::ZERO; self.nodes.len()];
        for &root in &pass.layout_roots {
            pass.place(self, root, Affine::IDENTITY, &mut bounds)?;
        }
        Ok(bounds)
    }
}

impl LayoutPass {
    fn build_subtree(
        &mut self,
        scene: &Scene,
        id: NodeId,
        pending_fixed: &mut Vec<NodeId>,
    ) -> HeroResult<taffy::NodeId> {
        let node = scene.node(id)?;

        let mut children_ids = Vec::<taffy::NodeId>::with_capacity(node.children.len());
        for &child in &node.children {
            if scene.node(child)?.style.position == PositionMode::Fixed {
                pending_fixed.push(child);
                continue;
            }
            children_ids.push(self.build_subtree(scene, child, pending_fixed)?);
        }

        let mut style = taffy_style_for(&node.style);
        if id == scene.root {
            style.size = TaffySize {
                width: Dimension::length(scene.viewport.width as f32),
                height: Dimension::length(scene.viewport.height as f32),
            };
        }

        let tid = if children_ids.is_empty() {
            self.taffy.new_leaf_with_context(
                style,
                LayoutNodeCtx {
                    intrinsic: TaffySize {
                        width: node.intrinsic.width.max(0.0) as f32,
                        height: node.intrinsic.height.max(0.0) as f32,
                    },
                },
            )?
        } else {
            self.taffy.new_with_children(style, &children_ids)?
        };
        self.node_to_taffy[id.index()] = Some(tid);
        Ok(tid)
    }

    fn place(
        &self,
        scene: &Scene,
        id: NodeId,
        parent: Affine,
        bounds: &mut [Rect],
    ) -> HeroResult<()> {
        let Some(tid) = self.node_to_taffy[id.index()] else {
            return Ok(());
        };
        let node = scene.node(id)?;
        let layout = self.taffy.layout(tid)?;
        let w = f64::from(layout.size.width);
        let h = f64::from(layout.size.height);

        let local = Affine::translate(Vec2::new(
            f64::from(layout.location.x),
            f64::from(layout.location.y),
        )) * style_affine(&node.style, w, h);
        let abs = parent * local;
        bounds[id.index()] = abs.transform_rect_bbox(Rect::new(0.0, 0.0, w, h));

        for &child in &node.children {
            if scene.node(child)?.style.position == PositionMode::Fixed {
                continue;
            }
            self.place(scene, child, abs, bounds)?;
        }
        Ok(())
    }
}

fn taffy_style_for(style: &Style) -> TaffyStyle {
    TaffyStyle {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        align_items: Some(AlignItems::Start),
        flex_shrink: 0.0,
        min_size: TaffySize {
            width: Dimension::length(style.min_size.width.max(0.0) as f32),
            height: Dimension::length(style.min_size.height.max(0.0) as f32),
        },
        ..TaffyStyle::default()
    }
}

// translate(t) * scale about the box centre
fn style_affine(style: &Style, w: f64, h: f64) -> Affine {
    let center = Vec2::new(w * 0.5, h * 0.5);
    Affine::translate(style.translate)
        * Affine::translate(center)
        * Affine::scale(style.scale)
        * Affine::translate(-center)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
