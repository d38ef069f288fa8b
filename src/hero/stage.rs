use crate::{
    animation::timeline::{AnimatedProperty, TimelineEntry},
    foundation::core::{NodeId, Vec2},
    foundation::error::HeroResult,
    hero::ledger::StyleLedger,
    hero::matcher::MatchedPair,
    hero::snapshot::{PropertyRanges, TaggedElementInfo},
    hero::tween::{BoundsTween, tween_bounds},
    scene::style::{PositionMode, StylePatch, Visibility},
    scene::tree::VisualTree,
};

/// Overlay copies made for one matched pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagedClones {
    /// Copy of the outgoing element.
    pub outgoing: NodeId,
    /// Copy of the incoming element.
    pub incoming: NodeId,
}

/// Clone every matched pair into the container and hide the live originals.
///
/// Each clone is pinned to the viewport origin, sized to its source's measured bounds and
/// tweened from the outgoing element's position to the incoming element's position. Returns
/// the clones (for removal on reset) and two entries per pair, outgoing clone first.
pub fn stage_clones<T: VisualTree>(
    tree: &mut T,
    ledger: &mut StyleLedger,
    container: NodeId,
    pairs: &[MatchedPair],
) -> HeroResult<(Vec<StagedClones>, Vec<TimelineEntry>)> {
    let mut clones = Vec::with_capacity(pairs.len());
    let mut entries = Vec::with_capacity(pairs.len() * 2);

    for pair in pairs {
        let (o, i) = (&pair.outgoing, &pair.incoming);
        let incoming_clone = overlay_clone(tree, ledger, i)?;
        let outgoing_clone = overlay_clone(tree, ledger, o)?;

        tree.append_child(container, outgoing_clone)?;
        tree.append_child(container, incoming_clone)?;

        entries.push(clone_entry(
            outgoing_clone,
            o.transition.outgoing,
            tween_bounds(o.bounds, o.bounds, i.bounds),
        ));
        entries.push(clone_entry(
            incoming_clone,
            i.transition.incoming,
            tween_bounds(i.bounds, o.bounds, i.bounds),
        ));
        clones.push(StagedClones {
            outgoing: outgoing_clone,
            incoming: incoming_clone,
        });
    }
    Ok((clones, entries))
}

fn overlay_clone<T: VisualTree>(
    tree: &mut T,
    ledger: &mut StyleLedger,
    info: &TaggedElementInfo,
) -> HeroResult<NodeId> {
    let clone = tree.deep_clone(info.element)?;
    tree.patch_style(
        clone,
        &StylePatch::new()
            .position(PositionMode::Fixed)
            .translate(Vec2::ZERO)
            .min_size(info.bounds.size()),
    )?;
    ledger.stage(
        tree,
        info.element,
        &StylePatch::new().visibility(Visibility::Hidden),
    )?;
    Ok(clone)
}

fn clone_entry(clone: NodeId, ranges: PropertyRanges, pos: BoundsTween) -> TimelineEntry {
    TimelineEntry::new(clone)
        .tween(AnimatedProperty::Opacity, ranges.opacity)
        .tween(AnimatedProperty::Scale, ranges.scale)
        .tween(AnimatedProperty::X, pos.x)
        .tween(AnimatedProperty::Y, pos.y)
}

#[cfg(test)]
#[path = "../../tests/unit/hero/stage.rs"]
mod tests;
