use crate::{
    animation::timeline::{AnimatedProperty, TimelineEntry},
    foundation::core::{NodeId, Rect, Size, TweenRange, Vec2},
    foundation::error::HeroResult,
    hero::ledger::StyleLedger,
    hero::options::ContainerSize,
    hero::snapshot::{TransitionSpec, VisualSnapshot},
    hero::tween::tween_bounds,
    scene::style::{StylePatch, Visibility},
    scene::tree::VisualTree,
};

/// Container rectangles the roots are tweened against.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerFrame {
    /// Container rectangle at the start of the transition.
    pub initial: Rect,
    /// Container rectangle at the end of the transition.
    pub final_: Rect,
    /// Size tween of the container, only for [`ContainerSize::Animate`].
    pub entry: Option<TimelineEntry>,
}

/// Decide the container's rectangles for `policy`.
///
/// `Animate` emits a min-size tween and uses the root bounds as endpoints. Every other
/// policy pins the container's min-size and measures it once.
pub fn size_container<T: VisualTree>(
    tree: &mut T,
    ledger: &mut StyleLedger,
    container: NodeId,
    policy: ContainerSize,
    outgoing: Rect,
    incoming: Rect,
) -> HeroResult<ContainerFrame> {
    let fixed = match policy {
        ContainerSize::Animate => {
            ledger.track(tree, container)?;
            let entry = TimelineEntry::new(container)
                .tween(
                    AnimatedProperty::MinWidth,
                    TweenRange::new(outgoing.width(), incoming.width()),
                )
                .tween(
                    AnimatedProperty::MinHeight,
                    TweenRange::new(outgoing.height(), incoming.height()),
                );
            return Ok(ContainerFrame {
                initial: outgoing,
                final_: incoming,
                entry: Some(entry),
            });
        }
        ContainerSize::Current => outgoing.size(),
        ContainerSize::Incoming => incoming.size(),
        ContainerSize::Largest => Size::new(
            outgoing.width().max(incoming.width()),
            outgoing.height().max(incoming.height()),
        ),
    };

    ledger.stage(tree, container, &StylePatch::new().min_size(fixed))?;
    let bounds = tree.bounding_rect(container)?;
    tracing::debug!(?policy, width = bounds.width(), height = bounds.height(), "container pinned");
    Ok(ContainerFrame {
        initial: bounds,
        final_: bounds,
        entry: None,
    })
}

/// Stage both roots for `policy`.
///
/// Returns the outgoing and incoming root entries for `Animate` and `Largest`. `Current` and
/// `Incoming` are static choices: one root is shown at its natural offset, the other
/// hidden, and no entries are produced.
pub fn stage_roots<T: VisualTree>(
    tree: &mut T,
    ledger: &mut StyleLedger,
    policy: ContainerSize,
    outgoing: &VisualSnapshot,
    incoming: &VisualSnapshot,
    frame: &ContainerFrame,
) -> HeroResult<Vec<TimelineEntry>> {
    match policy {
        ContainerSize::Animate | ContainerSize::Largest => {
            ledger.track(tree, outgoing.element)?;
            ledger.track(tree, incoming.element)?;
            let spec = TransitionSpec::FULL;
            let out = root_entry(outgoing, spec.outgoing, frame);
            let inc = root_entry(incoming, spec.incoming, frame);
            Ok(vec![out, inc])
        }
        ContainerSize::Current => {
            show_one(tree, ledger, outgoing, incoming)?;
            Ok(Vec::new())
        }
        ContainerSize::Incoming => {
            show_one(tree, ledger, incoming, outgoing)?;
            Ok(Vec::new())
        }
    }
}

fn root_entry(
    snap: &VisualSnapshot,
    ranges: crate::hero::snapshot::PropertyRanges,
    frame: &ContainerFrame,
) -> TimelineEntry {
    let pos = tween_bounds(snap.bounds, frame.initial, frame.final_);
    TimelineEntry::new(snap.element)
        .tween(AnimatedProperty::Opacity, ranges.opacity)
        .tween(AnimatedProperty::Scale, ranges.scale)
        .tween(AnimatedProperty::X, pos.x)
        .tween(AnimatedProperty::Y, pos.y)
}

fn show_one<T: VisualTree>(
    tree: &mut T,
    ledger: &mut StyleLedger,
    shown: &VisualSnapshot,
    hidden: &VisualSnapshot,
) -> HeroResult<()> {
    ledger.stage(
        tree,
        shown.element,
        &StylePatch::new()
            .visibility(Visibility::Visible)
            .translate(Vec2::new(shown.bounds.x0, shown.bounds.y0)),
    )?;
    ledger.stage(
        tree,
        hidden.element,
        &StylePatch::new()
            .visibility(Visibility::Hidden)
            .translate(Vec2::ZERO)
            .scale(1.0),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/hero/sizing.rs"]
mod tests;
