use super::*;
use crate::{PositionMode, Scene, Style};

struct Fixture {
    scene: Scene,
    container: NodeId,
    outgoing: VisualSnapshot,
    incoming: VisualSnapshot,
}

fn fixture() -> Fixture {
    let mut scene = Scene::new(Size::new(800.0, 600.0));
    let root = scene.root();
    let container = scene.create_child(root, "container", Size::ZERO).unwrap();
    let out = scene
        .create_child(container, "out", Size::new(200.0, 100.0))
        .unwrap();
    let inc = scene
        .create_child(container, "in", Size::new(100.0, 300.0))
        .unwrap();
    for n in [out, inc] {
        scene
            .patch_style(n, &StylePatch::new().position(PositionMode::Fixed))
            .unwrap();
    }
    Fixture {
        scene,
        container,
        outgoing: VisualSnapshot {
            element: out,
            bounds: Rect::new(10.0, 20.0, 210.0, 120.0),
            tagged: vec![],
        },
        incoming: VisualSnapshot {
            element: inc,
            bounds: Rect::new(0.0, 0.0, 100.0, 300.0),
            tagged: vec![],
        },
    }
}

#[test]
fn animate_emits_container_size_entry() {
    let mut f = fixture();
    let mut ledger = StyleLedger::new();
    let frame = size_container(
        &mut f.scene,
        &mut ledger,
        f.container,
        ContainerSize::Animate,
        f.outgoing.bounds,
        f.incoming.bounds,
    )
    .unwrap();

    assert_eq!(frame.initial, f.outgoing.bounds);
    assert_eq!(frame.final_, f.incoming.bounds);
    let entry = frame.entry.unwrap();
    assert_eq!(entry.target, f.container);
    assert_eq!(
        entry.get(AnimatedProperty::MinWidth),
        Some(TweenRange::new(200.0, 100.0))
    );
    assert_eq!(
        entry.get(AnimatedProperty::MinHeight),
        Some(TweenRange::new(100.0, 300.0))
    );
    // Style untouched until the engine runs, but recorded for reset.
    assert_eq!(f.scene.style(f.container).unwrap(), Style::default());
    assert_eq!(ledger.original(f.container), Some(Style::default()));
}

#[test]
fn largest_pins_max_of_both_axes() {
    let mut f = fixture();
    let mut ledger = StyleLedger::new();
    let frame = size_container(
        &mut f.scene,
        &mut ledger,
        f.container,
        ContainerSize::Largest,
        f.outgoing.bounds,
        f.incoming.bounds,
    )
    .unwrap();

    assert!(frame.entry.is_none());
    assert_eq!(frame.initial, Rect::new(0.0, 0.0, 200.0, 300.0));
    assert_eq!(frame.initial, frame.final_);
    assert_eq!(
        f.scene.style(f.container).unwrap().min_size,
        Size::new(200.0, 300.0)
    );

    let entries = stage_roots(
        &mut f.scene,
        &mut ledger,
        ContainerSize::Largest,
        &f.outgoing,
        &f.incoming,
        &frame,
    )
    .unwrap();
    assert_eq!(entries.len(), 2);
    let out = &entries[0];
    assert_eq!(out.target, f.outgoing.element);
    assert_eq!(out.get(AnimatedProperty::Opacity), Some(TweenRange::new(1.0, 0.0)));
    assert_eq!(out.get(AnimatedProperty::Scale), Some(TweenRange::new(1.0, 0.0)));
    // Fixed frame: roots stay centred in place.
    assert_eq!(out.get(AnimatedProperty::X), Some(TweenRange::constant(0.0)));
    assert_eq!(out.get(AnimatedProperty::Y), Some(TweenRange::constant(100.0)));
    let inc = &entries[1];
    assert_eq!(inc.get(AnimatedProperty::Opacity), Some(TweenRange::new(0.0, 1.0)));
    assert_eq!(inc.get(AnimatedProperty::X), Some(TweenRange::constant(50.0)));
    assert_eq!(inc.get(AnimatedProperty::Y), Some(TweenRange::constant(0.0)));
}

#[test]
fn current_shows_outgoing_at_natural_offset() {
    let mut f = fixture();
    let mut ledger = StyleLedger::new();
    let frame = size_container(
        &mut f.scene,
        &mut ledger,
        f.container,
        ContainerSize::Current,
        f.outgoing.bounds,
        f.incoming.bounds,
    )
    .unwrap();
    assert!(frame.entry.is_none());
    assert_eq!(frame.initial.size(), Size::new(200.0, 100.0));

    let entries = stage_roots(
        &mut f.scene,
        &mut ledger,
        ContainerSize::Current,
        &f.outgoing,
        &f.incoming,
        &frame,
    )
    .unwrap();
    assert!(entries.is_empty());

    let out = f.scene.style(f.outgoing.element).unwrap();
    assert_eq!(out.visibility, Visibility::Visible);
    assert_eq!(out.translate, Vec2::new(10.0, 20.0));
    let inc = f.scene.style(f.incoming.element).unwrap();
    assert_eq!(inc.visibility, Visibility::Hidden);
    assert_eq!(inc.translate, Vec2::ZERO);
}

#[test]
fn incoming_mirrors_current() {
    let mut f = fixture();
    let mut ledger = StyleLedger::new();
    let frame = size_container(
        &mut f.scene,
        &mut ledger,
        f.container,
        ContainerSize::Incoming,
        f.outgoing.bounds,
        f.incoming.bounds,
    )
    .unwrap();
    assert_eq!(frame.initial.size(), Size::new(100.0, 300.0));

    stage_roots(
        &mut f.scene,
        &mut ledger,
        ContainerSize::Incoming,
        &f.outgoing,
        &f.incoming,
        &frame,
    )
    .unwrap();
    assert_eq!(
        f.scene.style(f.outgoing.element).unwrap().visibility,
        Visibility::Hidden
    );
    assert_eq!(
        f.scene.style(f.incoming.element).unwrap().visibility,
        Visibility::Visible
    );
}
