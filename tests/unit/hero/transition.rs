use std::{cell::Cell, rc::Rc};

use super::*;
use crate::{
    AnimatedProperty, ContainerSize, HERO_KEY_ATTR, HERO_TRANSITION_ATTR, HeroError, Scene,
    Size, Style, TimelinePlayer, TweenRange, Visibility,
};

struct Fixture {
    scene: Scene,
    container: NodeId,
    page: NodeId,
    offscreen: NodeId,
    title_o: NodeId,
    title_i: NodeId,
}

fn fixture() -> Fixture {
    let mut scene = Scene::new(Size::new(800.0, 600.0));
    let root = scene.root();
    let container = scene.create_child(root, "container", Size::ZERO).unwrap();
    let page = scene.create_child(root, "page", Size::ZERO).unwrap();
    let offscreen = scene.create_child(root, "offscreen", Size::ZERO).unwrap();

    let title_o = scene
        .create_child(page, "title", Size::new(80.0, 20.0))
        .unwrap();
    scene.set_attribute(title_o, HERO_KEY_ATTR, "title").unwrap();
    scene
        .set_attribute(title_o, HERO_TRANSITION_ATTR, "opacity scale")
        .unwrap();
    scene
        .create_child(page, "body", Size::new(200.0, 80.0))
        .unwrap();

    scene
        .create_child(offscreen, "body", Size::new(100.0, 260.0))
        .unwrap();
    let title_i = scene
        .create_child(offscreen, "title", Size::new(100.0, 40.0))
        .unwrap();
    scene.set_attribute(title_i, HERO_KEY_ATTR, "title").unwrap();

    Fixture {
        scene,
        container,
        page,
        offscreen,
        title_o,
        title_i,
    }
}

fn recorder() -> (Rc<Cell<Option<NodeId>>>, impl FnOnce(NodeId) + 'static) {
    let slot = Rc::new(Cell::new(None));
    let sink = slot.clone();
    (slot, move |node| sink.set(Some(node)))
}

#[test]
fn rendered_transition_plans_clones_and_resets_on_finish() {
    let mut f = fixture();
    let mut player = TimelinePlayer::new();
    let (fired, on_finished) = recorder();

    let mut transition = animate(
        &mut f.scene,
        &mut player,
        f.container,
        f.page,
        IncomingContent::rendered(f.offscreen),
        &[],
        &AnimationOptions::default(),
        on_finished,
    )
    .unwrap();

    assert_eq!(transition.matched_keys(), &[HeroKey::from("title")]);
    let timeline = transition.timeline();
    // container + two roots + one clone pair
    assert_eq!(timeline.entries.len(), 5);
    assert_eq!(timeline.entries[0].target, f.container);
    assert_eq!(
        timeline.entries[0].get(AnimatedProperty::MinHeight),
        Some(TweenRange::new(100.0, 300.0))
    );
    assert_eq!(timeline.entries[1].target, f.page);
    assert_eq!(timeline.entries[2].target, f.offscreen);

    let clones = transition.coordinator().clones()[0];
    assert_eq!(
        f.scene.children(f.container).unwrap(),
        vec![f.page, clones.outgoing, clones.incoming]
    );
    assert_eq!(f.scene.style(f.title_o).unwrap().visibility, Visibility::Hidden);
    assert_eq!(f.scene.style(f.title_i).unwrap().visibility, Visibility::Hidden);

    assert_eq!(transition.poll(&mut f.scene).unwrap(), TransitionState::Running);
    player.advance(&mut f.scene, 0.15).unwrap();
    assert_eq!(transition.poll(&mut f.scene).unwrap(), TransitionState::Running);
    assert_eq!(fired.get(), None);

    player.advance(&mut f.scene, 1.0).unwrap();
    assert_eq!(transition.poll(&mut f.scene).unwrap(), TransitionState::Finished);
    assert_eq!(fired.get(), Some(f.offscreen));
    assert!(f.scene.children(f.container).unwrap().is_empty());
    assert!(!f.scene.contains(clones.outgoing));
    for node in [f.container, f.page, f.offscreen, f.title_o, f.title_i] {
        assert_eq!(f.scene.style(node).unwrap(), Style::default());
    }

    // Polling again does nothing.
    fired.set(None);
    assert_eq!(transition.poll(&mut f.scene).unwrap(), TransitionState::Finished);
    assert_eq!(fired.get(), None);
}

#[test]
fn settle_cancels_the_engine_and_resets() {
    let mut f = fixture();
    let mut player = TimelinePlayer::new();
    let (fired, on_finished) = recorder();
    let mut transition = animate(
        &mut f.scene,
        &mut player,
        f.container,
        f.page,
        IncomingContent::rendered(f.offscreen),
        &[],
        &AnimationOptions::default(),
        on_finished,
    )
    .unwrap();
    player.advance(&mut f.scene, 0.1).unwrap();

    assert_eq!(transition.settle(&mut f.scene).unwrap(), TransitionState::Cancelled);
    assert_eq!(fired.get(), Some(f.offscreen));
    assert!(!player.is_playing());
    assert_eq!(
        player.advance(&mut f.scene, 0.1).unwrap(),
        crate::TimelineStatus::Cancelled
    );
    assert_eq!(f.scene.style(f.page).unwrap(), Style::default());
}

#[test]
fn external_cancel_is_reported_and_resets() {
    let mut f = fixture();
    let mut player = TimelinePlayer::new();
    let (fired, on_finished) = recorder();
    let mut transition = animate(
        &mut f.scene,
        &mut player,
        f.container,
        f.page,
        IncomingContent::rendered(f.offscreen),
        &[],
        &AnimationOptions::default(),
        on_finished,
    )
    .unwrap();

    player.cancel();
    assert_eq!(transition.poll(&mut f.scene).unwrap(), TransitionState::Cancelled);
    assert_eq!(fired.get(), Some(f.offscreen));
    assert_eq!(f.scene.style(f.title_o).unwrap().visibility, Visibility::Visible);
}

#[test]
fn build_without_animation_swaps_immediately() {
    let mut f = fixture();
    let staging = f.scene.create_node("staging", Size::ZERO);
    let mut player = TimelinePlayer::new();
    let (fired, on_finished) = recorder();

    let transition = animate(
        &mut f.scene,
        &mut player,
        f.container,
        f.page,
        IncomingContent::build(staging, |scene: &mut Scene, target| {
            scene.create_child(target, "fresh", Size::new(5.0, 5.0))?;
            Ok(())
        }),
        &[],
        &AnimationOptions::default().with_animate(false),
        on_finished,
    )
    .unwrap();

    assert_eq!(transition.state(), TransitionState::Finished);
    assert!(transition.timeline().is_empty());
    assert!(transition.handle().is_none());
    assert!(!player.is_playing());
    assert_eq!(fired.get(), Some(f.page));
    let children = f.scene.children(f.page).unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(f.scene.label(children[0]), Some("fresh"));
    assert!(f.scene.children(staging).unwrap().is_empty());
}

#[test]
fn duplicate_incoming_key_leaves_nothing_staged() {
    let mut f = fixture();
    let extra = f
        .scene
        .create_child(f.offscreen, "again", Size::new(1.0, 1.0))
        .unwrap();
    f.scene.set_attribute(extra, HERO_KEY_ATTR, "title").unwrap();
    let nodes_before = f.scene.len();
    let mut player = TimelinePlayer::new();

    let err = animate(
        &mut f.scene,
        &mut player,
        f.container,
        f.page,
        IncomingContent::rendered(f.offscreen),
        &[],
        &AnimationOptions::default(),
        |_| {},
    )
    .err()
    .unwrap();

    assert!(matches!(err, HeroError::DuplicateKey { ref key } if key == "title"));
    assert_eq!(f.scene.len(), nodes_before);
    assert!(f.scene.children(f.container).unwrap().is_empty());
    assert_eq!(f.scene.style(f.page).unwrap(), Style::default());
    assert_eq!(f.scene.style(f.offscreen).unwrap(), Style::default());
    assert!(!player.is_playing());
}

#[test]
fn blacklisted_keys_are_not_paired() {
    let mut f = fixture();
    let mut player = TimelinePlayer::new();
    let transition = animate(
        &mut f.scene,
        &mut player,
        f.container,
        f.page,
        IncomingContent::rendered(f.offscreen),
        &[HeroKey::from("title")],
        &AnimationOptions::default().with_container_size(ContainerSize::Largest),
        |_| {},
    )
    .unwrap();
    assert!(transition.matched_keys().is_empty());
    // two roots only; largest pins the container instead of tweening it
    assert_eq!(transition.timeline().entries.len(), 2);
    assert_eq!(f.scene.bounding_rect(f.container).unwrap().size(), Size::new(200.0, 300.0));
}

#[test]
fn invalid_options_fail_before_touching_the_tree() {
    let mut f = fixture();
    let mut player = TimelinePlayer::new();
    let result = animate(
        &mut f.scene,
        &mut player,
        f.container,
        f.page,
        IncomingContent::rendered(f.offscreen),
        &[],
        &AnimationOptions::default().with_duration_secs(-1.0),
        |_| {},
    );
    assert!(matches!(result, Err(HeroError::Validation(_))));
    assert_eq!(f.scene.style(f.page).unwrap(), Style::default());
}
