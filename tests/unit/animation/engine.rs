use super::*;
use crate::{AnimatedProperty, Ease, NodeId, Scene, Size, TimelineEntry, TweenRange};

fn scene_with_node() -> (Scene, NodeId) {
    let mut scene = Scene::new(Size::new(100.0, 100.0));
    let root = scene.root();
    let n = scene.create_child(root, "n", Size::new(10.0, 10.0)).unwrap();
    (scene, n)
}

fn fade(node: NodeId, duration: f64) -> Timeline {
    let mut t = Timeline::new(duration, Ease::Linear);
    t.entries.push(
        TimelineEntry::new(node)
            .tween(AnimatedProperty::Opacity, TweenRange::new(1.0, 0.0))
            .tween(AnimatedProperty::X, TweenRange::new(0.0, 40.0)),
    );
    t
}

#[test]
fn advance_samples_then_finishes_on_exact_end_values() {
    let (mut scene, n) = scene_with_node();
    let mut player = TimelinePlayer::new();
    let handle = player.play(fade(n, 1.0)).unwrap();

    assert_eq!(player.advance(&mut scene, 0.0).unwrap(), TimelineStatus::Running);
    assert_eq!(scene.style(n).unwrap().opacity, 1.0);

    assert_eq!(player.advance(&mut scene, 0.25).unwrap(), TimelineStatus::Running);
    assert_eq!(scene.style(n).unwrap().opacity, 0.75);
    assert_eq!(scene.style(n).unwrap().translate.x, 10.0);
    assert_eq!(handle.status(), TimelineStatus::Running);

    assert_eq!(player.advance(&mut scene, 5.0).unwrap(), TimelineStatus::Finished);
    assert_eq!(scene.style(n).unwrap().opacity, 0.0);
    assert_eq!(scene.style(n).unwrap().translate.x, 40.0);
    assert_eq!(handle.status(), TimelineStatus::Finished);
    assert!(!player.is_playing());
}

#[test]
fn zero_duration_completes_on_first_step() {
    let (mut scene, n) = scene_with_node();
    let mut player = TimelinePlayer::new();
    let handle = player.play(fade(n, 0.0)).unwrap();
    assert_eq!(player.advance(&mut scene, 0.0).unwrap(), TimelineStatus::Finished);
    assert_eq!(handle.status(), TimelineStatus::Finished);
}

#[test]
fn cancel_and_replay_mark_previous_handle_cancelled() {
    let (_scene, n) = scene_with_node();
    let mut player = TimelinePlayer::new();
    let first = player.play(fade(n, 1.0)).unwrap();
    let second = player.play(fade(n, 1.0)).unwrap();
    assert_eq!(first.status(), TimelineStatus::Cancelled);
    assert_eq!(second.status(), TimelineStatus::Running);

    player.cancel();
    assert_eq!(second.status(), TimelineStatus::Cancelled);
    assert!(second.status().is_done());
}

#[test]
fn rejects_bad_inputs() {
    let (mut scene, n) = scene_with_node();
    let mut player = TimelinePlayer::new();
    assert!(player.play(fade(n, f64::NAN)).is_err());
    player.play(fade(n, 1.0)).unwrap();
    assert!(player.advance(&mut scene, -1.0).is_err());
}

#[test]
fn handle_cancel_stops_playback_without_writing() {
    let (mut scene, n) = scene_with_node();
    let mut player = TimelinePlayer::new();
    let handle = player.play(fade(n, 1.0)).unwrap();
    assert_eq!(player.advance(&mut scene, 0.5).unwrap(), TimelineStatus::Running);

    handle.cancel();
    assert!(!player.is_playing());
    assert_eq!(player.advance(&mut scene, 0.25).unwrap(), TimelineStatus::Cancelled);
    assert_eq!(scene.style(n).unwrap().opacity, 0.5);
    assert_eq!(handle.status(), TimelineStatus::Cancelled);

    // Cancelling a finished timeline keeps it finished.
    let done = player.play(fade(n, 0.0)).unwrap();
    player.advance(&mut scene, 0.0).unwrap();
    done.cancel();
    assert_eq!(done.status(), TimelineStatus::Finished);
}
