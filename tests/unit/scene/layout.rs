use super::*;
use crate::{Size, StylePatch, VisualTree};

fn column_scene() -> (Scene, NodeId, NodeId, NodeId) {
    let mut scene = Scene::new(Size::new(800.0, 600.0));
    let root = scene.root();
    let group = scene.create_child(root, "group", Size::ZERO).unwrap();
    let a = scene
        .create_child(group, "a", Size::new(80.0, 20.0))
        .unwrap();
    let b = scene
        .create_child(group, "b", Size::new(200.0, 80.0))
        .unwrap();
    (scene, group, a, b)
}

#[test]
fn children_stack_vertically_at_content_width() {
    let (mut scene, group, a, b) = column_scene();
    assert_eq!(
        scene.bounding_rect(group).unwrap(),
        Rect::new(0.0, 0.0, 200.0, 100.0)
    );
    assert_eq!(
        scene.bounding_rect(a).unwrap(),
        Rect::new(0.0, 0.0, 80.0, 20.0)
    );
    assert_eq!(
        scene.bounding_rect(b).unwrap(),
        Rect::new(0.0, 20.0, 200.0, 100.0)
    );
}

#[test]
fn fixed_nodes_leave_the_flow_and_pin_to_origin() {
    let (mut scene, group, a, b) = column_scene();
    let root = scene.root();
    let after = scene
        .create_child(root, "after", Size::new(10.0, 10.0))
        .unwrap();
    assert_eq!(scene.bounding_rect(after).unwrap().y0, 100.0);

    scene
        .patch_style(a, &StylePatch::new().position(PositionMode::Fixed))
        .unwrap();
    // `b` moves up into the space `a` vacated.
    assert_eq!(scene.bounding_rect(b).unwrap().y0, 0.0);
    assert_eq!(scene.bounding_rect(after).unwrap().y0, 80.0);
    assert_eq!(
        scene.bounding_rect(a).unwrap(),
        Rect::new(0.0, 0.0, 80.0, 20.0)
    );
    assert_eq!(scene.bounding_rect(group).unwrap().height(), 80.0);
}

#[test]
fn min_size_and_translation_shape_bounds() {
    let (mut scene, group, _a, _b) = column_scene();
    scene
        .patch_style(
            group,
            &StylePatch::new()
                .min_size(Size::new(300.0, 120.0))
                .translate(Vec2::new(5.0, 7.0)),
        )
        .unwrap();
    assert_eq!(
        scene.bounding_rect(group).unwrap(),
        Rect::new(5.0, 7.0, 305.0, 127.0)
    );
}

#[test]
fn scale_shrinks_about_the_centre() {
    let (mut scene, _group, a, _b) = column_scene();
    scene
        .patch_style(a, &StylePatch::new().scale(0.5))
        .unwrap();
    let r = scene.bounding_rect(a).unwrap();
    assert!((r.x0 - 20.0).abs() < 1e-9);
    assert!((r.y0 - 5.0).abs() < 1e-9);
    assert!((r.width() - 40.0).abs() < 1e-9);
    assert!((r.height() - 10.0).abs() < 1e-9);
}

#[test]
fn detached_nodes_measure_empty() {
    let mut scene = Scene::new(Size::new(100.0, 100.0));
    let loose = scene.create_node("loose", Size::new(10.0, 10.0));
    assert_eq!(scene.bounding_rect(loose).unwrap(), Rect::ZERO);
}
