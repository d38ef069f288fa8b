use super::*;

fn small_scene() -> (Scene, NodeId, NodeId, NodeId) {
    let mut scene = Scene::new(Size::new(400.0, 300.0));
    let root = scene.root();
    let card = scene.create_child(root, "card", Size::ZERO).unwrap();
    let title = scene
        .create_child(card, "title", Size::new(50.0, 10.0))
        .unwrap();
    let icon = scene
        .create_child(title, "icon", Size::new(8.0, 8.0))
        .unwrap();
    scene.set_attribute(title, "data-hero-key", "title").unwrap();
    scene.set_attribute(icon, "data-hero-key", "icon").unwrap();
    (scene, card, title, icon)
}

#[test]
fn attribute_query_is_preorder_and_excludes_root() {
    let (mut scene, card, title, icon) = small_scene();
    scene.set_attribute(card, "data-hero-key", "card").unwrap();
    let found = scene
        .descendants_with_attribute(card, "data-hero-key")
        .unwrap();
    assert_eq!(found, vec![title, icon]);
    assert_eq!(scene.attribute(title, "data-hero-key"), Some("title"));
    assert_eq!(scene.attribute(title, "missing"), None);
}

#[test]
fn deep_clone_copies_subtree_detached() {
    let (mut scene, _card, title, _icon) = small_scene();
    let copy = scene.deep_clone(title).unwrap();
    assert_ne!(copy, title);
    assert_eq!(scene.parent(copy), None);
    assert_eq!(scene.label(copy), Some("title"));
    let kids = scene.children(copy).unwrap();
    assert_eq!(kids.len(), 1);
    assert_eq!(scene.attribute(kids[0], "data-hero-key"), Some("icon"));
    assert_eq!(scene.parent(kids[0]), Some(copy));
}

#[test]
fn append_moves_and_rejects_cycles() {
    let (mut scene, card, title, icon) = small_scene();
    let root = scene.root();
    scene.append_child(root, icon).unwrap();
    assert_eq!(scene.parent(icon), Some(root));
    assert!(scene.children(title).unwrap().is_empty());

    let err = scene.append_child(title, card).unwrap_err();
    assert!(matches!(err, HeroError::Scene(_)));
}

#[test]
fn replace_children_detaches_previous() {
    let (mut scene, card, title, icon) = small_scene();
    scene.replace_children(card, &[icon]).unwrap();
    assert_eq!(scene.children(card).unwrap(), vec![icon]);
    assert_eq!(scene.parent(title), None);
    assert!(!scene.is_attached(title));
    assert!(scene.is_attached(icon));
}

#[test]
fn remove_frees_whole_subtree() {
    let (mut scene, card, title, icon) = small_scene();
    let before = scene.len();
    scene.remove(title).unwrap();
    assert!(!scene.contains(title));
    assert!(!scene.contains(icon));
    assert_eq!(scene.len(), before - 2);
    assert!(scene.children(card).unwrap().is_empty());
    assert!(matches!(scene.style(title), Err(HeroError::Scene(_))));
    assert!(scene.remove(scene.root()).is_err());
}

#[test]
fn parent_of_tracks_attachment() {
    let mut scene = Scene::new(Size::new(50.0, 50.0));
    let root = scene.root();
    let a = scene.create_child(root, "a", Size::ZERO).unwrap();
    let loose = scene.create_node("loose", Size::ZERO);
    assert_eq!(scene.parent_of(a).unwrap(), Some(root));
    assert_eq!(scene.parent_of(loose).unwrap(), None);
    scene.remove(a).unwrap();
    assert!(scene.parent_of(a).is_err());
}
