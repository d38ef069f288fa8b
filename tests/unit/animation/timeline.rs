use super::*;

#[test]
fn entry_set_replaces_existing_property() {
    let mut e = TimelineEntry::new(NodeId(3))
        .tween(AnimatedProperty::Opacity, TweenRange::new(1.0, 0.0))
        .tween(AnimatedProperty::X, TweenRange::new(0.0, 10.0));
    e.set(AnimatedProperty::Opacity, TweenRange::new(0.0, 1.0));

    assert_eq!(e.tweens.len(), 2);
    assert_eq!(
        e.get(AnimatedProperty::Opacity),
        Some(TweenRange::new(0.0, 1.0))
    );
    assert_eq!(e.get(AnimatedProperty::Scale), None);
    assert_eq!(e.at, 0.0);
}

#[test]
fn timeline_json_uses_snake_case_properties() {
    let mut t = Timeline::new(0.5, Ease::Linear);
    t.entries.push(
        TimelineEntry::new(NodeId(1)).tween(AnimatedProperty::MinWidth, TweenRange::new(1.0, 2.0)),
    );
    let json = t.to_json().unwrap();
    assert!(json.contains("\"min_width\""));
    assert!(json.contains("\"linear\""));
    assert!(t.entry_for(NodeId(1)).is_some());
    assert!(t.entry_for(NodeId(2)).is_none());
}
