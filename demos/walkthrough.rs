use wavyte_hero::{
    AnimationOptions, HERO_KEY_ATTR, HeroController, Scene, Size, TimelinePlayer,
    TransitionState, VisualTree,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut scene = Scene::new(Size::new(640.0, 480.0));
    let root = scene.root();
    let container = scene.create_child(root, "container", Size::ZERO)?;
    let page = scene.create_child(root, "page", Size::ZERO)?;
    let thumb = scene.create_child(page, "thumb", Size::new(64.0, 64.0))?;
    scene.set_attribute(thumb, HERO_KEY_ATTR, "photo")?;
    let staging = scene.create_child(root, "staging", Size::ZERO)?;

    let mut controller = HeroController::new(container, page, staging, TimelinePlayer::new())
        .with_defaults(AnimationOptions::default().with_duration_secs(0.5));

    controller.update(
        &mut scene,
        |scene: &mut Scene, target| {
            let full = scene.create_child(target, "full", Size::new(480.0, 320.0))?;
            scene.set_attribute(full, HERO_KEY_ATTR, "photo")
        },
        None,
        |root| println!("transition settled on {root}"),
    )?;
    if let Some(t) = controller.active() {
        println!("{}", t.timeline().to_json()?);
    }

    let mut frame = 0;
    while controller.poll(&mut scene)? == Some(TransitionState::Running) {
        controller.engine_mut().advance(&mut scene, 1.0 / 30.0)?;
        frame += 1;
    }
    let photo = scene.children(page)?[0];
    println!(
        "settled after {frame} frames; photo at {:?}",
        scene.bounding_rect(photo)?
    );
    Ok(())
}
