use anyhow::{Context, Result};
use ziggurat_engine::coords::{CameraOrigin, ScreenPoint, WorldBox};
use ziggurat_engine::logging::{LoggingConfig, init_logging};
use ziggurat_engine::sort::{
    BlitInstance, ItemFlags, PaintList, PaintStrategy, RenderItem, SceneObject, SortConfig,
    as_bytes, find_intransitive_triples, paint_order,
};

const STRATEGY_ENV: &str = "ZIGGURAT_STRATEGY";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let strategy = requested_strategy()?;
    log::info!("paint strategy: {strategy}");
    let scene = sample_scene();
    let camera = CameraOrigin::new(-160, -40);

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          ZIGGURAT PAINT ORDER          ║");
    println!("  ║   isometric sorter  ·  {:<6} strategy ║", strategy.as_str());
    println!("  ╚════════════════════════════════════════╝");
    println!();

    // The requested producer first, then the other one for comparison.
    let others = [PaintStrategy::Sort, PaintStrategy::Graph].into_iter().filter(|&s| s != strategy);
    for s in std::iter::once(strategy).chain(others) {
        let config = SortConfig::default()
            .with_strategy(s)
            .with_occlusion_culling(true)
            .with_transitivity_check(true);
        let mut list = PaintList::with_config(config);
        list.begin_frame(camera);
        for (_, object) in &scene {
            list.push(object);
        }
        print_frame(&mut list, &scene);
    }

    let items: Vec<RenderItem> = scene.iter().map(|(_, o)| RenderItem::project(o, camera)).collect();
    let names: Vec<&str> = paint_order(&items).into_iter().map(|i| scene[i].0).collect();
    println!("  One-shot order: {}", names.join(", "));

    let triples = find_intransitive_triples(&items, 8);
    println!("  Intransitive triples: {}", triples.len());
    for [a, b, c] in &triples {
        println!("    {} < {} < {} < {}", scene[*a].0, scene[*b].0, scene[*c].0, scene[*a].0);
    }
    println!();

    Ok(())
}

/// Strategy from the first argument, else the environment, else the default.
fn requested_strategy() -> Result<PaintStrategy> {
    let raw = std::env::args().nth(1).or_else(|| std::env::var(STRATEGY_ENV).ok());
    match raw {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid paint strategy (argument or {STRATEGY_ENV})")),
        None => Ok(PaintStrategy::default()),
    }
}

fn print_frame(list: &mut PaintList, scene: &[(&str, SceneObject)]) {
    println!("  [{}]", list.config().strategy);
    println!("  #   name            shape:frame  screen rect");
    println!("  ─── ─────────────── ─────────── ─────────────────────────────");
    for (pos, entry) in list.iter_in_paint_order().enumerate() {
        let r = entry.item.screen;
        println!(
            "  {:<3} {:<15} {:>5}:{:<5} [{:>5},{:>5}) x [{:>5},{:>5}){}",
            pos,
            scene[entry.index].0,
            entry.item.shape,
            entry.item.frame,
            r.min.x,
            r.max.x,
            r.min.y,
            r.max.y,
            if entry.occluded { "  (occluded)" } else { "" }
        );
    }

    let occluded = list.iter_in_paint_order().filter(|e| e.occluded).count();
    let broken = list.broken_edges().len();
    if broken > 0 {
        println!("  Cycles broken: {broken}");
    }
    log::info!(
        "{} frame: {} items, {occluded} occluded, {broken} cycle(s) broken",
        list.config().strategy,
        list.len()
    );

    let probe = ScreenPoint::new(160, 52);
    match list.pick(probe) {
        Some(i) => println!("  Pick at ({}, {}): {}", probe.x, probe.y, scene[i].0),
        None => println!("  Pick at ({}, {}): nothing", probe.x, probe.y),
    }

    let mut instances: Vec<BlitInstance> = Vec::with_capacity(list.len());
    list.write_instances(&mut instances);
    println!("  Instance buffer: {} items, {} bytes", instances.len(), as_bytes(&instances).len());
    println!();
}

fn sample_scene() -> Vec<(&'static str, SceneObject)> {
    let mut scene = Vec::new();

    let tile = WorldBox::new(64, 64, 0, 64, 64, 0);
    let mut shape = 100;
    for gy in 0..4 {
        for gx in 0..4 {
            let b = tile.translated(gx * 64, gy * 64, 0);
            scene.push(("floor", SceneObject::new(b, shape, 0).with_flags(ItemFlags::LAND)));
            shape += 1;
        }
    }

    scene.push((
        "back wall",
        SceneObject::new(WorldBox::new(256, 8, 0, 256, 8, 96), 200, 0)
            .with_flags(ItemFlags::SOLID | ItemFlags::OCCL),
    ));
    scene.push((
        "window",
        SceneObject::new(WorldBox::new(128, 8, 32, 32, 8, 32), 201, 0)
            .with_flags(ItemFlags::TRANS),
    ));
    scene.push((
        "roof",
        SceneObject::new(WorldBox::new(256, 256, 96, 256, 256, 0), 202, 0)
            .with_flags(ItemFlags::ROOF | ItemFlags::LAND),
    ));

    scene.push(("box 1", SceneObject::new(WorldBox::new(100, 100, 0, 32, 32, 64), 1, 0)));
    scene.push(("box 2", SceneObject::new(WorldBox::new(100, 100, 100, 16, 16, 0), 2, 0)));
    scene.push(("box 3", SceneObject::new(WorldBox::new(200, 200, 0, 32, 32, 0), 3, 0)));

    scene.push((
        "hero",
        SceneObject::new(WorldBox::new(180, 150, 0, 16, 16, 40), 300, 2)
            .with_flags(ItemFlags::SPRITE | ItemFlags::ANIM),
    ));

    scene
}
