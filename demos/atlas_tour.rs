//! Atlas tour
//!
//! Builds one atlas of each kind from an in-memory resource store and
//! prints the regions a renderer would receive.

use cgmath::Vector2;
use hearth_atlas::atlas::geometry::{transform_uv, viewport_center, viewport_size};
use hearth_atlas::atlas::{load_configured_atlas, load_grid_atlas, load_packed_atlas};
use hearth_atlas::{AtlasSource, MemoryResourceStore, Region, TextResource, TextureHandle};

const HERO_LAYOUT: &str = r#"
prewarm = true

[layout]
kind = "multi_sheet"

[[layout.sheets]]
name = "walk"
width = 64.0
height = 16.0
cell_width = 16
cell_height = 16

[[layout.sheets]]
name = "jump"
width = 32.0
height = 16.0
cell_width = 16
cell_height = 16
offset_y = 16
"#;

const ITEMS_METADATA: &str = r#"{"sprites":[
    {"min":{"x":40,"y":2},"max":{"x":60,"y":20}},
    {"min":{"x":0,"y":0},"max":{"x":24,"y":24}},
    {"min":{"x":4,"y":30},"max":{"x":36,"y":62}}
]}"#;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Testing atlas lookups...");

    let mut store = MemoryResourceStore::new();
    store.register_texture("tiles.png", TextureHandle::new(1, 64.0, 32.0));
    store.register_texture("hero.png", TextureHandle::new(2, 64.0, 32.0));
    store.register_texture("items.png", TextureHandle::new(3, 64.0, 64.0));
    store.register_text(TextResource::new("hero.toml", HERO_LAYOUT));
    store.register_text(TextResource::new("items.json", ITEMS_METADATA));

    let mut tiles = load_grid_atlas(&store, "tiles.png", 16, 16)?;
    print_regions("tiles (grid)", &tiles.drawables()?);

    let mut hero = load_configured_atlas(&store, "hero.png", "hero.toml")?;
    print_regions("hero (multi-sheet)", &hero.drawables()?);
    let landing = hero.drawable_named("jump", 1)?;
    println!("[OK] jump#1 -> {:?}", landing.viewport);
    println!(
        "     center {:?}, size {:?}, local (0.25, 0.75) -> {:?}",
        viewport_center(&landing.viewport),
        viewport_size(&landing.viewport),
        transform_uv(&landing.viewport, Vector2::new(0.25, 0.75))
    );

    let mut items = load_packed_atlas(&store, "items.png", "items.json")?;
    print_regions("items (packed)", &items.drawables()?);

    println!("[OK] All atlases resolved");
    Ok(())
}

fn print_regions(label: &str, regions: &[Region]) {
    println!("{}: {} cells", label, regions.len());
    for (index, region) in regions.iter().enumerate() {
        println!(
            "  {:>2}: {}x{} min=({:.3}, {:.3}) max=({:.3}, {:.3})",
            index,
            region.width,
            region.height,
            region.viewport.min.x,
            region.viewport.min.y,
            region.viewport.max.x,
            region.viewport.max.y
        );
    }
}
