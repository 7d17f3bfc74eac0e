//! Generate an occupancy map of a scattered-post world and print it.
//!
//! Demonstrates: load config → build world → MapGenerator → subscribe →
//! generate → read the published grid.
//!
//! ```text
//! cargo run -p gridcast-bench --example generate_map [config.toml]
//! RUST_LOG=gridcast_engine=debug cargo run -p gridcast-bench --example generate_map
//! ```

use std::error::Error;
use std::path::Path;

use gridcast::prelude::*;
use gridcast_bench::scattered_world;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gridcast_engine=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => {
            info!("loading configuration from {path}");
            GridConfig::load_toml(Path::new(path))?
        }
        None => GridConfig {
            resolution: 0.25,
            ..GridConfig::default()
        },
    };

    let world = scattered_world(&config, 25, 42);
    let generator = MapGenerator::new(config, RayProbe::new(world), ChannelPublisher::new())?;
    let maps = generator.publisher().subscribe();

    let result = generator.generate()?;
    let grid = maps.recv()?;
    let m = &result.metrics;

    println!("=== gridcast: {} x {} cells ===\n", grid.width(), grid.height());
    // Top row first, so north is up.
    for y in (0..grid.height() as i32).rev() {
        let row: String = (0..grid.width() as i32)
            .map(|x| match grid.state_at(CellCoord::new(x, y)) {
                Some(CellState::Free) => '.',
                Some(CellState::Occupied) => '#',
                _ => ' ',
            })
            .collect();
        println!("  {row}");
    }
    println!();
    println!(
        "free={} occupied={} unknown={} probed={} rays={} ({:.1}/cell) time={}us",
        m.free,
        m.occupied,
        m.unknown,
        m.cells_probed,
        m.rays_cast,
        m.rays_per_probe(),
        m.elapsed_us,
    );
    Ok(())
}
