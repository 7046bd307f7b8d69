mod app;
mod event;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tessera_blocks::BlockCatalog;
use tessera_chunk::ChunkSize;
use tessera_runtime::{PerfBudgets, World, WorldOptions};
use tessera_world::GenerationConfig;

use crate::app::App;

#[derive(Parser, Debug)]
#[command(name = "tessera", about = "Headless chunked voxel world session")]
struct Args {
    /// World seed
    #[arg(long, default_value_t = 1337)]
    seed: u32,

    /// View distance in chunks
    #[arg(long, default_value_t = 3)]
    view_distance: i32,

    #[arg(long, default_value_t = 16)]
    chunk_x: usize,

    #[arg(long, default_value_t = 64)]
    chunk_y: usize,

    #[arg(long, default_value_t = 16)]
    chunk_z: usize,

    /// Generation config TOML; built-in defaults when absent
    #[arg(long)]
    worldgen: Option<PathBuf>,

    /// Block catalog TOML; built-in catalog when absent
    #[arg(long)]
    blocks: Option<PathBuf>,

    /// Simulation ticks to run
    #[arg(long, default_value_t = 120)]
    ticks: u64,

    /// Light updates per tick
    #[arg(long)]
    light_ops: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let catalog = match &args.blocks {
        Some(path) => BlockCatalog::from_path(path)?,
        None => BlockCatalog::builtin(),
    };
    let generation = match &args.worldgen {
        Some(path) => Some(GenerationConfig::from_path(path)?),
        None => None,
    };
    let mut budgets = PerfBudgets::default();
    if let Some(ops) = args.light_ops {
        budgets.light_ops_per_tick = ops.max(1);
    }
    let size = ChunkSize::new(args.chunk_x.max(1), args.chunk_y.max(4), args.chunk_z.max(1));
    log::info!(
        "seed={} view={} chunk={}x{}x{} blocks={}",
        args.seed,
        args.view_distance,
        size.x,
        size.y,
        size.z,
        catalog.len()
    );

    let world = World::with_catalog(
        WorldOptions {
            seed: args.seed,
            view_distance_chunks: args.view_distance,
            chunk_size: size,
            generation,
            sea_level: None,
            budgets: Some(budgets),
        },
        catalog,
    );
    let mut app = App::new(world);
    for _ in 0..args.ticks {
        app.step();
    }
    app.report();
    Ok(())
}
