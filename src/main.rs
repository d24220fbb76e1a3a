use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use lifers::{io, World};

/// Simulate conway's game of life on a bounded grid.
#[derive(Parser)]
#[command(name = "lifers")]
struct Args {
    /// Number of rows in the grid (ignored when an input path is given).
    #[arg(short = 'x', long, default_value_t = 50)]
    rows: usize,

    /// Number of columns in the grid (ignored when an input path is given).
    #[arg(short = 'y', long, default_value_t = 50)]
    cols: usize,

    /// Load the initial board from this snapshot instead of seeding randomly.
    #[arg(short, long)]
    input_path: Option<PathBuf>,

    /// Where to write the saved snapshot.
    #[arg(short, long, default_value = "final_state.txt")]
    output_path: PathBuf,

    /// Number of generations to simulate.
    #[arg(short = 'n', long, default_value_t = 50)]
    generations: i64,

    /// 1-indexed generation to snapshot (default: the last one).
    #[arg(short = 'g', long)]
    save_generation: Option<i64>,

    /// Count the focal cell among its own neighbors.
    #[arg(short = 'f', long)]
    include_focal: bool,

    /// Probability that a seeded cell starts live.
    #[arg(short = 'p', long, default_value_t = 0.5)]
    alive: f64,

    /// Seed for the random board, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut world = match &args.input_path {
        Some(path) => {
            let matrix = io::load_matrix(path)
                .with_context(|| format!("loading snapshot {}", path.display()))?;
            World::from_matrix(&matrix)?
        }
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            World::random(args.rows, args.cols, args.alive, &mut rng)?
        }
    };
    if args.include_focal {
        world = world.with_focal_included();
    }

    // Snapshot once at the requested generation, then keep stepping to the
    // final one without saving again.
    let save_at = args
        .save_generation
        .unwrap_or(args.generations)
        .min(args.generations);
    world.run(save_at)?;
    io::save_matrix(&args.output_path, &world.to_matrix())
        .with_context(|| format!("saving snapshot {}", args.output_path.display()))?;
    world.run(args.generations - save_at)?;

    Ok(())
}
