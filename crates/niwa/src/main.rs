use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use niwa::config::SimConfig;
use niwa::headless::{PaintSpec, RunOptions, run};
use niwa::simulation::{EcologyRules, GranularRules};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Sand, water, soil and seeds
    Granular,
    /// Competing plants, parasites and seeds
    Ecology,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which sandbox to run
    #[arg(long, value_enum, default_value = "granular")]
    variant: Variant,

    /// RNG seed; equal seeds and paint commands reproduce a run
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value = "100")]
    ticks: u64,

    /// RON file overriding the default simulation config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Brush stroke before the first tick: <material>@<x>,<y>[r<radius>] (repeatable)
    #[arg(long)]
    paint: Vec<PaintSpec>,

    /// Also dump the grid every N ticks
    #[arg(long)]
    dump_every: Option<u64>,

    /// Tick even if the variant starts paused (ecology)
    #[arg(long)]
    start: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };

    let options = RunOptions {
        seed: args.seed,
        ticks: args.ticks,
        paints: args.paint,
        dump_every: args.dump_every,
        start: args.start,
    };

    log::info!("Starting Niwa ({:?}, seed {})", args.variant, options.seed);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.variant {
        Variant::Granular => run(GranularRules::new(config.granular), &options, &mut out)?,
        Variant::Ecology => run(EcologyRules::new(config.ecology), &options, &mut out)?,
    };
    Ok(())
}
