use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::loaders::Loader;
use clap::Parser;
use eyre::Report;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::{Level, warn};

mod algos;
mod bench;
mod checks;
mod config;
mod display;
mod generate;
mod loaders;
mod model;
mod multimap;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Use FILE instead of enrollbench.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Read and write datasets in DIR
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Dataset sizes to use, overriding the configuration
    #[arg(short, long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,
    /// Generate random datasets instead of running the benchmark
    #[arg(short, long)]
    generate: bool,
    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(args: &Args) -> Result<Config, Report> {
    let mut config = match &args.config {
        Some(file_name) => Config::load(file_name)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Config::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => {
            warn!("no {DEFAULT_CONFIG_FILE} found, using default configuration");
            Config::default()
        }
    };
    if let Some(data_dir) = &args.data_dir {
        config.data_dir.clone_from(data_dir);
    }
    if let Some(sizes) = &args.sizes {
        config.sizes.clone_from(sizes);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = load_config(&args)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    if args.generate {
        return generate::generate_datasets(
            &config.data_dir,
            &config.sizes,
            &config.generator,
            &mut rng,
        );
    }
    let loader = Loader::new(&config.data_dir);
    for &size in &config.sizes {
        let enrollees = loader.load(size)?;
        let timings = bench::run(enrollees, &mut rng)?;
        display::display_timings(&timings);
    }
    Ok(())
}
