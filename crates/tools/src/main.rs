use std::path::PathBuf;

use anyhow::{Context, Result};
use cavern_core::{GeneratorConfig, WorldGenerator};
use cavern_tools::{config_file, dump, seed};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Generate a dungeon world from a seed", long_about = None)]
struct Args {
    /// Seed as a number or an N<digits>S code; random when omitted
    #[arg(short, long, value_parser = seed::parse_seed_value)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 80)]
    width: usize,
    /// Playable height, excluding any status rows
    #[arg(long, default_value_t = 30)]
    height: usize,
    /// TOML file overriding generator bounds
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Mark the start position with '@' in the text dump
    #[arg(long)]
    show_start: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let config = match &args.config {
        Some(path) => config_file::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    let seed_choice = seed::resolve_seed(args.seed, seed::generate_runtime_seed());
    if let seed::SeedChoice::Generated(value) = seed_choice {
        log::info!("no seed given, using generated seed {value}");
    }

    let world = WorldGenerator::with_config(seed_choice.value(), args.width, args.height, config)
        .generate()
        .with_context(|| format!("Failed to generate world for seed {}", seed_choice.value()))?;

    match args.format {
        OutputFormat::Text => {
            print!("{}", dump::render_text(&world, args.show_start));
            print!("{}", dump::summary(&world));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&world)
                .with_context(|| "Failed to serialize world to JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}
