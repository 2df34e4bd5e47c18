use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use cavern_core::{
    GeneratedWorld, GenerationError, GeneratorConfig, Room, TileKind, WorldGenerator,
};
use cavern_tools::config_file;
use clap::Parser;
use env_logger::{Builder, Env};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sweep seeds and re-check generation invariants",
    long_about = None
)]
struct Args {
    /// Seed for the stream that picks world seeds
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short = 'n', long, default_value_t = 500)]
    count: u32,
    #[arg(long, default_value_t = 80)]
    width: usize,
    #[arg(long, default_value_t = 30)]
    height: usize,
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config_file::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    println!(
        "Surveying {} worlds of {}x{} from stream seed {}...",
        args.count, args.width, args.height, args.seed
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut generated = 0_u32;
    let mut unreachable = 0_u32;
    let mut violations = Vec::new();
    for _ in 0..args.count {
        let world_seed = rng.next_u64();
        let generator =
            WorldGenerator::with_config(world_seed, args.width, args.height, config.clone());
        let world = match generator.generate() {
            Ok(world) => world,
            Err(GenerationError::UnreachableRoomCount { .. }) => {
                unreachable += 1;
                continue;
            }
            Err(other) => return Err(other).context("Generator rejected the survey settings"),
        };
        generated += 1;

        let replay = generator.generate().context("Second run of a successful seed failed")?;
        if replay != world {
            violations.push(format!("seed {world_seed}: second run differs"));
        }
        violations.extend(
            check_world(&world)
                .into_iter()
                .map(|violation| format!("seed {world_seed}: {violation}")),
        );
    }

    println!("Generated: {generated}");
    println!("Unreachable room count: {unreachable}");
    for violation in &violations {
        println!("VIOLATION {violation}");
    }
    if !violations.is_empty() {
        bail!("{} invariant violations", violations.len());
    }

    println!("Survey completed successfully.");
    Ok(())
}

fn check_world(world: &GeneratedWorld) -> Vec<String> {
    let mut violations = Vec::new();

    for (index, room) in world.rooms.iter().enumerate() {
        if room.left() < 0
            || room.bottom() < 0
            || room.right() as usize >= world.width()
            || room.top() as usize >= world.height()
        {
            violations.push(format!("room {index} {room:?} leaves the map"));
        }
        for (offset, other) in world.rooms[index + 1..].iter().enumerate() {
            if room.overlaps(other) {
                violations.push(format!("rooms {index} and {} overlap", index + 1 + offset));
            }
        }
        if world.tile_at(room.center()) != TileKind::Marker {
            violations.push(format!("room {index} center has no marker"));
        }
    }

    if world.marker_count() != world.room_count() {
        violations.push(format!(
            "{} markers for {} rooms",
            world.marker_count(),
            world.room_count()
        ));
    }
    if world.corridors.len() + 1 != world.room_count() {
        violations.push(format!(
            "{} corridors for {} rooms",
            world.corridors.len(),
            world.room_count()
        ));
    }
    if world.rooms.first().map(Room::center) != Some(world.start_position) {
        violations.push("start position is not the first room's center".to_string());
    }

    violations
}
