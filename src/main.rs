//! Toroidal Life CLI - Run headless simulations from JSON configuration.

use std::path::PathBuf;
use std::time::Instant;

use toroidal_life::{
    Engine,
    driver::{Pacer, TickRate},
    schema::SimulationConfig,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    let paced = args.iter().any(|a| a == "--paced");
    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|a| !a.starts_with("--"))
        .collect();

    if positional.is_empty() {
        eprintln!("Usage: {} <config.json> [generations] [--paced]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations (default: 100)");
        eprintln!("  --paced      Hold the configured tick rate");
        eprintln!();
        eprintln!("Print an example configuration with --example.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(positional[0]);
    let generations: u64 = positional
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100);

    let config = SimulationConfig::from_json_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    println!("Toroidal Life");
    println!("=============");
    println!(
        "Grid: {}x{} ({} cells)",
        config.rows,
        config.cols,
        config.grid_size()
    );
    println!("Bands: {:?}", config.band);
    println!("Generations: {}", generations);
    if paced {
        println!("Tick rate: {}/s", config.tick_rate);
    }
    println!();

    let engine = Engine::new(&config).unwrap_or_else(|e| {
        eprintln!("Error creating engine: {}", e);
        std::process::exit(1);
    });

    let initial = engine.stats();
    println!("Initial state:");
    println!(
        "  Alive: {} ({:.2}%)",
        initial.alive,
        initial.alive_fraction * 100.0
    );
    println!();

    let mut pacer = paced.then(|| Pacer::new(TickRate::new(config.tick_rate)));

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..generations {
        if let Some(pacer) = pacer.as_mut() {
            pacer.wait();
        }
        engine.advance();

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let stats = engine.stats();
            let elapsed = start.elapsed().as_secs_f32();
            println!(
                "  Generation {}/{}: alive={}, {:.1} gen/s",
                i + 1,
                generations,
                stats.alive,
                (i + 1) as f32 / elapsed
            );
        }
    }

    let elapsed = start.elapsed();
    let last = engine.stats();

    println!();
    println!("Final state:");
    println!(
        "  Alive: {} ({:.2}%)",
        last.alive,
        last.alive_fraction * 100.0
    );
    if generations > 0 {
        println!(
            "Time: {:.2}s ({:.1} gen/s)",
            elapsed.as_secs_f32(),
            generations as f32 / elapsed.as_secs_f32()
        );
    }
}

fn print_example_config() {
    let config = SimulationConfig::default();
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
