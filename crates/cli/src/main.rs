#![deny(unsafe_code)]
//! CLI binary for abyss-sprite.
//!
//! With no arguments, renders one abyss meteorite from a random seed
//! and writes it to `abyss_meteorite_6.png` in the working directory.

mod error;

use abyss_sprite_core::Seed;
use abyss_sprite_meteorite::snapshot::write_png;
use abyss_sprite_meteorite::{Meteorite, OUTPUT_PATH};
use clap::Parser;
use error::CliError;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "abyss-sprite", about = "Generate a glowing abyss meteorite sprite")]
struct Cli {
    /// PRNG seed for a reproducible sprite (default: random).
    #[arg(long)]
    seed: Option<u64>,

    /// Output a JSON summary instead of the completion line.
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let meteorite = Meteorite::default();
    let params = meteorite.params();
    let seed = match cli.seed {
        Some(s) => Seed::new(params.width, params.height, s),
        None => Seed::from_entropy(params.width, params.height),
    };
    seed.validate()?;
    tracing::debug!(seed = seed.seed, "rendering abyss meteorite");

    let sprite = meteorite.render_seeded(seed.seed)?;
    let output = Path::new(OUTPUT_PATH);
    write_png(sprite.canvas(), output)?;

    if cli.json {
        let info = serde_json::json!({
            "seed": seed,
            "vertices": sprite.silhouette().vertices().len(),
            "opaque_pixels": sprite.canvas().count_opaque(),
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Abyss meteorite generated with chaotic energy core!");
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        if cli.json {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
