/// Noise sampling tool: builds a noise tree from a JSON config (or the default
/// XNOR-of-two-Perlins tree) and evaluates it at one point or over a grid.
///
/// Grid output is `NoiseGrid` JSON: `{ "data": [...], "width": W, "height": H }`.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use noisemix_core::{sample_grid, BlendRegistry, Noise, NoiseConfig};

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "sampler", about = "Evaluate a composite noise tree at a point or over a grid")]
struct Args {
    /// Noise tree JSON. Defaults to an XNOR of two Perlin layers.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the default tree (random when omitted).
    #[arg(short, long)]
    seed: Option<u32>,

    /// Evaluate a single point, given as `x,y`.
    #[arg(long, value_parser = parse_point)]
    at: Option<(f64, f64)>,

    /// Grid width in samples
    #[arg(long, default_value = "256")]
    width: usize,

    /// Grid height in samples
    #[arg(long, default_value = "256")]
    height: usize,

    /// Write grid JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the registered blend names and exit
    #[arg(long)]
    list_blends: bool,
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}"));
    Ok((parse(x)?, parse(y)?))
}

fn load_config(args: &Args) -> Result<NoiseConfig> {
    match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            NoiseConfig::from_json(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))
        }
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            eprintln!("[sampler] Default XNOR tree, seed {seed}");
            Ok(NoiseConfig::xnor_perlin(seed))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let registry = BlendRegistry::with_builtins();

    if args.list_blends {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let noise = load_config(&args)?
        .build(&registry)
        .context("Failed to build noise tree")?;

    if let Some((x, y)) = args.at {
        println!("{}", noise.get(x, y));
        return Ok(());
    }

    eprintln!("[sampler] Sampling {}×{} grid …", args.width, args.height);
    let grid = sample_grid(&noise, args.width, args.height)?;
    eprintln!("  range [{:.4}, {:.4}]", grid.min_value(), grid.max_value());

    let json = serde_json::to_string(&grid)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Cannot write {}", path.display()))?;
            eprintln!("  -> {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
