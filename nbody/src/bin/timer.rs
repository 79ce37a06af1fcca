use nbody::{compare, BenchConfig, Baseline, Optimized};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

/// Time the baseline kernel against the optimized one and write <variant>_results.txt
#[derive(Parser, Debug)]
#[command()]
struct Args {
    /// YAML harness config, defaults are used when absent
    #[arg(short, long)]
    file_name: Option<PathBuf>,

    #[arg(long)]
    reps: Option<u32>,

    #[arg(long)]
    variant: Option<String>,

    #[arg(long)]
    output_dir: Option<PathBuf>,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<BenchConfig> {
    let mut cfg = match &args.file_name {
        Some(path) => BenchConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => BenchConfig::default(),
    };

    if let Some(reps) = args.reps {
        cfg.reps = reps;
    }
    if let Some(variant) = &args.variant {
        cfg.variant = variant.clone();
    }
    if let Some(dir) = &args.output_dir {
        cfg.output_dir = dir.clone();
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cfg = load_config(&args)?;

    let comparison = compare::<Baseline, Optimized>(&cfg)?;
    println!("{comparison}");

    let path = cfg.report_path();
    comparison
        .write_report(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
