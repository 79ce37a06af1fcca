use nbody::{run_with, Baseline, Optimized};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy)]
enum KernelKind {
    Baseline,
    Optimized,
}

#[derive(Parser, Debug)]
#[command(about = "Advance the Sun and outer planets through LOOPS x ITERATIONS steps")]
struct Args {
    /// Times the system is reset and re-advanced
    #[arg(default_value_t = 100)]
    loops: usize,

    /// Body whose velocity offsets total momentum
    #[arg(default_value = "sun")]
    reference: String,

    /// Time steps per loop
    #[arg(default_value_t = 20000)]
    iterations: usize,

    #[arg(short, long, value_enum, default_value_t = KernelKind::Optimized)]
    kernel: KernelKind,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let result = match args.kernel {
        KernelKind::Baseline => {
            run_with::<Baseline>(args.loops, &args.reference, args.iterations)
        }
        KernelKind::Optimized => {
            run_with::<Optimized>(args.loops, &args.reference, args.iterations)
        }
    };
    result.with_context(|| format!("nbody {} {} {}", args.loops, args.reference, args.iterations))?;

    Ok(())
}
