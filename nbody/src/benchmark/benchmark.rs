//! Timing harness comparing two kernels on the same workload
//!
//! The harness owns its timer and report state; the simulator knows nothing
//! about it. Each kernel runs `reps` times with the configured
//! `(loops, reference, iterations)` and the mean wall-clock time is kept.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::configuration::config::BenchConfig;
use crate::error::{Error, Result};
use crate::simulation::kernel::Kernel;
use crate::simulation::simulator::run_with;

/// Mean wall-clock seconds of `reps` calls to `f`
pub fn time_average<F>(reps: u32, mut f: F) -> Result<f64>
where
    F: FnMut() -> Result<()>,
{
    let t0 = Instant::now();
    for _ in 0..reps {
        f()?;
    }
    Ok(t0.elapsed().as_secs_f64() / f64::from(reps.max(1)))
}

/// Averaged runtimes of a baseline ("pre") and an optimized ("post") kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub variant: String,
    pub reps: u32,
    pub pre_secs: f64,
    pub post_secs: f64,
}

impl Comparison {
    /// Rejects runtimes that would not give a finite speedup
    pub fn new(
        variant: impl Into<String>,
        reps: u32,
        pre_secs: f64,
        post_secs: f64,
    ) -> Result<Self> {
        if !pre_secs.is_finite() || pre_secs < 0.0 {
            return Err(Error::InvalidParam(format!(
                "pre-optimized runtime {pre_secs}s is not valid"
            )));
        }
        if !post_secs.is_finite() || post_secs <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "post-optimized runtime {post_secs}s is too short to time"
            )));
        }
        Ok(Self {
            variant: variant.into(),
            reps,
            pre_secs,
            post_secs,
        })
    }

    /// pre / post
    pub fn speedup(&self) -> f64 {
        self.pre_secs / self.post_secs
    }

    /// Write the report to `path`, four lines, no trailing newline
    pub fn write_report(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results of {} vs nbody, average of {} runs:", self.variant, self.reps)?;
        writeln!(f, "Pre-optimized runtime: {:.2}s", self.pre_secs)?;
        writeln!(f, "Post-optimized runtime: {:.2}s", self.post_secs)?;
        write!(f, "Relative speedup: {:.2}x", self.speedup())
    }
}

/// Time `Pre` against `Post` on the workload described by `cfg`
pub fn compare<Pre: Kernel, Post: Kernel>(cfg: &BenchConfig) -> Result<Comparison> {
    cfg.validate()?;

    info!("timing {} ({} reps)", Pre::NAME, cfg.reps);
    let pre_secs = time_average(cfg.reps, || {
        run_with::<Pre>(cfg.loops, &cfg.reference, cfg.iterations)
    })?;

    info!("timing {} ({} reps)", Post::NAME, cfg.reps);
    let post_secs = time_average(cfg.reps, || {
        run_with::<Post>(cfg.loops, &cfg.reference, cfg.iterations)
    })?;

    Comparison::new(cfg.variant.clone(), cfg.reps, pre_secs, post_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::kernel::{Baseline, Optimized};

    fn sample() -> Comparison {
        Comparison {
            variant: "nbody_opt".to_string(),
            reps: 3,
            pre_secs: 84.123,
            post_secs: 11.147,
        }
    }

    #[test]
    fn report_has_four_formatted_lines() {
        let report = sample().to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Results of nbody_opt vs nbody, average of 3 runs:",
                "Pre-optimized runtime: 84.12s",
                "Post-optimized runtime: 11.15s",
                "Relative speedup: 7.55x",
            ]
        );
        assert!(!report.ends_with('\n'));
    }

    #[test]
    fn zero_optimized_runtime_is_rejected() {
        let zero = Comparison::new("nbody_opt", 3, 1.0, 0.0);
        assert!(matches!(zero, Err(Error::InvalidParam(_))));
        let nan = Comparison::new("nbody_opt", 3, f64::NAN, 1.0);
        assert!(matches!(nan, Err(Error::InvalidParam(_))));

        let cmp = Comparison::new("nbody_opt", 3, 1.0, 0.5).unwrap();
        assert!(cmp.to_string().ends_with("Relative speedup: 2.00x"));
    }

    #[test]
    fn report_is_written_to_file() {
        let dir = std::env::temp_dir().join(format!("nbody-report-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("nbody_opt_results.txt");

        sample().write_report(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), sample().to_string());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn compare_times_both_kernels() {
        let cfg = BenchConfig {
            reps: 1,
            loops: 2,
            iterations: 10,
            ..BenchConfig::default()
        };
        let cmp = compare::<Baseline, Optimized>(&cfg).unwrap();
        assert_eq!(cmp.reps, 1);
        assert_eq!(cmp.variant, "nbody_opt");
        assert!(cmp.pre_secs >= 0.0 && cmp.post_secs >= 0.0);
    }

    #[test]
    fn compare_propagates_unknown_reference() {
        let cfg = BenchConfig {
            reps: 1,
            loops: 1,
            iterations: 1,
            reference: "vulcan".to_string(),
            ..BenchConfig::default()
        };
        assert!(matches!(compare::<Baseline, Optimized>(&cfg), Err(Error::UnknownBody(_))));
    }
}
