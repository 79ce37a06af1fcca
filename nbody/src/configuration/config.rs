//! Configuration for the benchmark harness, loadable from YAML.
//!
//! Every field is optional in the file; missing fields take the values of
//! the classic benchmark run (3 repetitions of `100 sun 20000`).
//!
//! # YAML format
//!
//! ```yaml
//! reps: 3                 # timed repetitions per kernel, averaged
//! variant: "nbody_opt"    # name of the optimized variant, used for the report file
//! loops: 100              # workload multiplier passed to the kernel
//! reference: "sun"        # body whose velocity offsets total momentum
//! iterations: 20000       # time steps per loop
//! output_dir: "."         # where `<variant>_results.txt` is written
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub reps: u32,
    pub variant: String,
    pub loops: usize,
    pub reference: String,
    pub iterations: usize,
    pub output_dir: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            reps: 3,
            variant: "nbody_opt".to_string(),
            loops: 100,
            reference: "sun".to_string(),
            iterations: 20000,
            output_dir: PathBuf::from("."),
        }
    }
}

impl BenchConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: BenchConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: BenchConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.reps == 0 {
            return Err(Error::InvalidParam("reps must be > 0".into()));
        }
        if self.variant.is_empty() {
            return Err(Error::InvalidParam("variant name must not be empty".into()));
        }
        Ok(())
    }

    /// `<output_dir>/<variant>_results.txt`
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}_results.txt", self.variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = BenchConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, BenchConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let yaml = "reps: 5\nvariant: nbody_2\niterations: 100\n";
        let cfg = BenchConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.reps, 5);
        assert_eq!(cfg.variant, "nbody_2");
        assert_eq!(cfg.iterations, 100);
        assert_eq!(cfg.loops, 100);
        assert_eq!(cfg.report_path(), PathBuf::from("./nbody_2_results.txt"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(matches!(BenchConfig::from_yaml_str("repz: 5\n"), Err(Error::Yaml(_))));
    }

    #[test]
    fn zero_reps_is_rejected() {
        assert!(matches!(BenchConfig::from_yaml_str("reps: 0\n"), Err(Error::InvalidParam(_))));
    }
}
