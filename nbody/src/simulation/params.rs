//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size (`h0`),
//! - gravitational constant and softening (`G`, `eps2`)

use crate::error::{Error, Result};

/// Step size of the benchmark, in years
pub const TIME_STEP: f64 = 0.01;

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub h0: f64, // step size
    pub eps2: f64, // softening, 0 = exact Newtonian
    pub G: f64, // gravitational constant
}

impl Default for Parameters {
    /// Benchmark convention: G = 1 with solar masses in units of 4 pi^2
    fn default() -> Self {
        Self {
            h0: TIME_STEP,
            eps2: 0.0,
            G: 1.0,
        }
    }
}

impl Parameters {
    pub fn with_step(mut self, h0: f64) -> Self {
        self.h0 = h0;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.h0.is_finite() || self.h0 <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "step size must be finite and > 0, got {}",
                self.h0
            )));
        }
        if !self.G.is_finite() {
            return Err(Error::InvalidParam("G must be finite".into()));
        }
        if !self.eps2.is_finite() || self.eps2 < 0.0 {
            return Err(Error::InvalidParam("eps2 must be finite and >= 0".into()));
        }
        Ok(())
    }
}
