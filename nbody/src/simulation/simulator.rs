//! Benchmark entry point: advance the canonical system `iterations` steps,
//! `loops` times over, each loop restarting from the same normalized state.
//!
//! The reference body is resolved to an index once, and its velocity is set
//! so that total momentum is zero before any stepping. `loops` and
//! `iterations` are unsigned; zero for either is a no-op.

use std::hint::black_box;
use std::marker::PhantomData;

use log::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::simulation::kernel::{DefaultKernel, Kernel};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{solar_system, Planet};
use crate::simulation::states::{Body, System};

pub struct NBodySimulator<K: Kernel = DefaultKernel> {
    initial: System, // momentum already offset
    reference: usize,
    params: Parameters,
    _kernel: PhantomData<fn() -> K>,
}

impl<K: Kernel> NBodySimulator<K> {
    /// Validate `params`, then offset the momentum of `system` through body `reference`
    pub fn new(mut system: System, reference: usize, params: Parameters) -> Result<Self> {
        if system.is_empty() {
            return Err(Error::InvalidParam("system has no bodies".into()));
        }
        params.validate()?;
        system.offset_momentum(reference)?;

        Ok(Self {
            initial: system,
            reference,
            params,
            _kernel: PhantomData,
        })
    }

    /// Canonical Sun + outer planets with the benchmark parameters
    pub fn solar(reference: Planet) -> Result<Self> {
        Self::new(solar_system(), reference.index(), Parameters::default())
    }

    pub fn initial(&self) -> &System {
        &self.initial
    }

    pub fn reference(&self) -> &Body {
        &self.initial.bodies[self.reference]
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// One loop: a fresh copy of the initial state advanced `iterations` steps
    pub fn simulate(&self, iterations: usize) -> System {
        let mut kernel = K::load(self.initial.clone(), &self.params);
        kernel.advance(iterations);
        kernel.into_system()
    }

    /// Final state of every loop, in loop order
    #[cfg(not(feature = "parallel"))]
    pub fn run_loops(&self, loops: usize, iterations: usize) -> Vec<System> {
        (0..loops).map(|_| self.simulate(iterations)).collect()
    }

    /// Final state of every loop, in loop order. Loops are independent and
    /// are forked across the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn run_loops(&self, loops: usize, iterations: usize) -> Vec<System> {
        (0..loops).into_par_iter().map(|_| self.simulate(iterations)).collect()
    }

    /// Benchmark workload: run all loops, report energies at debug level
    /// and discard the results. Returns the sum of the final energies.
    #[cfg(not(feature = "parallel"))]
    pub fn run(&self, loops: usize, iterations: usize) -> f64 {
        let g = self.params.G;
        let e0 = self.initial.energy(g);

        (0..loops)
            .map(|_| self.simulate(iterations).energy(g))
            .enumerate()
            .fold(0.0, |acc, (k, e1)| {
                debug!("loop {k}: energy {e0:.9} -> {e1:.9}");
                acc + black_box(e1)
            })
    }

    /// Benchmark workload: run all loops on the rayon pool, report energies
    /// at debug level and discard the results. Returns the sum of the final
    /// energies.
    #[cfg(feature = "parallel")]
    pub fn run(&self, loops: usize, iterations: usize) -> f64 {
        let g = self.params.G;
        let e0 = self.initial.energy(g);

        let energies: Vec<f64> = (0..loops)
            .into_par_iter()
            .map(|_| self.simulate(iterations).energy(g))
            .collect();
        energies.iter().enumerate().fold(0.0, |acc, (k, &e1)| {
            debug!("loop {k}: energy {e0:.9} -> {e1:.9}");
            acc + black_box(e1)
        })
    }
}

/// Run the benchmark with the build's default kernel.
///
/// `reference` must name a body of the canonical system (`"sun"`, `"jupiter"`,
/// ...), otherwise `Error::UnknownBody` is returned before any work is done.
pub fn run(loops: usize, reference: &str, iterations: usize) -> Result<()> {
    run_with::<DefaultKernel>(loops, reference, iterations)
}

/// Same as [`run`] with an explicit kernel
pub fn run_with<K: Kernel>(loops: usize, reference: &str, iterations: usize) -> Result<()> {
    let planet: Planet = reference.parse()?;
    let sim = NBodySimulator::<K>::solar(planet)?;

    info!(
        "{}: {} loops x {} iterations, momentum offset through {}",
        K::NAME, loops, iterations, planet
    );
    sim.run(loops, iterations);
    Ok(())
}
