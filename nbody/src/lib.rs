pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::params::{Parameters, TIME_STEP};
pub use simulation::forces::{Acceleration3, AccelSet3, NewtonianGravity3};
pub use simulation::integrator::symplectic_euler;
pub use simulation::kernel::{Kernel, Baseline, Optimized, DefaultKernel};
pub use simulation::scenario::{solar_system, Planet, SOLAR_MASS, DAYS_PER_YEAR};
pub use simulation::simulator::{NBodySimulator, run, run_with};

pub use configuration::config::BenchConfig;

pub use benchmark::benchmark::{compare, time_average, Comparison};

pub use error::{Error, Result};
