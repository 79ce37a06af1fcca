pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod kernel;
pub mod scenario;
pub mod simulator;
