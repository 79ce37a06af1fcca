//! Fixed-step time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler driven by `AccelSet3` and `Parameters`

use super::states::{System, NVec3};
use super::forces::AccelSet3;
use super::params::Parameters;

/// Advance the system by one step using semi-implicit Euler.
/// One force evaluation per step; updates velocities, then positions,
/// then `sys.t` in-place with fixed step `dt = params.h0`.
///
/// `acc` is scratch space for the accelerations, resized to the body count.
pub fn symplectic_euler(
    sys: &mut System,
    forces: &AccelSet3,
    params: &Parameters,
    acc: &mut Vec<NVec3>,
) {
    let n = sys.bodies.len();
    if n == 0 { // No bodies, return
        return;
    }
    let dt = params.h0; // time step dt

    // a_n from x_n at time t_n
    acc.resize(n, NVec3::zeros());
    forces.accumulate_accels(sys.t, &*sys, acc);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += dt * *a;
    }

    // Drift with the new velocity: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // advance time: t_n+1 = t_n + dt
    sys.t += dt;
}
