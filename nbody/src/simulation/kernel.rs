//! Interchangeable time-stepping kernels
//!
//! A [`Kernel`] takes ownership of a `System`, advances it a number of
//! symplectic Euler steps and hands it back. Implementations are picked at
//! compile time through a type parameter:
//! - [`Baseline`]  – `AccelSet3` + `symplectic_euler` over nalgebra vectors
//! - [`Optimized`] – flattened arrays with a precomputed pair list,
//!   no dynamic dispatch and no per-step allocation
//!
//! `DefaultKernel` is `Optimized` when the crate is built with the
//! `optimized` feature and `Baseline` otherwise.

use crate::simulation::forces::{AccelSet3, NewtonianGravity3};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{System, NVec3};

#[cfg(feature = "optimized")]
pub type DefaultKernel = Optimized;
#[cfg(not(feature = "optimized"))]
pub type DefaultKernel = Baseline;

pub trait Kernel: Sized {
    /// Short name used in logs and reports
    const NAME: &'static str;

    fn load(system: System, params: &Parameters) -> Self;

    /// Advance `iterations` steps of `params.h0`
    fn advance(&mut self, iterations: usize);

    fn into_system(self) -> System;
}

/// General code path through the acceleration-term machinery
pub struct Baseline {
    sys: System,
    forces: AccelSet3,
    params: Parameters,
    acc: Vec<NVec3>, // scratch accelerations, reused across steps
}

impl Kernel for Baseline {
    const NAME: &'static str = "nbody";

    fn load(system: System, params: &Parameters) -> Self {
        let forces = AccelSet3::new().with(NewtonianGravity3 {
            G: params.G,
            eps2: params.eps2,
        });
        let n = system.len();
        Self {
            sys: system,
            forces,
            params: *params,
            acc: vec![NVec3::zeros(); n],
        }
    }

    fn advance(&mut self, iterations: usize) {
        for _ in 0..iterations {
            symplectic_euler(&mut self.sys, &self.forces, &self.params, &mut self.acc);
        }
    }

    fn into_system(self) -> System {
        self.sys
    }
}

/// Structure-of-arrays kernel specialised for a small, fixed body count
pub struct Optimized {
    template: System, // names and masses, written back in `into_system`
    x: Vec<[f64; 3]>,
    v: Vec<[f64; 3]>,
    m: Vec<f64>,
    pairs: Vec<(usize, usize)>,
    dt: f64,
    g: f64,
    eps2: f64,
    t: f64,
}

impl Kernel for Optimized {
    const NAME: &'static str = "nbody_opt";

    fn load(system: System, params: &Parameters) -> Self {
        let n = system.len();
        let x = system.bodies.iter().map(|b| [b.x.x, b.x.y, b.x.z]).collect();
        let v = system.bodies.iter().map(|b| [b.v.x, b.v.y, b.v.z]).collect();
        let m = system.bodies.iter().map(|b| b.m).collect();
        let pairs = (0..n).flat_map(|i| ((i + 1)..n).map(move |j| (i, j))).collect();
        let t = system.t;

        Self {
            template: system,
            x,
            v,
            m,
            pairs,
            dt: params.h0,
            g: params.G,
            eps2: params.eps2,
            t,
        }
    }

    fn advance(&mut self, iterations: usize) {
        let dt = self.dt;
        let dt_g = dt * self.g;
        let (x, v, m) = (&mut self.x, &mut self.v, &self.m);

        for _ in 0..iterations {
            for &(i, j) in &self.pairs {
                let [xi, yi, zi] = x[i];
                let [xj, yj, zj] = x[j];
                let (dx, dy, dz) = (xi - xj, yi - yj, zi - zj);

                let d2 = dx * dx + dy * dy + dz * dz + self.eps2;
                let mag = dt_g / (d2 * d2.sqrt());
                let bim = m[i] * mag;
                let bjm = m[j] * mag;

                v[i][0] -= dx * bjm;
                v[i][1] -= dy * bjm;
                v[i][2] -= dz * bjm;
                v[j][0] += dx * bim;
                v[j][1] += dy * bim;
                v[j][2] += dz * bim;
            }

            for (p, q) in x.iter_mut().zip(v.iter()) {
                p[0] += dt * q[0];
                p[1] += dt * q[1];
                p[2] += dt * q[2];
            }

            self.t += dt;
        }
    }

    fn into_system(mut self) -> System {
        for ((b, p), q) in self.template.bodies.iter_mut().zip(&self.x).zip(&self.v) {
            b.x = NVec3::new(p[0], p[1], p[2]);
            b.v = NVec3::new(q[0], q[1], q[2]);
        }
        self.template.t = self.t;
        self.template
    }
}
