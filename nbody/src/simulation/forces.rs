//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the set that sums its terms,
//! and direct Newtonian gravity

use crate::simulation::states::{System, NVec3};

/// Collection of acceleration terms (gravity, drag, etc)
/// Each term implements [`Acceleration3`] and their contributions are summed
/// into a single acceleration vector per body
#[derive(Default)]
pub struct AccelSet3 {
    terms: Vec<Box<dyn Acceleration3 + Send + Sync>>,
}

impl AccelSet3 {
    /// Constructor
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration3 + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration3 {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity, direct n^2 sum over unordered pairs
///
/// With `eps2 == 0` this is the exact inverse-square law, which is singular
/// for coincident bodies: two bodies at the same position yield `inf`/`NaN`
/// accelerations. A positive `eps2` softens the law to
/// `G m r / (|r|^2 + eps2)^(3/2)` and removes the singularity.
#[allow(non_snake_case)]
pub struct NewtonianGravity3 {
    pub G: f64,
    pub eps2: f64,
}

impl Acceleration3 for NewtonianGravity3 {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x;      // position of body i
            let mi = bi.m;      // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.x - xi;

                // Squared distance, softened when eps2 > 0
                let d2 = r.dot(&r) + self.eps2;

                // 1 / |r|^3, so that G m r / |r|^3 has magnitude G m / |r|^2
                let inv_r3 = (d2 * d2.sqrt()).recip();
                let coef = self.G * inv_r3;

                // Equal and opposite:
                // a_i +=  G * m_j * r / |r|^3
                // a_j += -G * m_i * r / |r|^3
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
