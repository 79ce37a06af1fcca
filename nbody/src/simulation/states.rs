//! Core state types for the N-body simulation.
//!
//! - `Body` holds a named point mass with 3D position `x` and velocity `v`
//! - `System` holds the ordered list of bodies and the current simulation time `t`
//!
//! Only `x`, `v` and `t` change while a system is advanced; masses and the
//! body count are fixed for the lifetime of a `System`.

use nalgebra::Vector3;

use crate::error::{Error, Result};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String, // identifier used to pick the reference body
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
}

impl Body {
    pub fn new(name: impl Into<String>, x: NVec3, v: NVec3, m: f64) -> Self {
        Self { name: name.into(), x, v, m }
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, order is fixed
    pub t: f64, // time
}

impl System {
    /// System at t = 0
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Resolve a body name to its index in `bodies`
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.bodies
            .iter()
            .position(|b| b.name == name)
            .ok_or_else(|| Error::UnknownBody(name.to_string()))
    }

    /// Total linear momentum, sum of m * v over all bodies
    pub fn momentum(&self) -> NVec3 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Set the velocity of body `reference` so that total momentum is zero:
    /// v_ref = -(sum over the other bodies of m * v) / m_ref
    pub fn offset_momentum(&mut self, reference: usize) -> Result<()> {
        let n = self.bodies.len();
        if reference >= n {
            return Err(Error::InvalidParam(format!(
                "reference index {reference} out of range for {n} bodies"
            )));
        }

        let m_ref = self.bodies[reference].m;
        if !m_ref.is_finite() || m_ref == 0.0 {
            return Err(Error::InvalidParam(format!(
                "reference body {:?} must have a finite non-zero mass",
                self.bodies[reference].name
            )));
        }

        let p_others: NVec3 = self
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != reference)
            .map(|(_, b)| b.momentum())
            .sum();

        self.bodies[reference].v = -p_others / m_ref;
        Ok(())
    }

    /// Kinetic energy, sum of m |v|^2 / 2
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
    }

    /// Gravitational potential energy, sum over unordered pairs of -G m_i m_j / |x_i - x_j|
    pub fn potential_energy(&self, g: f64) -> f64 {
        let mut e = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                let d = (bi.x - bj.x).norm();
                e -= g * bi.m * bj.m / d;
            }
        }
        e
    }

    /// Kinetic + potential energy
    pub fn energy(&self, g: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> System {
        System::new(vec![
            Body::new("a", NVec3::zeros(), NVec3::new(0.0, 1.0, 0.0), 2.0),
            Body::new("b", NVec3::new(2.0, 0.0, 0.0), NVec3::new(0.0, 3.0, 0.0), 1.0),
        ])
    }

    #[test]
    fn offset_momentum_zeroes_total() {
        let mut sys = pair();
        sys.offset_momentum(0).unwrap();
        assert!(sys.momentum().norm() < 1e-14);
        assert_eq!(sys.bodies[0].v, NVec3::new(0.0, -1.5, 0.0));
        // only the reference body changes
        assert_eq!(sys.bodies[1].v, NVec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn offset_momentum_rejects_bad_index() {
        let mut sys = pair();
        assert!(matches!(sys.offset_momentum(5), Err(Error::InvalidParam(_))));
    }

    #[test]
    fn offset_momentum_rejects_massless_reference() {
        let mut sys = pair();
        sys.bodies[1].m = 0.0;
        assert!(matches!(sys.offset_momentum(1), Err(Error::InvalidParam(_))));
    }

    #[test]
    fn index_of_unknown_name_fails() {
        let sys = pair();
        assert_eq!(sys.index_of("b").unwrap(), 1);
        assert!(matches!(sys.index_of("c"), Err(Error::UnknownBody(name)) if name == "c"));
    }

    #[test]
    fn energy_of_static_pair() {
        let mut sys = pair();
        for b in sys.bodies.iter_mut() {
            b.v = NVec3::zeros();
        }
        assert_eq!(sys.kinetic_energy(), 0.0);
        // -G m1 m2 / d = -1 * 2 * 1 / 2
        assert!((sys.energy(1.0) + 1.0).abs() < 1e-15);
    }
}
