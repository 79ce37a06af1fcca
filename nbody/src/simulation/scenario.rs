//! The canonical benchmark scenario: the Sun and the four outer planets
//!
//! Units are AU, years and solar masses with G folded into the masses
//! (`SOLAR_MASS = 4 pi^2`), so gravity runs with `G = 1`. Initial positions
//! and velocities are the literal constants used by every implementation of
//! this benchmark, which keeps the reference energies reproducible.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::simulation::states::{Body, System, NVec3};

pub const SOLAR_MASS: f64 = 4.0 * PI * PI;
pub const DAYS_PER_YEAR: f64 = 365.24;

/// Bodies of the canonical system, in system order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 5] = [
        Planet::Sun,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "sun",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
        }
    }

    /// Position of this body in [`solar_system`]
    pub fn index(self) -> usize {
        self as usize
    }

    fn body(self) -> Body {
        let (x, v, m) = match self {
            Planet::Sun => (NVec3::zeros(), NVec3::zeros(), 1.0),
            Planet::Jupiter => (
                NVec3::new(
                    4.84143144246472090e+00,
                    -1.16032004402742839e+00,
                    -1.03622044471123109e-01,
                ),
                NVec3::new(
                    1.66007664274403694e-03,
                    7.69901118419740425e-03,
                    -6.90460016972063023e-05,
                ),
                9.54791938424326609e-04,
            ),
            Planet::Saturn => (
                NVec3::new(
                    8.34336671824457987e+00,
                    4.12479856412430479e+00,
                    -4.03523417114321381e-01,
                ),
                NVec3::new(
                    -2.76742510726862411e-03,
                    4.99852801234917238e-03,
                    2.30417297573763929e-05,
                ),
                2.85885980666130812e-04,
            ),
            Planet::Uranus => (
                NVec3::new(
                    1.28943695621391310e+01,
                    -1.51111514016986312e+01,
                    -2.23307578892655734e-01,
                ),
                NVec3::new(
                    2.96460137564761618e-03,
                    2.37847173959480950e-03,
                    -2.96589568540237556e-05,
                ),
                4.36624404335156298e-05,
            ),
            Planet::Neptune => (
                NVec3::new(
                    1.53796971148509165e+01,
                    -2.59193146099879641e+01,
                    1.79258772950371181e-01,
                ),
                NVec3::new(
                    2.68067772490389322e-03,
                    1.62824170038242295e-03,
                    -9.51592254519715870e-05,
                ),
                5.15138902046611451e-05,
            ),
        };
        // velocities are tabulated in AU/day, masses in solar masses
        Body::new(self.name(), x, v * DAYS_PER_YEAR, m * SOLAR_MASS)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Planet::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::UnknownBody(s.to_string()))
    }
}

/// Sun, Jupiter, Saturn, Uranus, Neptune at t = 0, momentum not yet offset
pub fn solar_system() -> System {
    System::new(Planet::ALL.into_iter().map(Planet::body).collect())
}
