mod verlet;
pub use verlet::{kick_site, Verlet};

use std::{fmt::Display, str::FromStr};

use crate::{potential::PotentialModel, Error, Sites};

/// Simulation integrator
pub trait Integrator<M: PotentialModel> {
    /// Program-time step
    fn timestep(&self) -> f64;

    /// Advances every site by one full timestep
    fn step(&self, model: &M, sites: &mut Sites);
}

/// Symmetric velocity-verlet compositions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorKind {
    #[default]
    VV2,
    VV4,
    VV6,
}
impl IntegratorKind {
    pub fn order(&self) -> usize {
        match self {
            IntegratorKind::VV2 => 2,
            IntegratorKind::VV4 => 4,
            IntegratorKind::VV6 => 6,
        }
    }
    /// Distinct stage weights, outermost first. The last one is the central stage.
    pub fn weights(&self) -> Vec<f64> {
        match self {
            IntegratorKind::VV2 => vec![1.0],
            IntegratorKind::VV4 => {
                let cbrt2 = 2f64.cbrt();
                let w1 = 1.0 / (2.0 - cbrt2);
                let w0 = -cbrt2 / (2.0 - cbrt2);
                vec![w1, w0]
            }
            // Yoshida (1990), solution A: w3, w2, w1, w0
            IntegratorKind::VV6 => vec![
                0.784_513_610_477_557_3,
                0.235_573_213_359_358_13,
                -1.177_679_984_178_871,
                1.315_186_320_683_911_2,
            ],
        }
    }
}
impl FromStr for IntegratorKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_uppercase().as_str() {
            "VV2" => Ok(IntegratorKind::VV2),
            "VV4" => Ok(IntegratorKind::VV4),
            "VV6" => Ok(IntegratorKind::VV6),
            _ => Err(Error::UnknownIntegrator(String::from(s))),
        }
    }
}
impl Display for IntegratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IntegratorKind::VV2 => "VV2",
            IntegratorKind::VV4 => "VV4",
            IntegratorKind::VV6 => "VV6",
        };
        String::from(s).fmt(f)
    }
}
