//! Classical evolution of a λφ⁴ model with a spectator field and a torsion
//! field on a lattice of independent sites.
//!
//! The torsion field enters φ0's equation of motion through a
//! momentum-dependent term, `dπ0/dt ⊃ alpha_torsion * T * π0`, applied by the
//! kick step of the velocity-verlet integrator.

pub mod compute;
pub mod config;
pub mod error;
pub mod fields;
pub mod integrators;
pub mod output;
pub mod potential;
pub mod prelude;
pub mod simulation;
pub mod sites;

pub use compute::Compute;
pub use config::RunConfig;
pub use error::{Error, Result};
pub use fields::{Field, FieldSet, MomentumSet, NUM_FIELDS};
pub use integrators::*;
pub use output::{Output, OutputSpec, Value};
pub use potential::{
    InitialConditions, LPhi4Torsion, ModelParameters, MomentumCoupling, PotentialModel,
    TorsionCoupling,
};
pub use simulation::Simulation;
pub use sites::Sites;
