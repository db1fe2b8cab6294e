pub use super::compute::Compute;
pub use super::config::RunConfig;
pub use super::fields::{Field, FieldSet, MomentumSet};
pub use super::integrators::{Integrator, IntegratorKind, Verlet};
pub use super::output::OutputSpec;
pub use super::potential::{LPhi4Torsion, ModelParameters, MomentumCoupling, PotentialModel};
pub use super::simulation::Simulation;
pub use super::sites::Sites;
