pub mod lphi4_torsion;
pub mod params;

pub use lphi4_torsion::{LPhi4Torsion, TorsionCoupling};
pub use params::{InitialConditions, ModelParameters, ProgramUnits};

use crate::fields::{Field, FieldSet, NUM_FIELDS};

/// Trait for on-site field potentials
pub trait PotentialModel: Send + Sync {
    /// Contribution of the term attached to `field` to the potential density
    fn potential(&self, field: Field, fields: &FieldSet) -> f64;

    /// Derivative of the total potential density along `field`
    fn potential_derivative(&self, field: Field, fields: &FieldSet) -> f64;

    /// Second derivative along `field`, used as an effective mass squared
    fn potential_second_derivative(&self, field: Field, fields: &FieldSet) -> f64;

    /// Extra momentum term applied by the kick step, if the model has one
    fn momentum_coupling(&self) -> Option<&dyn MomentumCoupling> {
        None
    }

    /// Total potential density, summed over all terms
    fn total_potential(&self, fields: &FieldSet) -> f64 {
        Field::ALL.iter().map(|&f| self.potential(f, fields)).sum()
    }

    /// Effective masses squared of every field at a configuration
    fn masses_squared(&self, fields: &FieldSet) -> [f64; NUM_FIELDS] {
        Field::ALL.map(|f| self.potential_second_derivative(f, fields))
    }
}

/// Momentum-dependent force that has no potential.
///
/// The kick step applies it to the momentum of [`MomentumCoupling::field`]
/// right after that field's gradient update.
pub trait MomentumCoupling: Send + Sync {
    fn field(&self) -> Field;

    /// Contribution to `dπ/dt` given the site's fields and the current momentum
    fn rate(&self, fields: &FieldSet, momentum: f64) -> f64;
}
