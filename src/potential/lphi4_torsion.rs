use std::sync::Arc;

use log::info;
use num_traits::pow;

use super::{ModelParameters, MomentumCoupling, PotentialModel};
use crate::fields::{Field, FieldSet};

/// Torsion-momentum coupling: `dπ0/dt += alpha_torsion * T * π0`
#[derive(Clone, Debug)]
pub struct TorsionCoupling {
    params: Arc<ModelParameters>,
}
impl TorsionCoupling {
    pub fn new(params: Arc<ModelParameters>) -> Self {
        Self { params }
    }
}
impl MomentumCoupling for TorsionCoupling {
    fn field(&self) -> Field {
        Field::Phi0
    }
    fn rate(&self, fields: &FieldSet, momentum: f64) -> f64 {
        self.params.alpha_torsion() * fields[Field::Torsion] * momentum
    }
}

/// λφ⁴ model with a spectator field and a torsion field.
///
/// In program units the potential density is
/// `V = ¼ φ0⁴ + ½ q (φ0 φ1)² + ½ mT² T² + ¼ λT T⁴`,
/// one term per field.
#[derive(Clone, Debug)]
pub struct LPhi4Torsion {
    params: Arc<ModelParameters>,
    coupling: TorsionCoupling,
    initial_potential: f64,
    initial_masses_squared: [f64; 3],
}
impl LPhi4Torsion {
    pub fn new(params: Arc<ModelParameters>) -> Self {
        let mut model = Self {
            coupling: TorsionCoupling::new(params.clone()),
            params,
            initial_potential: 0.0,
            initial_masses_squared: [0.0; 3],
        };
        model.set_initial_potential_and_masses();
        model
    }
    pub fn parameters(&self) -> &ModelParameters {
        &self.params
    }
    /// Potential density at the homogeneous initial configuration
    pub fn initial_potential(&self) -> f64 {
        self.initial_potential
    }
    /// Effective masses squared at the homogeneous initial configuration
    pub fn initial_masses_squared(&self) -> [f64; 3] {
        self.initial_masses_squared
    }

    fn set_initial_potential_and_masses(&mut self) {
        let fields = self.params.initial_fields();
        self.initial_potential = self.total_potential(&fields);
        self.initial_masses_squared = self.masses_squared(&fields);
        info!(
            "lphi4 torsion model: lambda = {}, q = {}, g = {}, alpha_torsion = {}, mTorsion = {}, lambdaT = {}",
            self.params.lambda(),
            self.params.q(),
            self.params.g(),
            self.params.alpha_torsion(),
            self.params.m_torsion(),
            self.params.lambda_t(),
        );
        info!(
            "initial potential = {:e}, masses squared = {:?}",
            self.initial_potential, self.initial_masses_squared
        );
    }
}

impl PotentialModel for LPhi4Torsion {
    fn potential(&self, field: Field, fields: &FieldSet) -> f64 {
        let phi0 = fields[Field::Phi0];
        let phi1 = fields[Field::Phi1];
        let t = fields[Field::Torsion];
        let m_t = self.params.m_torsion();
        match field {
            Field::Phi0 => 0.25 * pow(phi0, 4),
            Field::Phi1 => 0.5 * self.params.q() * pow(phi0 * phi1, 2),
            Field::Torsion => 0.5 * m_t * m_t * pow(t, 2) + 0.25 * self.params.lambda_t() * pow(t, 4),
        }
    }
    fn potential_derivative(&self, field: Field, fields: &FieldSet) -> f64 {
        let phi0 = fields[Field::Phi0];
        let phi1 = fields[Field::Phi1];
        let t = fields[Field::Torsion];
        let q = self.params.q();
        let m_t = self.params.m_torsion();
        match field {
            // The interaction term contributes to both phi0 and phi1
            Field::Phi0 => pow(phi0, 3) + q * phi0 * pow(phi1, 2),
            Field::Phi1 => q * phi1 * pow(phi0, 2),
            Field::Torsion => m_t * m_t * t + self.params.lambda_t() * pow(t, 3),
        }
    }
    fn potential_second_derivative(&self, field: Field, fields: &FieldSet) -> f64 {
        let phi0 = fields[Field::Phi0];
        let phi1 = fields[Field::Phi1];
        let t = fields[Field::Torsion];
        let q = self.params.q();
        let m_t = self.params.m_torsion();
        // Diagonal only: the mixed d2V/dphi0 dphi1 = 2 q phi0 phi1 is not included
        match field {
            Field::Phi0 => 3.0 * pow(phi0, 2) + q * pow(phi1, 2),
            Field::Phi1 => q * pow(phi0, 2),
            Field::Torsion => m_t * m_t + 3.0 * self.params.lambda_t() * pow(t, 2),
        }
    }
    fn momentum_coupling(&self) -> Option<&dyn MomentumCoupling> {
        Some(&self.coupling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potential::InitialConditions;

    fn model(alpha_torsion: f64, m_torsion: f64, lambda_t: f64) -> LPhi4Torsion {
        let params = ModelParameters::with_torsion(
            1.0,
            1.0,
            alpha_torsion,
            m_torsion,
            lambda_t,
            InitialConditions::new([1.0, 0.0, 0.0]),
        )
        .unwrap();
        LPhi4Torsion::new(Arc::new(params))
    }

    #[test]
    fn quartic_scenario() {
        let m = model(0.0, 1.0, 0.0);
        assert_eq!(m.parameters().g(), 1.0);
        let fields = FieldSet::new([1.0, 0.0, 0.0]);
        assert_eq!(m.potential(Field::Phi0, &fields), 0.25);
        assert_eq!(m.potential_derivative(Field::Phi0, &fields), 1.0);
        assert_eq!(m.potential_derivative(Field::Phi1, &fields), 0.0);
        assert_eq!(m.potential_derivative(Field::Torsion, &fields), 0.0);
    }

    #[test]
    fn torsion_scenario() {
        let m = model(0.0, 1.0, 0.5);
        let fields = FieldSet::new([0.0, 0.0, 2.0]);
        assert_eq!(m.potential(Field::Torsion, &fields), 4.0);
        assert_eq!(m.potential_derivative(Field::Torsion, &fields), 6.0);
        assert_eq!(m.potential_second_derivative(Field::Torsion, &fields), 7.0);
    }

    #[test]
    fn interaction_terms() {
        let m = model(0.0, 1.0, 0.0);
        let fields = FieldSet::new([2.0, 3.0, 0.0]);
        // 0.5 * q * (2 * 3)^2
        assert_eq!(m.potential(Field::Phi1, &fields), 18.0);
        assert_eq!(m.potential_derivative(Field::Phi0, &fields), 8.0 + 2.0 * 9.0);
        assert_eq!(m.potential_derivative(Field::Phi1, &fields), 3.0 * 4.0);
        assert_eq!(m.potential_second_derivative(Field::Phi0, &fields), 12.0 + 9.0);
        assert_eq!(m.potential_second_derivative(Field::Phi1, &fields), 4.0);
        assert_eq!(m.total_potential(&fields), 4.0 + 18.0);
    }

    #[test]
    fn torsion_sector_switched_off() {
        let m = model(0.0, 0.0, 0.0);
        for t in [-3.0, -0.5, 0.0, 1.5, 10.0] {
            let fields = FieldSet::new([0.3, -0.7, t]);
            assert_eq!(m.potential(Field::Torsion, &fields), 0.0);
            assert_eq!(m.potential_derivative(Field::Torsion, &fields), 0.0);
        }
    }

    #[test]
    fn initial_masses_from_initial_fields() {
        let m = model(0.0, 2.0, 0.0);
        assert_eq!(m.initial_potential(), 0.25);
        assert_eq!(m.initial_masses_squared(), [3.0, 1.0, 4.0]);
    }

    #[test]
    fn coupling_targets_phi0() {
        let m = model(0.1, 1.0, 0.0);
        let coupling = m.momentum_coupling().unwrap();
        assert_eq!(coupling.field(), Field::Phi0);
        let fields = FieldSet::new([0.0, 0.0, 2.0]);
        assert!((coupling.rate(&fields, 1.0) - 0.2).abs() < 1e-15);
    }
}
