use crate::{
    fields::{FieldSet, MomentumSet, NUM_FIELDS},
    Error, Result,
};

/// Homogeneous initial values used to seed every site, in physical units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialConditions {
    pub amplitudes: [f64; NUM_FIELDS],
    pub momenta: [f64; NUM_FIELDS],
}
impl InitialConditions {
    /// Initial amplitudes with vanishing momenta
    pub fn new(amplitudes: [f64; NUM_FIELDS]) -> Self {
        Self {
            amplitudes,
            momenta: [0.0; NUM_FIELDS],
        }
    }
    pub fn with_momenta(mut self, momenta: [f64; NUM_FIELDS]) -> Self {
        self.momenta = momenta;
        self
    }
}

/// Conversion between physical and program variables.
///
/// With `alpha = 1` the program variables are
/// `φ̃ = φ / f*`, `π̃ = π / (f* ω*)` and `t̃ = ω* t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgramUnits {
    alpha: f64,
    f_star: f64,
    omega_star: f64,
}
impl ProgramUnits {
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
    pub fn f_star(&self) -> f64 {
        self.f_star
    }
    pub fn omega_star(&self) -> f64 {
        self.omega_star
    }
    pub fn field_to_program(&self, value: f64) -> f64 {
        value / self.f_star
    }
    pub fn momentum_to_program(&self, value: f64) -> f64 {
        value / (self.f_star * self.omega_star)
    }
    pub fn time_to_physical(&self, t: f64) -> f64 {
        t / self.omega_star
    }
}

/// Immutable model configuration, shared by the potential and the
/// momentum coupling.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelParameters {
    lambda: f64,
    q: f64,
    g: f64,
    alpha_torsion: f64,
    m_torsion: f64,
    lambda_t: f64,
    initial: InitialConditions,
    units: ProgramUnits,
}
impl ModelParameters {
    pub const DEFAULT_ALPHA_TORSION: f64 = 0.0;
    pub const DEFAULT_M_TORSION: f64 = 1.0;
    pub const DEFAULT_LAMBDA_T: f64 = 0.0;

    /// Parameters with the torsion sector at its defaults
    pub fn new(lambda: f64, q: f64, initial: InitialConditions) -> Result<Self> {
        Self::with_torsion(
            lambda,
            q,
            Self::DEFAULT_ALPHA_TORSION,
            Self::DEFAULT_M_TORSION,
            Self::DEFAULT_LAMBDA_T,
            initial,
        )
    }

    pub fn with_torsion(
        lambda: f64,
        q: f64,
        alpha_torsion: f64,
        m_torsion: f64,
        lambda_t: f64,
        initial: InitialConditions,
    ) -> Result<Self> {
        check_finite("lambda", lambda)?;
        check_finite("q", q)?;
        check_finite("alpha_torsion", alpha_torsion)?;
        check_finite("mTorsion", m_torsion)?;
        check_finite("lambdaT", lambda_t)?;
        if initial
            .amplitudes
            .iter()
            .chain(initial.momenta.iter())
            .any(|v| !v.is_finite())
        {
            return Err(Error::InvalidParameter {
                name: "initial_amplitudes",
                message: String::from("initial values should be finite"),
            });
        }
        if lambda <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "lambda",
                message: format!("should be positive, found {}", lambda),
            });
        }
        if q < 0.0 {
            return Err(Error::InvalidParameter {
                name: "q",
                message: format!("should be non-negative, found {}", q),
            });
        }
        let f_star = initial.amplitudes[0];
        if f_star == 0.0 {
            return Err(Error::InvalidParameter {
                name: "initial_amplitudes",
                message: String::from("the phi0 amplitude sets f* and should be non-zero"),
            });
        }

        Ok(Self {
            lambda,
            q,
            g: (q * lambda).sqrt(),
            alpha_torsion,
            m_torsion,
            lambda_t,
            initial,
            units: ProgramUnits {
                alpha: 1.0,
                f_star,
                omega_star: lambda.sqrt() * f_star,
            },
        })
    }

    // Getters
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
    pub fn q(&self) -> f64 {
        self.q
    }
    pub fn g(&self) -> f64 {
        self.g
    }
    pub fn alpha_torsion(&self) -> f64 {
        self.alpha_torsion
    }
    pub fn m_torsion(&self) -> f64 {
        self.m_torsion
    }
    pub fn lambda_t(&self) -> f64 {
        self.lambda_t
    }
    pub fn initial_conditions(&self) -> &InitialConditions {
        &self.initial
    }
    pub fn units(&self) -> &ProgramUnits {
        &self.units
    }

    /// Initial field values in program units
    pub fn initial_fields(&self) -> FieldSet {
        FieldSet::new(self.initial.amplitudes.map(|v| self.units.field_to_program(v)))
    }
    /// Initial momenta in program units
    pub fn initial_momenta(&self) -> MomentumSet {
        MomentumSet::new(self.initial.momenta.map(|v| self.units.momentum_to_program(v)))
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            message: format!("should be finite, found {}", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants() {
        let params = ModelParameters::new(4.0, 0.5, InitialConditions::new([2.0, 1.0, -4.0])).unwrap();
        assert!((params.g() * params.g() - params.q() * params.lambda()).abs() < 1e-14);
        assert_eq!(params.units().alpha(), 1.0);
        assert_eq!(params.units().f_star(), 2.0);
        assert_eq!(params.units().omega_star(), 4.0);
        assert_eq!(params.initial_fields().values(), &[1.0, 0.5, -2.0]);
    }

    #[test]
    fn torsion_defaults() {
        let params = ModelParameters::new(1.0, 1.0, InitialConditions::new([1.0, 0.0, 0.0])).unwrap();
        assert_eq!(params.alpha_torsion(), 0.0);
        assert_eq!(params.m_torsion(), 1.0);
        assert_eq!(params.lambda_t(), 0.0);
        assert_eq!(params.initial_momenta(), MomentumSet::zeros());
    }

    #[test]
    fn momenta_are_rescaled() {
        let initial = InitialConditions::new([2.0, 0.0, 0.0]).with_momenta([8.0, 0.0, 4.0]);
        let params = ModelParameters::new(4.0, 1.0, initial).unwrap();
        // f* ω* = 2 * 4
        assert_eq!(params.initial_momenta().values(), &[1.0, 0.0, 0.5]);
        assert_eq!(params.units().time_to_physical(8.0), 2.0);
    }

    #[test]
    fn rejects_invalid_values() {
        let initial = InitialConditions::new([1.0, 0.0, 0.0]);
        assert!(matches!(
            ModelParameters::new(0.0, 1.0, initial),
            Err(Error::InvalidParameter { name: "lambda", .. })
        ));
        assert!(matches!(
            ModelParameters::new(1.0, -1.0, initial),
            Err(Error::InvalidParameter { name: "q", .. })
        ));
        assert!(matches!(
            ModelParameters::new(1.0, 1.0, InitialConditions::new([0.0, 1.0, 1.0])),
            Err(Error::InvalidParameter {
                name: "initial_amplitudes",
                ..
            })
        ));
        assert!(matches!(
            ModelParameters::with_torsion(1.0, 1.0, f64::NAN, 1.0, 0.0, initial),
            Err(Error::InvalidParameter {
                name: "alpha_torsion",
                ..
            })
        ));
    }
}
