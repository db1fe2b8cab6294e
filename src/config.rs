use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    integrators::IntegratorKind,
    potential::{InitialConditions, ModelParameters},
    Error, Result,
};

/// Run configuration, read from JSON.
///
/// Parameter names follow the model's conventions (`mTorsion`, `lambdaT`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub lambda: Option<f64>,
    pub q: Option<f64>,
    #[serde(default = "default_alpha_torsion")]
    pub alpha_torsion: f64,
    #[serde(rename = "mTorsion", default = "default_m_torsion")]
    pub m_torsion: f64,
    #[serde(rename = "lambdaT", default = "default_lambda_t")]
    pub lambda_t: f64,
    pub initial_amplitudes: Option<[f64; 3]>,
    #[serde(default)]
    pub initial_momenta: [f64; 3],

    #[serde(default = "default_dt")]
    pub dt: f64,
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default = "default_integrator")]
    pub integrator: String,
    #[serde(default = "default_num_sites")]
    pub num_sites: usize,
    #[serde(default)]
    pub fluctuation_amplitude: f64,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_output_every")]
    pub output_every: usize,
}

fn default_alpha_torsion() -> f64 {
    ModelParameters::DEFAULT_ALPHA_TORSION
}
fn default_m_torsion() -> f64 {
    ModelParameters::DEFAULT_M_TORSION
}
fn default_lambda_t() -> f64 {
    ModelParameters::DEFAULT_LAMBDA_T
}
fn default_dt() -> f64 {
    0.01
}
fn default_steps() -> usize {
    1000
}
fn default_integrator() -> String {
    IntegratorKind::default().to_string()
}
fn default_num_sites() -> usize {
    1
}
fn default_output_every() -> usize {
    100
}

impl RunConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the run settings. Model values are checked by [`RunConfig::model_parameters`].
    pub fn validate(&self) -> Result<()> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "dt",
                message: format!("should be positive, found {}", self.dt),
            });
        }
        if self.num_sites == 0 {
            return Err(Error::InvalidParameter {
                name: "num_sites",
                message: String::from("should be at least 1"),
            });
        }
        if self.output_every == 0 {
            return Err(Error::InvalidParameter {
                name: "output_every",
                message: String::from("should be at least 1"),
            });
        }
        if !(self.fluctuation_amplitude >= 0.0 && self.fluctuation_amplitude.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "fluctuation_amplitude",
                message: format!("should be non-negative, found {}", self.fluctuation_amplitude),
            });
        }
        self.integrator_kind()?;
        Ok(())
    }

    pub fn integrator_kind(&self) -> Result<IntegratorKind> {
        self.integrator.parse()
    }

    pub fn initial_conditions(&self) -> Result<InitialConditions> {
        let amplitudes = self
            .initial_amplitudes
            .ok_or(Error::MissingParameter("initial_amplitudes"))?;
        Ok(InitialConditions::new(amplitudes).with_momenta(self.initial_momenta))
    }

    pub fn model_parameters(&self) -> Result<ModelParameters> {
        let lambda = self.lambda.ok_or(Error::MissingParameter("lambda"))?;
        let q = self.q.ok_or(Error::MissingParameter("q"))?;
        ModelParameters::with_torsion(
            lambda,
            q,
            self.alpha_torsion,
            self.m_torsion,
            self.lambda_t,
            self.initial_conditions()?,
        )
    }
}
