use log::debug;
use rayon::prelude::*;

use super::*;
use crate::{
    fields::{Field, FieldSet, MomentumSet},
    potential::MomentumCoupling,
};

/// Momentum kick of one site over a half-step of width `half_step`.
///
/// Every momentum receives `-half_step * dV/dφ_i`. When the model registers a
/// [`MomentumCoupling`], its field then also receives `half_step * rate`,
/// evaluated with the momentum that already includes the gradient update and
/// with the same field snapshot.
pub fn kick_site<M>(model: &M, fields: &FieldSet, momenta: &mut MomentumSet, half_step: f64)
where
    M: PotentialModel + ?Sized,
{
    let coupling: Option<&dyn MomentumCoupling> = model.momentum_coupling();
    for field in Field::ALL {
        momenta[field] -= half_step * model.potential_derivative(field, fields);

        if let Some(coupling) = coupling {
            if coupling.field() == field {
                let pi = momenta[field];
                momenta[field] += half_step * coupling.rate(fields, pi);
            }
        }
    }
}

/// Velocity-verlet integrator of order 2, 4 or 6
#[derive(Clone, Debug)]
pub struct Verlet {
    kind: IntegratorKind,
    ws: Vec<f64>,
    timestep: f64,
}

impl Verlet {
    pub fn new(kind: IntegratorKind, timestep: f64) -> Self {
        assert!(
            timestep >= 0.0 && timestep.is_finite(),
            "Timestep should be non-negative and finite, found {}",
            timestep,
        );
        Self {
            kind,
            ws: kind.weights(),
            timestep,
        }
    }
    pub fn kind(&self) -> IntegratorKind {
        self.kind
    }
    pub fn order(&self) -> usize {
        self.kind.order()
    }

    /// Weight of every kick-drift-kick stage in one timestep
    pub fn stage_weights(&self) -> impl Iterator<Item = f64> + '_ {
        let n = self.ws.len();
        let stages = (n - 1) * 2 + 1;
        (0..stages).map(move |i| self.ws[if i < n { i } else { stages - i - 1 }])
    }
    /// Largest stage weight magnitude; a stage drifts by up to this many timesteps
    pub fn max_stage_weight(&self) -> f64 {
        self.ws.iter().map(|w| w.abs()).fold(0.0, f64::max)
    }

    /// Steps the momenta of all sites by a weighted half timestep
    fn kick<M: PotentialModel>(&self, model: &M, sites: &mut Sites, w: f64) {
        let half_step = w * self.timestep / 2.0;
        let (fields, momenta) = sites.split_mut();
        fields
            .par_iter()
            .zip(momenta.par_iter_mut())
            .for_each(|(f, p)| kick_site(model, f, p, half_step));
    }

    /// Steps the fields of all sites by a weighted timestep
    fn drift(&self, sites: &mut Sites, w: f64) {
        let step = w * self.timestep;
        let (fields, momenta) = sites.split_mut();
        fields
            .par_iter_mut()
            .zip(momenta.par_iter())
            .for_each(|(f, p)| {
                for field in Field::ALL {
                    f[field] += step * p[field];
                }
            });
    }
}

impl<M: PotentialModel> Integrator<M> for Verlet {
    fn timestep(&self) -> f64 {
        self.timestep
    }
    fn step(&self, model: &M, sites: &mut Sites) {
        for w in self.stage_weights() {
            debug!("{} stage, w = {}", self.kind, w);
            self.kick(model, sites, w);
            self.drift(sites, w);
            self.kick(model, sites, w);
        }
    }
}
