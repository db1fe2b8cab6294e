use crate::{fields::Field, potential::PotentialModel, Sites};

mod field_stats;
mod kinetic_energy;
mod potential_energy;
mod total_energy;

/// Lattice-averaged observables
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Compute {
    KineticEnergy,
    PotentialEnergy,
    TotalEnergy,
    FieldMean(Field),
    FieldVariance(Field),
}
impl Compute {
    pub fn name(&self) -> String {
        match self {
            Compute::KineticEnergy => String::from("KE"),
            Compute::PotentialEnergy => String::from("PE"),
            Compute::TotalEnergy => String::from("TotalE"),
            Compute::FieldMean(f) => format!("<{}>", f.name()),
            Compute::FieldVariance(f) => format!("var({})", f.name()),
        }
    }
    pub fn compute<M: PotentialModel>(&self, model: &M, sites: &Sites) -> f64 {
        if sites.is_empty() {
            return 0.0;
        }
        match self {
            Compute::KineticEnergy => kinetic_energy::compute(sites),
            Compute::PotentialEnergy => potential_energy::compute(model, sites),
            Compute::TotalEnergy => total_energy::compute(model, sites),
            Compute::FieldMean(f) => field_stats::mean(sites, *f),
            Compute::FieldVariance(f) => field_stats::variance(sites, *f),
        }
    }
}
