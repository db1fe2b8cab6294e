use crate::{potential::PotentialModel, Sites};

use super::{kinetic_energy, potential_energy};

pub(super) fn compute<M: PotentialModel>(model: &M, sites: &Sites) -> f64 {
    kinetic_energy::compute(sites) + potential_energy::compute(model, sites)
}
