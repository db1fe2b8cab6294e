use crate::{potential::PotentialModel, Sites};

pub(super) fn compute<M: PotentialModel>(model: &M, sites: &Sites) -> f64 {
    sites
        .fields()
        .iter()
        .map(|f| model.total_potential(f))
        .sum::<f64>()
        / sites.num_sites() as f64
}
