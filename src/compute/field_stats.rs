use crate::{fields::Field, Sites};

pub(super) fn mean(sites: &Sites, field: Field) -> f64 {
    sites.fields().iter().map(|f| f[field]).sum::<f64>() / sites.num_sites() as f64
}

pub(super) fn variance(sites: &Sites, field: Field) -> f64 {
    let mean = mean(sites, field);
    sites
        .fields()
        .iter()
        .map(|f| (f[field] - mean) * (f[field] - mean))
        .sum::<f64>()
        / sites.num_sites() as f64
}
