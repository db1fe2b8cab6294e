use crate::Sites;

/// Average of `½ Σ_i π_i²` over sites
pub(super) fn compute(sites: &Sites) -> f64 {
    0.5 * sites
        .momenta()
        .iter()
        .map(|p| p.values().iter().map(|pi| pi * pi).sum::<f64>())
        .sum::<f64>()
        / sites.num_sites() as f64
}
