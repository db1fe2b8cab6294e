use rand::{rngs::StdRng, SeedableRng};
use rand_distr::Distribution;

use crate::{
    fields::{Field, FieldSet, MomentumSet},
    Error, Result,
};

/// Field values and momenta of every lattice site, in program units
#[derive(Clone, Debug, Default)]
pub struct Sites {
    fields: Vec<FieldSet>,
    momenta: Vec<MomentumSet>,
}
impl Sites {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            momenta: Vec::new(),
        }
    }
    /// `num_sites` copies of one homogeneous configuration
    pub fn homogeneous(num_sites: usize, fields: FieldSet, momenta: MomentumSet) -> Self {
        Self {
            fields: vec![fields; num_sites],
            momenta: vec![momenta; num_sites],
        }
    }
    pub fn num_sites(&self) -> usize {
        self.fields.len()
    }
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
    pub fn fields(&self) -> &[FieldSet] {
        &self.fields
    }
    pub fn momenta(&self) -> &[MomentumSet] {
        &self.momenta
    }
    pub fn site(&self, idx: usize) -> (&FieldSet, &MomentumSet) {
        (&self.fields[idx], &self.momenta[idx])
    }
    pub fn push(&mut self, fields: FieldSet, momenta: MomentumSet) {
        self.fields.push(fields);
        self.momenta.push(momenta);
    }
    pub(crate) fn split_mut(&mut self) -> (&mut [FieldSet], &mut [MomentumSet]) {
        (self.fields.as_mut_slice(), self.momenta.as_mut_slice())
    }

    /// Adds independent gaussian noise of width `amplitude` to every field value
    pub fn add_fluctuations(&mut self, amplitude: f64, seed: u64) -> Result<()> {
        if amplitude == 0.0 {
            return Ok(());
        }
        let dist = rand_distr::Normal::new(0.0, amplitude).map_err(|e| Error::InvalidParameter {
            name: "fluctuation_amplitude",
            message: e.to_string(),
        })?;
        let mut rng = StdRng::seed_from_u64(seed);
        for site in self.fields.iter_mut() {
            for field in Field::ALL {
                site[field] += dist.sample(&mut rng);
            }
        }
        Ok(())
    }
}
