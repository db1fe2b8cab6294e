use std::sync::Arc;

use log::{info, warn};

use crate::{
    compute::Compute,
    config::RunConfig,
    fields::Field,
    integrators::{Integrator, Verlet},
    output::{self, OutputSpec, Value},
    potential::{LPhi4Torsion, PotentialModel},
    Result, Sites,
};

/// Leapfrog stability limit on `dt * omega` for a harmonic mode.
const STABILITY_LIMIT: f64 = 2.0;

/// Lattice of sites evolved under one potential model
pub struct Simulation<M>
where
    M: PotentialModel,
{
    model: M,
    sites: Sites,
    integrator: Verlet,
    output: output::Output,
    step: usize,
    time: f64,
}
impl<M> Simulation<M>
where
    M: PotentialModel,
{
    /// Create a new simulation
    pub fn new(model: M, sites: Sites, integrator: Verlet) -> Self {
        assert!(!sites.is_empty(), "Simulation should have at least one site");
        let simulation = Self {
            model,
            sites,
            integrator,
            output: output::Output::new(),
            step: 0,
            time: 0.0,
        };
        simulation.check_timestep();
        simulation
    }

    // Getters
    pub fn model(&self) -> &M {
        &self.model
    }
    pub fn sites(&self) -> &Sites {
        &self.sites
    }
    pub fn integrator(&self) -> &Verlet {
        &self.integrator
    }
    pub fn output(&self) -> &output::Output {
        &self.output
    }
    pub fn timestep(&self) -> f64 {
        Integrator::<M>::timestep(&self.integrator)
    }
    pub fn step(&self) -> usize {
        self.step
    }
    /// Elapsed program time
    pub fn time(&self) -> f64 {
        self.time
    }

    // Setters
    pub fn set_output(&mut self, every: usize, values: Vec<OutputSpec>) {
        self.output = output::Output::with_specs(every, values);
    }

    pub fn compute(&self, spec: &OutputSpec) -> Value {
        match spec {
            OutputSpec::Step => Value::Usize(self.step),
            OutputSpec::Time => Value::Float(self.time),
            OutputSpec::Compute(c) => Value::Float(c.compute(&self.model, &self.sites)),
        }
    }

    /// Evolves the lattice by `num_steps` timesteps, recording output along the way
    pub fn run(&mut self, num_steps: usize) {
        info!(
            "Running {} steps of {} with dt = {} on {} sites",
            num_steps,
            self.integrator.kind(),
            self.timestep(),
            self.sites.num_sites()
        );
        if self.step == 0 {
            self.do_output();
        }
        for _ in 0..num_steps {
            self.integrator.step(&self.model, &mut self.sites);
            self.step += 1;
            self.time += self.timestep();
            if self.step % self.output.every == 0 {
                self.do_output();
            }
        }
    }

    fn do_output(&mut self) {
        let row: Vec<Value> = self.output.values.iter().map(|v| self.compute(v)).collect();
        info!(
            "{}",
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<String>>()
                .join("\t")
        );
        self.output.push(row);
    }

    /// Largest timestep for which every stage of the heaviest mode stays
    /// below the leapfrog limit, or infinity when all modes are massless
    pub fn max_stable_timestep(&self) -> f64 {
        let max_mass = self
            .sites
            .fields()
            .iter()
            .flat_map(|f| self.model.masses_squared(f))
            .map(|m2| m2.abs().sqrt())
            .fold(0.0, f64::max);
        STABILITY_LIMIT / (max_mass * self.integrator.max_stage_weight())
    }

    fn check_timestep(&self) {
        let limit = self.max_stable_timestep();
        if self.timestep() >= limit {
            warn!(
                "dt = {} is above the {} stability limit {} for the heaviest mode",
                self.timestep(),
                self.integrator.kind(),
                limit
            );
        }
    }
}

impl Simulation<LPhi4Torsion> {
    /// Builds the model and a seeded lattice from a run configuration
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        config.validate()?;
        let params = Arc::new(config.model_parameters()?);
        let mut sites = Sites::homogeneous(
            config.num_sites,
            params.initial_fields(),
            params.initial_momenta(),
        );
        sites.add_fluctuations(config.fluctuation_amplitude, config.seed)?;

        let model = LPhi4Torsion::new(params);
        let integrator = Verlet::new(config.integrator_kind()?, config.dt);
        let mut simulation = Simulation::new(model, sites, integrator);

        let mut values = output::Output::new().values;
        values.push(OutputSpec::Compute(Compute::FieldMean(Field::Torsion)));
        simulation.set_output(config.output_every, values);
        Ok(simulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fields::{FieldSet, MomentumSet},
        integrators::IntegratorKind,
        potential::{InitialConditions, ModelParameters},
    };

    fn single_site(alpha_torsion: f64, kind: IntegratorKind, dt: f64) -> Simulation<LPhi4Torsion> {
        // T is frozen: no torsion potential and no initial torsion momentum
        let params = ModelParameters::with_torsion(
            1.0,
            0.0,
            alpha_torsion,
            0.0,
            0.0,
            InitialConditions::new([1.0, 0.0, 1.0]),
        )
        .unwrap();
        let params = Arc::new(params);
        let sites = Sites::homogeneous(1, params.initial_fields(), params.initial_momenta());
        let mut sim = Simulation::new(LPhi4Torsion::new(params), sites, Verlet::new(kind, dt));
        sim.set_output(10, vec![OutputSpec::Step, OutputSpec::Compute(Compute::TotalEnergy)]);
        sim
    }

    fn max_energy_error(sim: &Simulation<LPhi4Torsion>) -> f64 {
        let energies = sim
            .output()
            .column(&OutputSpec::Compute(Compute::TotalEnergy))
            .unwrap();
        energies
            .iter()
            .map(|e| (e - energies[0]).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn clock_and_output_rows() {
        let mut sim = single_site(0.0, IntegratorKind::VV2, 0.01);
        sim.run(100);
        assert_eq!(sim.step(), 100);
        assert!((sim.time() - 1.0).abs() < 1e-12);
        // step 0 plus every 10th step
        assert_eq!(sim.output().rows().len(), 11);
    }

    #[test]
    fn energy_is_conserved_without_coupling() {
        let mut sim = single_site(0.0, IntegratorKind::VV2, 0.01);
        sim.run(1000);
        assert!(max_energy_error(&sim) < 1e-3 * 0.25);
    }

    #[test]
    fn higher_order_conserves_better() {
        let mut vv2 = single_site(0.0, IntegratorKind::VV2, 0.05);
        let mut vv4 = single_site(0.0, IntegratorKind::VV4, 0.05);
        vv2.run(400);
        vv4.run(400);
        assert!(max_energy_error(&vv4) < max_energy_error(&vv2));
    }

    #[test]
    fn torsion_amplifies_phi0() {
        let mut free = single_site(0.0, IntegratorKind::VV2, 0.01);
        let mut pumped = single_site(0.5, IntegratorKind::VV2, 0.01);
        let mut damped = single_site(-0.5, IntegratorKind::VV2, 0.01);
        free.run(500);
        pumped.run(500);
        damped.run(500);

        let energy = |sim: &Simulation<LPhi4Torsion>| {
            Compute::TotalEnergy.compute(sim.model(), sim.sites())
        };
        assert!(energy(&pumped) > 1.1 * energy(&free));
        assert!(energy(&damped) < 0.9 * energy(&free));
        // The torsion field itself does not move
        assert_eq!(pumped.sites().fields()[0][Field::Torsion], 1.0);
    }

    #[test]
    fn sites_evolve_independently() {
        let params = Arc::new(
            ModelParameters::with_torsion(1.0, 1.0, 0.2, 1.0, 0.1, InitialConditions::new([1.0, 0.0, 0.0]))
                .unwrap(),
        );
        let a = (FieldSet::new([1.0, 0.3, 0.5]), MomentumSet::new([0.1, 0.0, -0.2]));
        let b = (FieldSet::new([-0.4, 1.2, 0.0]), MomentumSet::zeros());

        let mut both = Sites::new();
        both.push(a.0, a.1);
        both.push(b.0, b.1);
        let mut alone = Sites::new();
        alone.push(b.0, b.1);

        let verlet = Verlet::new(IntegratorKind::VV4, 0.01);
        let mut sim_both = Simulation::new(LPhi4Torsion::new(params.clone()), both, verlet.clone());
        let mut sim_alone = Simulation::new(LPhi4Torsion::new(params), alone, verlet);
        sim_both.run(50);
        sim_alone.run(50);
        assert_eq!(sim_both.sites().site(1), sim_alone.sites().site(0));
    }

    #[test]
    fn from_config_seeds_lattice() {
        let config = RunConfig::from_json_str(
            r#"{
                "lambda": 4.0, "q": 1.0, "initial_amplitudes": [2.0, 0.0, 1.0],
                "num_sites": 8, "fluctuation_amplitude": 0.01, "seed": 3, "output_every": 5
            }"#,
        )
        .unwrap();
        let mut sim = Simulation::from_config(&config).unwrap();
        assert_eq!(sim.sites().num_sites(), 8);
        let mean_phi0 = Compute::FieldMean(Field::Phi0).compute(sim.model(), sim.sites());
        assert!((mean_phi0 - 1.0).abs() < 0.05);
        sim.run(10);
        assert_eq!(sim.output().rows().len(), 3);
        assert_eq!(sim.output().values.len(), 6);
    }

    #[test]
    fn stability_limit_shrinks_with_stage_weights() {
        // masses squared at [1, 0, 1] with q = 0 and mT = 0: [3, 0, 0]
        let vv2 = single_site(0.0, IntegratorKind::VV2, 0.01);
        assert!((vv2.max_stable_timestep() - 2.0 / 3f64.sqrt()).abs() < 1e-12);
        for kind in [IntegratorKind::VV4, IntegratorKind::VV6] {
            let sim = single_site(0.0, kind, 0.01);
            let ratio = vv2.max_stable_timestep() / sim.max_stable_timestep();
            assert!((ratio - sim.integrator().max_stage_weight()).abs() < 1e-12);
            assert!(ratio > 1.3);
        }
        // dt = 0.8 passes the bare leapfrog bound but not the VV4 one
        let dt = 0.8;
        assert!(dt < single_site(0.0, IntegratorKind::VV2, dt).max_stable_timestep());
        assert!(dt > single_site(0.0, IntegratorKind::VV4, dt).max_stable_timestep());
    }

    #[test]
    #[should_panic(expected = "at least one site")]
    fn empty_lattice_panics() {
        let params =
            Arc::new(ModelParameters::new(1.0, 1.0, InitialConditions::new([1.0, 0.0, 0.0])).unwrap());
        Simulation::new(
            LPhi4Torsion::new(params),
            Sites::new(),
            Verlet::new(IntegratorKind::VV2, 0.1),
        );
    }
}
