use std::io;

use tlat::prelude::*;

const CONFIG: &str = r#"{
    "lambda": 1.0,
    "q": 1.0,
    "alpha_torsion": 0.05,
    "mTorsion": 1.0,
    "lambdaT": 0.1,
    "initial_amplitudes": [1.0, 0.1, 0.5],
    "integrator": "VV4",
    "dt": 0.01,
    "steps": 2000,
    "num_sites": 64,
    "fluctuation_amplitude": 0.001,
    "seed": 42,
    "output_every": 200
}"#;

fn main() -> tlat::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::from_json_str(CONFIG)?,
    };

    let mut simulation = Simulation::from_config(&config)?;
    println!(
        "Initial masses squared: {:?}",
        simulation.model().initial_masses_squared()
    );

    simulation.run(config.steps);
    simulation.output().write_table(&mut io::stdout())
}
