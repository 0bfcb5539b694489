use std::env;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use contourkit::configuration::Configuration;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(config_path) = env::args().nth(1) else {
        eprintln!("usage: contourkit <config.json>");
        return ExitCode::FAILURE;
    };

    let config = match Configuration::from_reader(&config_path) {
        Ok(config) => config,
        Err(err) => {
            error!(path = %config_path, "{err}");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = config.evaluate();
    println!("function:        {}", config.function().name());
    println!("points:          {}", config.points().len());
    println!("integral:        {:.5}", result.integral);
    println!("integral / 2πi:  {:.5}", result.over_two_pi_i);
    let singularities = config.singularities_in_bounds();
    if singularities.is_empty() {
        println!("singularities:   none in bounding box");
    } else {
        let listed: Vec<String> = singularities.iter().map(|z| format!("{z:.5}")).collect();
        println!("singularities:   {}", listed.join(", "));
    }
    ExitCode::SUCCESS
}
