//=========================================================================
// rooftop_runner binary
//=========================================================================
//
// Usage: rooftop_runner [CONFIG]
//
// CONFIG defaults to `runner.ron`; a missing file means built-in
// defaults. Log output is controlled with RUST_LOG (default: info).
//
//=========================================================================

use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};

use rooftop_runner::core::config::RunnerConfig;
use rooftop_runner::EngineBuilder;

const DEFAULT_CONFIG_PATH: &str = "runner.ron";

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match RunnerConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Config loaded from {} (seed: {:?})", path, config.seed);

    match EngineBuilder::new(config).build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
