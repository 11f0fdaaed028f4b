#![allow(dead_code)]

use humidity_cli::cli::Cli;
use humidity_cli::data::humidity::SimulatedHumidityClient;

pub fn capture_run(cli: &Cli) -> String {
    let mut out = Vec::new();
    humidity_cli::run_with_output(cli, &SimulatedHumidityClient::new(), &mut out)
        .expect("run should succeed");
    String::from_utf8(out).expect("output is utf-8")
}

pub fn cli_with_location(location: &str) -> Cli {
    Cli {
        location: Some(location.to_string()),
    }
}
