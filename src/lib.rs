pub mod app;
pub mod cli;
pub mod data;
pub mod domain;

use std::io::{self, Write};

use anyhow::Result;
use app::settings::RuntimeSettings;
use cli::Cli;
use data::humidity::{HumidityProvider, SimulatedHumidityClient};

pub fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    run_with_output(cli, &SimulatedHumidityClient::new(), &mut stdout.lock())
}

/// Run against an explicit provider and output stream.
pub fn run_with_output(
    cli: &Cli,
    provider: &impl HumidityProvider,
    out: &mut impl Write,
) -> Result<()> {
    let settings = RuntimeSettings::from_cli(cli);
    writeln!(out, "Fetching live humidity for {}...", settings.location)?;
    let reading = provider.fetch(&settings.location)?;
    writeln!(out, "{reading}")?;
    Ok(())
}
