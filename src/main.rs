use anyhow::Result;
use clap::Parser;
use humidity_cli::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    humidity_cli::run(&cli)
}
