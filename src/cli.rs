use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "humidity-cli",
    version,
    about = "Simulated humidity lookup for the command line"
)]
pub struct Cli {
    /// Location to look up (default: Mountain View)
    #[arg(long)]
    pub location: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn default_location(&self) -> String {
        self.location
            .clone()
            .unwrap_or_else(|| "Mountain View".to_string())
    }
}
