use crate::cli::Cli;

/// Settings resolved from the CLI for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub location: String,
}

impl RuntimeSettings {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            location: cli.default_location(),
        }
    }
}
