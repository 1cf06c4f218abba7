pub mod toml_config;

pub use toml_config::PlaygroundConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "delegation-playground")]
#[command(about = "Walks through the delegation pattern with a bakery and an item list")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with bakery and catalog settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Row to select, overriding the configured one")]
    pub select: Option<usize>,

    #[arg(long, help = "Run without wiring any delegates")]
    pub no_delegate: bool,

    #[arg(long, help = "Print the run report as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Load the configured file (or defaults) and apply command-line overrides on top.
    pub fn resolve(&self) -> crate::Result<PlaygroundConfig> {
        let mut config = match &self.config {
            Some(path) => PlaygroundConfig::from_file(path)?,
            None => PlaygroundConfig::default(),
        };
        if let Some(index) = self.select {
            config.catalog.select = Some(index);
        }
        if self.no_delegate {
            config.attach_delegates = false;
        }
        Ok(config)
    }
}
