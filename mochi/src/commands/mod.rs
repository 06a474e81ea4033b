mod check;
mod generate;
mod preview;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use preview::PreviewCommand;

#[derive(Parser)]
#[command(name = "mochi")]
#[command(version)]
#[command(about = "Generate CRUD backends from a data-model manifest")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Preview(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate artifacts from mochi.toml and write them to disk
    Generate(GenerateCommand),

    /// Print generated artifacts without writing to disk
    Preview(PreviewCommand),

    /// Validate mochi.toml without generating code
    Check(CheckCommand),
}
