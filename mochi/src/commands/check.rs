use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mochi_codegen::GeneratorContext;

use crate::manifest::Manifest;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to mochi.toml (defaults to ./mochi.toml)
    #[arg(short, long, default_value = "mochi.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(&self.config)?;

        let mut failed = false;
        for model in &manifest.models {
            match GeneratorContext::new(model, &manifest.config) {
                Ok(_) => println!("ok: {}", model.name),
                Err(err) => {
                    failed = true;
                    eprintln!("{:?}", miette::Report::new(*err));
                }
            }
        }

        if failed {
            std::process::exit(1);
        }
        println!("{} model(s) valid", manifest.models.len());
        Ok(())
    }
}
