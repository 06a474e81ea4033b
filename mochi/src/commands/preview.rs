use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mochi_codegen::generators::generate_all;

use crate::manifest::Manifest;
use crate::reports::print_failures;

#[derive(Args)]
pub struct PreviewCommand {
    /// Path to mochi.toml (defaults to ./mochi.toml)
    #[arg(short, long, default_value = "mochi.toml")]
    pub config: PathBuf,

    /// Emit the file map as JSON instead of pretty-printing
    #[arg(long)]
    pub json: bool,
}

impl PreviewCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(&self.config)?;
        let run = generate_all(&manifest.models, &manifest.config);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&run.bundles)?);
        } else {
            for bundle in &run.bundles {
                for (name, content) in &bundle.files {
                    println!("── src/{}/{} ──", bundle.directory, name);
                    println!("{}", content);
                }
            }
            println!("── Summary ──");
            println!("{} model(s) would be generated", run.bundles.len());
        }

        if run.has_failures() {
            print_failures(run.failures);
            std::process::exit(1);
        }
        Ok(())
    }
}
