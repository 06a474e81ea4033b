use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use mochi_codegen::GenerationSummary;
use mochi_codegen::generators::generate_all;
use mochi_core::{File, GeneratedFile};

use crate::manifest::Manifest;
use crate::reports::{Checklist, print_failures, print_summary};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to mochi.toml (defaults to ./mochi.toml)
    #[arg(short, long, default_value = "mochi.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(&self.config)?;
        let run = generate_all(&manifest.models, &manifest.config);

        for bundle in &run.bundles {
            for (name, content) in &bundle.files {
                let path = self
                    .output
                    .join("src")
                    .join(&bundle.directory)
                    .join(name);
                File::new(&path, content.clone())
                    .write()
                    .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
            }
        }

        let summary = GenerationSummary::from_bundles(&run.bundles);
        Checklist::new(&summary)
            .write(&self.output)
            .wrap_err("failed to write checklist")?;

        print_summary(&summary, &self.output);

        if run.has_failures() {
            print_failures(run.failures);
            std::process::exit(1);
        }
        Ok(())
    }
}
