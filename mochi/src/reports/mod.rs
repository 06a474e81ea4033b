//! Operator-facing reporting: terminal summary and the integration
//! checklist. Both consume generation results as read-only summaries.

mod checklist;

pub use checklist::Checklist;

use std::path::Path;

use mochi_codegen::{Error, GenerationSummary};

/// Print the post-generation terminal report.
pub fn print_summary(summary: &GenerationSummary, output_dir: &Path) {
    println!(
        "Generated {} model(s), {} file(s), {} line(s)",
        summary.model_count(),
        summary.file_count(),
        summary.line_count()
    );
    for model in &summary.models {
        println!(
            "  {} -> {}/src/{}/ ({} files)",
            model.name,
            output_dir.display(),
            model.directory,
            model.files.len()
        );
    }
}

/// Print per-model failures through miette and leave siblings untouched.
pub fn print_failures(failures: Vec<(String, Box<Error>)>) {
    for (model, err) in failures {
        eprintln!("model '{}' was not generated:", model);
        eprintln!("{:?}", miette::Report::new(*err));
    }
}
