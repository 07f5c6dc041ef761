//! Generate operation - routes file from a pages directory.

use routegen_codegen::{Generator, Outcome};
use routegen_core::{GeneratorConfig, Result};

use crate::reports::{GenerateReport, GenerationResult, RouteLine};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(config: GeneratorConfig, opts: GenerateOptions) -> Result<GenerateReport> {
    let input_dir = config.input_dir().to_path_buf();
    let generator = Generator::new(config);

    let result = if opts.dry_run {
        generator.preview()?
    } else {
        generator.generate()?
    };

    let routes = result
        .manifest
        .entries
        .iter()
        .map(|entry| RouteLine {
            route: format!("/{}", entry.route),
            handler: entry.handler.clone(),
        })
        .collect();

    let warnings = result.warnings.iter().map(ToString::to_string).collect();

    let outcome = match result.outcome {
        Outcome::Written(write) => GenerationResult::Written {
            path: result.output_file,
            status: write.as_str(),
        },
        Outcome::Preview(content) => GenerationResult::Preview {
            path: result.output_file,
            content,
        },
    };

    Ok(GenerateReport {
        input_dir,
        routes,
        warnings,
        result: outcome,
    })
}
