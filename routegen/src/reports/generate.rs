//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from route generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Directory the pages were read from.
    pub input_dir: PathBuf,
    /// Registered routes in emission order.
    pub routes: Vec<RouteLine>,
    /// Warning messages from lints.
    pub warnings: Vec<String>,
    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// One registered route.
#[derive(Debug)]
pub struct RouteLine {
    pub route: String,
    pub handler: String,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The routes file was written to disk.
    Written {
        path: PathBuf,
        /// `created`, `updated` or `unchanged`.
        status: &'static str,
    },
    /// Dry-run preview.
    Preview { path: PathBuf, content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written { path, status } => {
                self.render_routes(out);
                out.newline();
                out.key_value("Generated", &format!("{} ({})", path.display(), status));
            }
            GenerationResult::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.preformatted(content);
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} routes would be registered",
                    self.routes.len()
                ));
            }
        }
    }
}

impl GenerateReport {
    fn render_routes(&self, out: &mut dyn Output) {
        out.section(&format!(
            "Routes in {} ({})",
            self.input_dir.display(),
            self.routes.len()
        ));
        for line in &self.routes {
            out.list_item(&format!("{} -> {}", line.route, line.handler));
        }
    }
}
