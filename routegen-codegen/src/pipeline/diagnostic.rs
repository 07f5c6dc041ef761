//! Diagnostics collected while generating.
//!
//! Diagnostics never stop a run. Anything fatal is a
//! [`routegen_core::Error`] returned by the phase instead.

/// A warning produced by a lint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the lint that produced this diagnostic.
    pub lint: &'static str,
    /// The diagnostic message.
    pub message: String,
    /// Optional location, usually a page file path.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn warning(lint: &'static str, message: impl Into<String>) -> Self {
        Self {
            lint,
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("duplicate-route", "route 'api' is defined twice")
            .at("api.swift");
        assert_eq!(diag.location.as_deref(), Some("api.swift"));
        assert_eq!(
            diag.to_string(),
            "route 'api' is defined twice (at api.swift)"
        );
    }

    #[test]
    fn test_diagnostic_without_location() {
        let diag = Diagnostic::warning("index-suffix", "dropped");
        assert_eq!(diag.to_string(), "dropped");
    }
}
