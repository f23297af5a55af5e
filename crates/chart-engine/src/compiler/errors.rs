//! Chart error types

use std::fmt;

use thiserror::Error;
use typst::diag::SourceDiagnostic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One compiler message, detached from the source it points into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub hints: Vec<String>,
    pub severity: Severity,
}

impl From<&SourceDiagnostic> for Diagnostic {
    fn from(diag: &SourceDiagnostic) -> Self {
        Self {
            message: diag.message.to_string(),
            hints: diag.hints.iter().map(|h| h.to_string()).collect(),
            severity: match diag.severity {
                typst::diag::Severity::Error => Severity::Error,
                typst::diag::Severity::Warning => Severity::Warning,
            },
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Unknown chart template: {0}")]
    UnknownTemplate(String),

    #[error("Chart compilation failed: {}", join(.0))]
    Compile(Vec<Diagnostic>),

    #[error("Chart render timeout after {0}ms")]
    Timeout(u64),

    #[error("Invalid chart input: {0}")]
    InvalidInput(String),

    #[error("Chart render failed: {0}")]
    Render(String),

    #[error("Failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}

fn join(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_lists_messages_and_hints() {
        let err = ChartError::Compile(vec![
            Diagnostic {
                message: "unknown variable: peak".to_string(),
                hints: vec![],
                severity: Severity::Error,
            },
            Diagnostic {
                message: "expected length".to_string(),
                hints: vec!["multiply by 1cm".to_string()],
                severity: Severity::Error,
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Chart compilation failed: unknown variable: peak; expected length (hint: multiply by 1cm)"
        );
    }
}
