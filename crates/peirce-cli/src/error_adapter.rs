//! Error adapter for converting engine errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use peirce::AegError;

/// Adapter wrapping an [`AegError`] for rich CLI reporting.
pub struct ErrorAdapter<'a>(pub &'a AegError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            AegError::Io(_) => "peirce::io",
            AegError::Validation(_) => "peirce::validation",
            AegError::Insertion(_) => "peirce::insertion",
            AegError::Malformed(_) => "peirce::malformed",
            AegError::Structural(_) => "peirce::structural",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            AegError::Malformed(_) => {
                "the file does not match the graph projection; check the node records and their geometry"
            }
            AegError::Structural(_) => {
                "the file parsed but its shapes violate containment or sibling disjointness; repair it before use"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Wraps an error for miette rendering.
pub fn to_report(err: &AegError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
