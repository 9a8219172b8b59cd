//! Error adapter for converting MatelasError to miette diagnostics.
//!
//! Matelas errors carry no source spans, so the adapter only supplies a
//! diagnostic code and, where one helps, a hint.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};

use matelas::{MatelasError, request::InputError};

/// Adapter giving a [`MatelasError`] miette's rich formatting.
pub struct ErrorAdapter<'a>(pub &'a MatelasError);

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
        self.0.source()
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            MatelasError::Io(_) => "matelas::io",
            MatelasError::Input(_) => "matelas::input",
            MatelasError::Layout(_) => "matelas::layout",
            MatelasError::Export(_) => "matelas::export",
            MatelasError::Config(_) => "matelas::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            MatelasError::Input(InputError::TooDense { .. }) => {
                "increase the minimum distances or raise layout.max_points in the configuration"
            }
            MatelasError::Input(_) => {
                "width, height and all distances must be positive numbers"
            }
            MatelasError::Config(_) => "check the configuration file passed with --config",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: &MatelasError) -> Option<String> {
        ErrorAdapter(err).code().map(|c| c.to_string())
    }

    #[test]
    fn test_codes_per_variant() {
        let io = MatelasError::Io(std::io::Error::other("disk full"));
        let input = MatelasError::Input(InputError::NonPositiveDimensions);
        let config = MatelasError::Config("bad".to_string());

        assert_eq!(code(&io).as_deref(), Some("matelas::io"));
        assert_eq!(code(&input).as_deref(), Some("matelas::input"));
        assert_eq!(code(&config).as_deref(), Some("matelas::config"));
    }

    #[test]
    fn test_message_is_preserved() {
        let err = MatelasError::Input(InputError::NonPositiveDistances);

        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "All distances must be positive"
        );
        assert!(ErrorAdapter(&err).help().is_some());
    }

    #[test]
    fn test_io_errors_have_no_help() {
        let err = MatelasError::Io(std::io::Error::other("disk full"));

        assert!(ErrorAdapter(&err).help().is_none());
        assert!(ErrorAdapter(&err).labels().is_none());
    }
}
