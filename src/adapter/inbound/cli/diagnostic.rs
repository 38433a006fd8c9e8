//! Miette diagnostics for configuration errors.
//!
//! A TOML parse error is rendered against the file's own text with a label
//! on the offending span, so the operator sees exactly which line broke.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(reviewpool::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Build a diagnostic from a TOML parse error over `src`.
    ///
    /// Errors without a span point at the start of the file.
    #[must_use]
    pub fn from_toml(name: impl AsRef<str>, src: &str, err: &toml::de::Error) -> Self {
        let (offset, len) = err
            .span()
            .map_or((0, 0), |range| (range.start, range.end - range.start));
        Self::new(err.message(), name, src, offset, len)
            .with_help("see `reviewpool config show` for the accepted sections and keys")
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render the diagnostic the way miette's handler would print it.
    #[must_use]
    pub fn render(self) -> String {
        format!("{:?}", miette::Report::new(self))
    }
}
