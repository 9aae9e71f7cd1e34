use alloc::{collections::TryReserveError, string::String};
#[cfg(feature = "std")]
use std::path::PathBuf;

use thiserror::Error;

/// A fatal parse error, located at the 1-based line where it occurred.
///
/// `text` is the trimmed offending line. It is empty when the failure happened
/// before a line could be read, or when the line could not be copied.
#[derive(Error, Debug)]
#[error("{source} at line {line} near '{text}'")]
pub struct ParserError<E> {
    pub(crate) source: ErrorSource<E>,
    /// The 1-based line number.
    pub line: usize,
    /// The trimmed text of the offending line.
    pub text: String,
}

impl<E> ParserError<E> {
    /// Copies `text` only if the allocation succeeds; after an allocation
    /// failure the line is usually too large to copy either.
    pub(crate) fn new(source: ErrorSource<E>, line: usize, text: &str) -> Self {
        let mut owned = String::new();
        if owned.try_reserve_exact(text.len()).is_ok() {
            owned.push_str(text);
        }
        Self {
            source,
            line,
            text: owned,
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ErrorSource<E> {
        &self.source
    }

    /// Consumes the error, returning what went wrong.
    #[must_use]
    pub fn into_kind(self) -> ErrorSource<E> {
        self.source
    }

    /// The syntax error, if this is one.
    #[must_use]
    pub fn syntax(&self) -> Option<SyntaxError> {
        match self.source {
            ErrorSource::Syntax(err) => Some(err),
            _ => None,
        }
    }
}

/// The cause of a [`ParserError`].
#[derive(Error, Debug)]
pub enum ErrorSource<E> {
    /// The line matches neither the section nor the key/value grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    /// A slot could not grow to hold the parsed text.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
    /// The handler rejected an event.
    #[error("handler error: {0}")]
    Handler(E),
    /// Reading the next line failed.
    #[cfg(feature = "std")]
    #[error("read error: {0}")]
    Io(#[source] std::io::Error),
}

/// Ways a single line can be malformed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// `[` without a closing `]`.
    #[error("unterminated section header")]
    UnterminatedSection,
    /// Non-whitespace after the closing `]`.
    #[error("unexpected characters after section header")]
    TrailingCharacters,
    /// `[]`.
    #[error("empty section name")]
    EmptySectionName,
    /// A non-section line without `=`.
    #[error("expected '=' in key/value line")]
    MissingSeparator,
    /// Nothing before the `=`.
    #[error("empty key")]
    EmptyKey,
    /// Nothing after the `=`.
    #[error("empty value")]
    EmptyValue,
    /// The line is not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
}

/// Failure of [`parse_path`](crate::parse_path): the file could not be opened,
/// or its contents failed to parse.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum LoadError<E> {
    /// The path could not be opened for reading.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        /// The path that was requested.
        path: PathBuf,
        /// The reason reported by the operating system.
        source: std::io::Error,
    },
    /// The file was opened but parsing failed.
    #[error(transparent)]
    Parse(#[from] ParserError<E>),
}

#[cfg(feature = "std")]
impl<E> LoadError<E> {
    /// The parse error, if the file was opened.
    #[must_use]
    pub fn as_parse(&self) -> Option<&ParserError<E>> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Open { .. } => None,
        }
    }
}
