//! Line classification and the section / key-value tokenizers.
//!
//! Every function here takes a line that has already been trimmed. The
//! tokenizers write into caller-owned [`Slot`]s and hand back views of what
//! they stored.

use alloc::collections::TryReserveError;

use thiserror::Error;

use crate::{ParserOptions, SyntaxError, error::ErrorSource, slot::Slot, trim};

/// Coarse class of a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Nothing but whitespace.
    Blank,
    /// Starts with a comment marker.
    Comment,
    /// Anything else: a section header, a key/value pair, or an error.
    Content,
}

/// Classifies a trimmed line.
#[must_use]
pub fn classify(line: &str, options: &ParserOptions) -> LineKind {
    match line.as_bytes().first() {
        None => LineKind::Blank,
        Some(b';') => LineKind::Comment,
        Some(b'#') if options.allow_hash_comments => LineKind::Comment,
        Some(_) => LineKind::Content,
    }
}

/// Outcome of [`parse_section`] on a well-formed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLine<'a> {
    /// A header was parsed; the name now lives in the section slot.
    Parsed(&'a str),
    /// The line does not start with `[`; try it as a key/value pair.
    NotASection,
}

/// Failure of a tokenizer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line is malformed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A slot could not grow.
    #[error(transparent)]
    Allocation(#[from] TryReserveError),
}

impl<E> From<LineError> for ErrorSource<E> {
    fn from(err: LineError) -> Self {
        match err {
            LineError::Syntax(err) => Self::Syntax(err),
            LineError::Allocation(err) => Self::Allocation(err),
        }
    }
}

/// Parses `[name]` into `section`.
///
/// The name is everything strictly between the leading `[` and the first `]`,
/// untrimmed. Only whitespace may follow the `]`.
///
/// # Errors
///
/// [`SyntaxError::UnterminatedSection`] without a `]`,
/// [`SyntaxError::TrailingCharacters`] with text after it, and
/// [`SyntaxError::EmptySectionName`] for `[]`. On error the section slot keeps
/// its previous contents.
pub fn parse_section<'s>(
    section: &'s mut Slot,
    line: &str,
    options: &ParserOptions,
) -> Result<SectionLine<'s>, LineError> {
    let Some(rest) = line.strip_prefix('[') else {
        return Ok(SectionLine::NotASection);
    };
    let Some(close) = rest.find(']') else {
        return Err(SyntaxError::UnterminatedSection.into());
    };
    if !trim::ltrim(&rest[close + 1..]).is_empty() {
        return Err(SyntaxError::TrailingCharacters.into());
    }

    let name = &rest[..close];
    if name.is_empty() {
        return Err(SyntaxError::EmptySectionName.into());
    }

    match section.assign(name)? {
        Some(buf) => {
            if !options.preserve_section_case {
                buf.make_ascii_lowercase();
            }
            Ok(SectionLine::Parsed(buf.as_str()))
        }
        None => Err(SyntaxError::EmptySectionName.into()),
    }
}

/// Parses `key = value` into the two slots.
///
/// The line is split at the first `=`; the key is right-trimmed and the value
/// left-trimmed, so a value may itself contain `=`.
///
/// # Errors
///
/// [`SyntaxError::MissingSeparator`] without `=`, [`SyntaxError::EmptyKey`] or
/// [`SyntaxError::EmptyValue`] when either side is blank. The key is stored
/// before the value is examined, so an empty value still replaces the key slot.
pub fn parse_key_value<'s>(
    key: &'s mut Slot,
    value: &'s mut Slot,
    line: &str,
) -> Result<(&'s str, &'s str), LineError> {
    let Some(sep) = line.find('=') else {
        return Err(SyntaxError::MissingSeparator.into());
    };

    let Some(key) = key.assign(trim::rtrim(&line[..sep]))? else {
        return Err(SyntaxError::EmptyKey.into());
    };
    let Some(value) = value.assign(trim::ltrim(&line[sep + 1..]))? else {
        return Err(SyntaxError::EmptyValue.into());
    };

    Ok((key.as_str(), value.as_str()))
}
