//! The streaming driver.
//!
//! `IniParser` owns the three reusable slots (section, key, value) and a line
//! cursor. Each physical line goes through the same steps:
//!
//! 1. trim ASCII whitespace and advance the cursor,
//! 2. skip blank and comment lines,
//! 3. try the section tokenizer; if the line is not a header, try key/value,
//! 4. hand the resulting [`ParseEvent`] to the handler.
//!
//! The first error of any kind stops the parse. Slots are released when the
//! parse ends, on success and on failure alike, and reset when the next one
//! begins, so a parser value can be reused without state leaking across runs.

#[cfg(feature = "std")]
use std::{fs::File, io::BufRead, path::Path, vec::Vec};

#[cfg(feature = "std")]
use bstr::ByteSlice;
use tracing::{debug, trace, warn};

#[cfg(feature = "std")]
use crate::{LoadError, SyntaxError};
use crate::{
    ErrorSource, ParseEvent, ParserError, ParserOptions,
    line::{self, LineKind, SectionLine},
    slot::Slot,
    trim,
};

/// Where a parser is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    /// Accepting lines.
    #[default]
    Reading,
    /// The input ended cleanly.
    Done,
    /// A line failed; no further events were delivered.
    Failed,
}

/// A reusable INI parser.
///
/// Handlers are closures `FnMut(ParseEvent<'_>) -> Result<(), E>`. The event
/// borrows the parser's slots and must not be retained past the call; returning
/// `Err` stops the parse and surfaces as [`ErrorSource::Handler`].
#[derive(Debug, Default)]
pub struct IniParser {
    options: ParserOptions,
    section: Slot,
    key: Slot,
    value: Slot,
    line: usize,
    state: ParseState,
}

impl IniParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options this parser was built with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Number of physical lines consumed by the current (or last) parse.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The section the next entry would belong to, while a parse is running.
    #[must_use]
    pub fn current_section(&self) -> Option<&str> {
        self.section.as_str()
    }

    /// Parses a whole string, one line at a time.
    ///
    /// # Errors
    ///
    /// Returns the first syntax, allocation or handler error, with the line it
    /// occurred on.
    pub fn parse_str<E, F>(&mut self, input: &str, mut handler: F) -> Result<(), ParserError<E>>
    where
        F: FnMut(ParseEvent<'_>) -> Result<(), E>,
    {
        self.reset();
        for raw in input.lines() {
            self.feed_line(raw, &mut handler)?;
        }
        self.finish();
        Ok(())
    }

    /// Parses every line of `reader`.
    ///
    /// Lines are read as bytes into one reused buffer and must be valid UTF-8.
    ///
    /// # Errors
    ///
    /// As [`IniParser::parse_str`], plus [`SyntaxError::InvalidUtf8`] for a
    /// line that is not UTF-8 and [`ErrorSource::Io`] when reading fails.
    #[cfg(feature = "std")]
    pub fn parse_reader<R, E, F>(&mut self, mut reader: R, mut handler: F) -> Result<(), ParserError<E>>
    where
        R: BufRead,
        F: FnMut(ParseEvent<'_>) -> Result<(), E>,
    {
        self.reset();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    let line = self.line + 1;
                    return Err(self.fail(ErrorSource::Io(err), line, ""));
                }
            }

            match buf.to_str() {
                Ok(raw) => self.feed_line(raw, &mut handler)?,
                Err(_) => {
                    self.line += 1;
                    let text = buf.to_str_lossy();
                    return Err(self.fail(
                        SyntaxError::InvalidUtf8.into(),
                        self.line,
                        trim::trim(&text),
                    ));
                }
            }
        }
        self.finish();
        Ok(())
    }

    /// Opens `path` and parses it with [`IniParser::parse_reader`].
    ///
    /// # Errors
    ///
    /// [`LoadError::Open`] when the file cannot be opened, otherwise
    /// [`LoadError::Parse`] for any parse failure.
    #[cfg(feature = "std")]
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn parse_path<P, E, F>(&mut self, path: P, handler: F) -> Result<(), LoadError<E>>
    where
        P: AsRef<Path>,
        F: FnMut(ParseEvent<'_>) -> Result<(), E>,
    {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                warn!(error = %source, "cannot open ini file");
                return Err(LoadError::Open {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        self.parse_reader(std::io::BufReader::new(file), handler)?;
        Ok(())
    }

    /// Feeds one physical line, with or without its line terminator.
    ///
    /// For callers that own their line source. [`IniParser::finish`] must be
    /// called after the last line to release the slots. A parser that has
    /// failed (or finished) starts over as if freshly reset.
    ///
    /// # Errors
    ///
    /// The line's syntax error, a slot allocation failure, or the handler's
    /// error. The parser is then [`ParseState::Failed`] and its slots are
    /// released.
    pub fn feed_line<E, F>(&mut self, raw: &str, handler: &mut F) -> Result<(), ParserError<E>>
    where
        F: FnMut(ParseEvent<'_>) -> Result<(), E>,
    {
        if self.state != ParseState::Reading {
            self.reset();
        }

        let text = trim::trim(raw);
        self.line += 1;

        match line::classify(text, &self.options) {
            LineKind::Blank | LineKind::Comment => return Ok(()),
            LineKind::Content => {}
        }

        let line_no = self.line;
        let Self {
            options,
            section,
            key,
            value,
            ..
        } = self;

        let event = match line::parse_section(section, text, options) {
            Ok(SectionLine::Parsed(name)) => ParseEvent::Section { name },
            Ok(SectionLine::NotASection) => match line::parse_key_value(key, value, text) {
                Ok((key, value)) => ParseEvent::Entry {
                    section: section.as_str(),
                    key,
                    value,
                },
                Err(err) => return Err(self.fail(err.into(), line_no, text)),
            },
            Err(err) => return Err(self.fail(err.into(), line_no, text)),
        };

        trace!(line = line_no, ?event, "ini event");
        if let Err(err) = handler(event) {
            return Err(self.fail(ErrorSource::Handler(err), line_no, text));
        }
        Ok(())
    }

    /// Ends a [`IniParser::feed_line`] session, releasing the slots.
    pub fn finish(&mut self) {
        debug!(lines = self.line, "ini parse complete");
        self.release();
        self.state = ParseState::Done;
    }

    fn reset(&mut self) {
        self.release();
        self.line = 0;
        self.state = ParseState::Reading;
    }

    fn release(&mut self) {
        self.section.release();
        self.key.release();
        self.value.release();
    }

    fn fail<E>(&mut self, source: ErrorSource<E>, line: usize, text: &str) -> ParserError<E> {
        // Slots go first so their memory is available for the error text.
        self.release();
        self.state = ParseState::Failed;
        warn!(line, text, error = %DisplayKind(&source), "ini parse failed");
        ParserError::new(source, line, text)
    }
}

/// Formats an [`ErrorSource`] for logging without requiring `E: Display`.
struct DisplayKind<'a, E>(&'a ErrorSource<E>);

impl<E> core::fmt::Display for DisplayKind<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            ErrorSource::Syntax(err) => write!(f, "syntax error: {err}"),
            ErrorSource::Allocation(err) => write!(f, "allocation failed: {err}"),
            ErrorSource::Handler(_) => f.write_str("handler error"),
            #[cfg(feature = "std")]
            ErrorSource::Io(err) => write!(f, "read error: {err}"),
        }
    }
}

/// Parses `input` with default options.
///
/// # Errors
///
/// See [`IniParser::parse_str`].
pub fn parse_str<E, F>(input: &str, handler: F) -> Result<(), ParserError<E>>
where
    F: FnMut(ParseEvent<'_>) -> Result<(), E>,
{
    IniParser::default().parse_str(input, handler)
}

/// Parses `reader` with default options.
///
/// # Errors
///
/// See [`IniParser::parse_reader`].
#[cfg(feature = "std")]
pub fn parse_reader<R, E, F>(reader: R, handler: F) -> Result<(), ParserError<E>>
where
    R: BufRead,
    F: FnMut(ParseEvent<'_>) -> Result<(), E>,
{
    IniParser::default().parse_reader(reader, handler)
}

/// Opens and parses the file at `path` with default options.
///
/// # Errors
///
/// See [`IniParser::parse_path`].
#[cfg(feature = "std")]
pub fn parse_path<P, E, F>(path: P, handler: F) -> Result<(), LoadError<E>>
where
    P: AsRef<Path>,
    F: FnMut(ParseEvent<'_>) -> Result<(), E>,
{
    IniParser::default().parse_path(path, handler)
}
