//! A streaming INI parser that reuses its allocations across lines.
//!
//! Input is consumed one physical line at a time. Each `[section]` header and
//! each `key = value` line produces a [`ParseEvent`] handed to a caller-supplied
//! handler. Events borrow from three slots owned by the [`IniParser`] (current
//! section, key and value) which are overwritten in place on the next line, so
//! a handler must copy out anything it wants to keep.
//!
//! ```
//! use core::convert::Infallible;
//! use inimodem::{IniParser, OwnedParseEvent, ParserOptions};
//!
//! let mut parser = IniParser::new(ParserOptions::default());
//! let mut events = Vec::new();
//! parser
//!     .parse_str("[Server]\nport = 8080\n", |event| {
//!         events.push(event.to_owned_event());
//!         Ok::<_, Infallible>(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(
//!     events,
//!     vec![
//!         OwnedParseEvent::Section { name: "server".into() },
//!         OwnedParseEvent::Entry {
//!             section: Some("server".into()),
//!             key: "port".into(),
//!             value: "8080".into(),
//!         },
//!     ]
//! );
//! ```
//!
//! The core (`parse_str`, `feed_line`) is `no_std` + `alloc`. Reading from a
//! [`std::io::BufRead`] or a file path requires the default `std` feature.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod event;
mod line;
mod options;
mod parser;
mod slot;
pub mod trim;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use error::LoadError;
pub use error::{ErrorSource, ParserError, SyntaxError};
pub use event::{OwnedParseEvent, ParseEvent};
pub use line::{LineError, LineKind, SectionLine, classify, parse_key_value, parse_section};
pub use options::ParserOptions;
#[cfg(feature = "std")]
pub use parser::{parse_path, parse_reader};
pub use parser::{IniParser, ParseState, parse_str};
pub use slot::Slot;
