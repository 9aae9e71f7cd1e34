//! Events emitted by the INI parser.
//!
//! A [`ParseEvent`] borrows the parser's section/key/value slots. Those slots
//! are overwritten by the next line, so an event is only valid inside the
//! handler call that received it; the borrow checker enforces this because the
//! handler is invoked with a fresh lifetime each time. Use
//! [`ParseEvent::to_owned_event`] to keep one.
//!
//! # Examples
//!
//! ```
//! use core::convert::Infallible;
//! use inimodem::{OwnedParseEvent, parse_str};
//!
//! let mut entries = Vec::new();
//! parse_str("key=val", |event| {
//!     entries.push(event.to_owned_event());
//!     Ok::<_, Infallible>(())
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     entries,
//!     vec![OwnedParseEvent::Entry {
//!         section: None,
//!         key: "key".into(),
//!         value: "val".into(),
//!     }]
//! );
//! ```
use alloc::string::{String, ToString};

/// A borrowed parse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseEvent<'a> {
    /// A `[name]` header started a new section.
    Section {
        /// The section name, lower-cased unless
        /// [`preserve_section_case`](crate::ParserOptions::preserve_section_case)
        /// is set.
        name: &'a str,
    },
    /// A `key = value` line.
    Entry {
        /// The enclosing section, or `None` before the first header.
        section: Option<&'a str>,
        /// The key, trimmed and non-empty.
        key: &'a str,
        /// The value, trimmed and non-empty.
        value: &'a str,
    },
}

impl<'a> ParseEvent<'a> {
    /// The current section: the new one for [`ParseEvent::Section`], the
    /// enclosing one (if any) for [`ParseEvent::Entry`].
    #[must_use]
    pub fn section(&self) -> Option<&'a str> {
        match *self {
            Self::Section { name } => Some(name),
            Self::Entry { section, .. } => section,
        }
    }

    /// The key of an entry.
    #[must_use]
    pub fn key(&self) -> Option<&'a str> {
        match *self {
            Self::Entry { key, .. } => Some(key),
            Self::Section { .. } => None,
        }
    }

    /// The value of an entry.
    #[must_use]
    pub fn value(&self) -> Option<&'a str> {
        match *self {
            Self::Entry { value, .. } => Some(value),
            Self::Section { .. } => None,
        }
    }

    /// Returns `true` for a section change.
    #[must_use]
    pub fn is_section(&self) -> bool {
        matches!(self, Self::Section { .. })
    }

    /// Copies the event out of the parser's slots.
    #[must_use]
    pub fn to_owned_event(&self) -> OwnedParseEvent {
        match *self {
            Self::Section { name } => OwnedParseEvent::Section {
                name: name.to_string(),
            },
            Self::Entry {
                section,
                key,
                value,
            } => OwnedParseEvent::Entry {
                section: section.map(ToString::to_string),
                key: key.to_string(),
                value: value.to_string(),
            },
        }
    }
}

/// An owned copy of a [`ParseEvent`].
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "kind"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedParseEvent {
    /// See [`ParseEvent::Section`].
    Section {
        /// The section name.
        name: String,
    },
    /// See [`ParseEvent::Entry`].
    Entry {
        /// The enclosing section, if any.
        #[cfg_attr(
            any(test, feature = "serde"),
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        section: Option<String>,
        /// The key.
        key: String,
        /// The value.
        value: String,
    },
}

impl OwnedParseEvent {
    /// Borrows this event as a [`ParseEvent`].
    #[must_use]
    pub fn as_event(&self) -> ParseEvent<'_> {
        match self {
            Self::Section { name } => ParseEvent::Section { name },
            Self::Entry {
                section,
                key,
                value,
            } => ParseEvent::Entry {
                section: section.as_deref(),
                key,
                value,
            },
        }
    }
}

impl From<ParseEvent<'_>> for OwnedParseEvent {
    fn from(event: ParseEvent<'_>) -> Self {
        event.to_owned_event()
    }
}
