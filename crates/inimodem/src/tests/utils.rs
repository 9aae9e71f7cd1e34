use alloc::vec::Vec;
use core::convert::Infallible;

use crate::{IniParser, OwnedParseEvent, ParserError, ParserOptions};

pub type Collected = Result<Vec<OwnedParseEvent>, ParserError<Infallible>>;

/// Runs `parser` over `input`, copying every event out.
pub fn collect_with(parser: &mut IniParser, input: &str) -> Collected {
    let mut events = Vec::new();
    parser.parse_str(input, |event| {
        events.push(event.to_owned_event());
        Ok::<_, Infallible>(())
    })?;
    Ok(events)
}

pub fn collect(input: &str) -> Collected {
    collect_with(&mut IniParser::new(ParserOptions::default()), input)
}

pub fn section(name: &str) -> OwnedParseEvent {
    OwnedParseEvent::Section { name: name.into() }
}

pub fn entry(section: Option<&str>, key: &str, value: &str) -> OwnedParseEvent {
    OwnedParseEvent::Entry {
        section: section.map(Into::into),
        key: key.into(),
        value: value.into(),
    }
}
