use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::{QuickCheck, TestResult};

use super::utils::{Collected, collect, collect_with, entry, section};
use crate::{IniParser, SyntaxError, trim::trim};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// A section name the grammar accepts: non-empty, no `]`, single line.
fn usable_name(name: &str) -> bool {
    !name.is_empty() && !name.contains([']', '\n'])
}

fn syntax_at(result: &Collected) -> Option<(SyntaxError, usize)> {
    result
        .as_ref()
        .err()
        .and_then(|err| err.syntax().map(|kind| (kind, err.line)))
}

/// Property: `[Name]` followed only by whitespace yields one section event
/// carrying the lower-cased name.
#[test]
fn header_is_lowercased() {
    fn prop(name: String, padding: u8) -> TestResult {
        if !usable_name(&name) {
            return TestResult::discard();
        }
        let pad = " \t".repeat(usize::from(padding % 4));
        let line = format!("[{name}]{pad}");
        TestResult::from_bool(
            collect(&line).ok() == Some(alloc::vec![section(&name.to_ascii_lowercase())]),
        )
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, u8) -> TestResult);
}

/// Property: anything other than whitespace after `]` is rejected on line 1.
#[test]
fn trailing_text_after_header_fails() {
    fn prop(name: String, junk: String) -> TestResult {
        if !usable_name(&name) || junk.contains('\n') || trim(&junk).is_empty() {
            return TestResult::discard();
        }
        let result = collect(&format!("[{name}]{junk}"));
        TestResult::from_bool(syntax_at(&result) == Some((SyntaxError::TrailingCharacters, 1)))
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, String) -> TestResult);
}

/// Property: `[` without any `]` is an unterminated header.
#[test]
fn missing_close_bracket_fails() {
    fn prop(name: String) -> TestResult {
        if name.contains([']', '\n']) {
            return TestResult::discard();
        }
        let result = collect(&format!("[{name}"));
        TestResult::from_bool(syntax_at(&result) == Some((SyntaxError::UnterminatedSection, 1)))
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> TestResult);
}

/// Property: whitespace around `=` is stripped, everything else survives.
#[test]
fn key_value_whitespace_is_stripped() {
    fn prop(key: String, value: String) -> TestResult {
        let key_ok = !key.is_empty()
            && trim(&key) == key
            && !key.contains(['=', '\n'])
            && !key.starts_with(['[', ';']);
        let value_ok = !value.is_empty() && trim(&value) == value && !value.contains('\n');
        if !key_ok || !value_ok {
            return TestResult::discard();
        }

        let line = format!("  {key} \t=\t {value}  ");
        TestResult::from_bool(collect(&line).ok() == Some(alloc::vec![entry(None, &key, &value)]))
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String, String) -> TestResult);
}

const BASE: [&str; 5] = ["[alpha]", "one = 1", "two = 2", "[beta]", "three = 3"];

/// Property: comment and blank lines never change the event stream, wherever
/// they are inserted.
#[test]
fn comments_and_blanks_are_invisible() {
    fn prop(inserts: Vec<(usize, String, bool)>) -> TestResult {
        let mut lines: Vec<String> = BASE.iter().map(ToString::to_string).collect();
        for (at, text, blank) in inserts {
            if text.contains('\n') {
                return TestResult::discard();
            }
            let extra = if blank {
                " \t ".to_string()
            } else {
                format!("  ;{text}")
            };
            let at = at % (lines.len() + 1);
            lines.insert(at, extra);
        }

        let expected = collect(&BASE.join("\n")).ok();
        TestResult::from_bool(expected.is_some() && collect(&lines.join("\n")).ok() == expected)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<(usize, String, bool)>) -> TestResult);
}

/// Property: parsing the same text twice with one parser gives the same
/// events, or fails at the same line with the same error.
#[test]
fn reparse_is_deterministic() {
    fn prop(lines: Vec<String>) -> bool {
        let input = lines.join("\n");
        let mut parser = IniParser::default();

        let summarize = |result: Collected| match result {
            Ok(events) => Ok(events),
            Err(err) => Err((err.line, err.syntax(), err.text)),
        };
        let first = summarize(collect_with(&mut parser, &input));
        let second = summarize(collect_with(&mut parser, &input));
        first == second
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<String>) -> bool);
}
