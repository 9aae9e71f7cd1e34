#![no_main]
use std::cell::RefCell;
use std::convert::Infallible;
use std::io::{BufReader, Read};

use arbitrary::Arbitrary;
use inimodem::{IniParser, OwnedParseEvent, ParserOptions};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 5; // 1 flag + 4-byte seed

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Structured line generator so the mutator spends most of its time on
/// inputs that get past the first line.
#[derive(Debug, Arbitrary)]
enum ArbitraryLine {
    Section(String),
    Entry(String, String),
    Comment(String),
    Blank(u8),
    Raw(String),
}

impl ArbitraryLine {
    fn render(&self, out: &mut Vec<u8>) {
        match self {
            Self::Section(name) => out.extend_from_slice(format!("[{name}]").as_bytes()),
            Self::Entry(key, value) => {
                out.extend_from_slice(format!("{key} = {value}").as_bytes());
            }
            Self::Comment(text) => out.extend_from_slice(format!("; {text}").as_bytes()),
            Self::Blank(n) => out.extend(std::iter::repeat_n(b' ', usize::from(n % 8))),
            Self::Raw(text) => out.extend_from_slice(text.as_bytes()),
        }
        out.extend_from_slice(if out.len() % 3 == 0 { b"\r\n" } else { b"\n" });
    }
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03);
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let room = max_size.saturating_sub(HEADER);
        let mut doc = Vec::new();
        while doc.len() < room {
            let s = with_rng(|rng| rng.random_range(1..64usize));
            let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
            match ArbitraryLine::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
                Ok(line) => line.render(&mut doc),
                Err(_) => break,
            }
        }

        let len = doc.len().min(room);
        data[HEADER..HEADER + len].copy_from_slice(&doc[..len]);
        HEADER + len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// A reader that hands out at most `step` bytes per call, so line assembly in
/// `parse_reader` crosses buffer boundaries.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

type Outcome = (Vec<OwnedParseEvent>, Option<(usize, String)>);

fn run(data: &[u8], options: ParserOptions, step: usize) -> (Outcome, Option<Outcome>) {
    let mut parser = IniParser::new(options);

    let mut from_reader = Vec::new();
    let reader_err = parser
        .parse_reader(BufReader::with_capacity(step, Trickle { data, step }), |event| {
            from_reader.push(event.to_owned_event());
            Ok::<_, Infallible>(())
        })
        .err()
        .map(|err| (err.line, err.to_string()));

    // `parse_str` only sees valid UTF-8, so compare the two paths there.
    let Ok(text) = std::str::from_utf8(data) else {
        return ((from_reader, reader_err), None);
    };
    let mut from_str = Vec::new();
    let str_err = parser
        .parse_str(text, |event| {
            from_str.push(event.to_owned_event());
            Ok::<_, Infallible>(())
        })
        .err()
        .map(|err| (err.line, err.to_string()));

    ((from_reader, reader_err), Some((from_str, str_err)))
}

fn parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let step = (u32::from_le_bytes(data[1..5].try_into().unwrap()) as usize % 17) + 1;
    let data = &data[HEADER..];

    let options = ParserOptions {
        allow_hash_comments: flags & 1 != 0,
        preserve_section_case: flags & 2 != 0,
    };

    let (reader, from_str) = run(data, options, step);
    if let Some(from_str) = from_str {
        // Both paths trim line terminators, so `\n` and `\r\n` agree.
        assert_eq!(reader, from_str);
    }
}

fuzz_target!(|data: &[u8]| parser(data));
