//! ASCII whitespace trimming.
//!
//! Whitespace here is the C `isspace` set in the "C" locale, which unlike
//! [`u8::is_ascii_whitespace`] includes the vertical tab (`\x0B`).

/// Returns `true` for space, `\t`, `\n`, `\x0B`, `\x0C` and `\r`.
#[inline]
#[must_use]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strips leading and trailing whitespace.
#[inline]
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Strips leading whitespace.
#[inline]
#[must_use]
pub fn ltrim(s: &str) -> &str {
    s.trim_start_matches(is_space)
}

/// Strips trailing whitespace.
#[inline]
#[must_use]
pub fn rtrim(s: &str) -> &str {
    s.trim_end_matches(is_space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_c_whitespace_set() {
        assert_eq!(trim(" \t\x0B\x0Ckey\r\n"), "key");
        assert_eq!(ltrim("  a b  "), "a b  ");
        assert_eq!(rtrim("  a b  "), "  a b");
    }

    #[test]
    fn leaves_unicode_whitespace_alone() {
        assert_eq!(trim("\u{00A0}x\u{3000}"), "\u{00A0}x\u{3000}");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(trim(" \r\n"), "");
        assert_eq!(ltrim(""), "");
    }
}
