/// Configuration options for the INI parser.
///
/// The defaults accept exactly the minimal grammar: `;` comments, `[section]`
/// headers folded to lower case, and `key = value` lines.
///
/// # Examples
///
/// ```rust
/// use inimodem::{IniParser, ParserOptions};
///
/// let parser = IniParser::new(ParserOptions {
///     allow_hash_comments: true,
///     ..Default::default()
/// });
/// ```
///
/// # Default
///
/// All options default to `false`.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether a line whose first non-whitespace character is `#` is a
    /// comment, in addition to `;`.
    ///
    /// When `false`, such a line is parsed as a key/value line and usually
    /// fails with a syntax error.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_hash_comments: bool,

    /// Whether section names keep the case they were written in.
    ///
    /// By default section names are folded to ASCII lower case, so `[Server]`
    /// and `[SERVER]` name the same section. Keys and values are never folded.
    ///
    /// # Default
    ///
    /// `false`
    pub preserve_section_case: bool,
}
