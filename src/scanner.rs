use regex::Regex;
use std::sync::OnceLock;

/// Returns `true` for the five characters HTML treats as whitespace.
///
/// Other Unicode whitespace (e.g. U+00A0) is deliberately not included.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{c}' | '\r')
}

/// The fixed character classes the parser scans for.
///
/// The `Leading*` classes are prefix matches used with [`Cursor::collect`]; the rest match a
/// whole string and are used through [`CharClass::is_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    LeadingSpaces,
    LeadingCommasOrSpaces,
    LeadingNotSpaces,
    TrailingCommas,
    NonNegativeInteger,
    /// `-?(digits | digits? . digits)` with an optional `e`/`E` exponent.
    FloatingPoint,
}

static LEADING_SPACES: OnceLock<Regex> = OnceLock::new();
static LEADING_COMMAS_OR_SPACES: OnceLock<Regex> = OnceLock::new();
static LEADING_NOT_SPACES: OnceLock<Regex> = OnceLock::new();
static TRAILING_COMMAS: OnceLock<Regex> = OnceLock::new();
static NON_NEGATIVE_INTEGER: OnceLock<Regex> = OnceLock::new();
static FLOATING_POINT: OnceLock<Regex> = OnceLock::new();

impl CharClass {
    fn regex(self) -> &'static Regex {
        // `\d` is Unicode-aware in the regex crate, so digits are spelled out as `[0-9]`.
        let (cell, pattern) = match self {
            CharClass::LeadingSpaces => (&LEADING_SPACES, r"^[ \t\n\r\x0C]+"),
            CharClass::LeadingCommasOrSpaces => (&LEADING_COMMAS_OR_SPACES, r"^[, \t\n\r\x0C]+"),
            CharClass::LeadingNotSpaces => (&LEADING_NOT_SPACES, r"^[^ \t\n\r\x0C]+"),
            CharClass::TrailingCommas => (&TRAILING_COMMAS, r",+$"),
            CharClass::NonNegativeInteger => (&NON_NEGATIVE_INTEGER, r"^[0-9]+$"),
            CharClass::FloatingPoint => (
                &FLOATING_POINT,
                r"^-?(?:[0-9]+|[0-9]*\.[0-9]+)(?:[eE][+-]?[0-9]+)?$",
            ),
        };
        cell.get_or_init(|| Regex::new(pattern).expect("Invalid regex"))
    }

    /// Whether `text` matches this class.
    pub(crate) fn is_match(self, text: &str) -> bool {
        self.regex().is_match(text)
    }
}

/// Strips every trailing comma from a URL token.
pub(crate) fn strip_trailing_commas(url: &str) -> &str {
    match CharClass::TrailingCommas.regex().find(url) {
        Some(m) => &url[..m.start()],
        None => url,
    }
}

/// A read position over a borrowed `srcset` value.
///
/// `pos` is a byte offset and always sits on a char boundary.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The character under the cursor, without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consumes the character under the cursor.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Input between `start` and the cursor.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Consumes the longest run matching `class` at the cursor and returns it.
    ///
    /// Returns an empty string and leaves the cursor in place when nothing matches.
    pub(crate) fn collect(&mut self, class: CharClass) -> &'a str {
        let rest = &self.input[self.pos..];
        match class.regex().find(rest) {
            Some(m) if m.start() == 0 && !m.as_str().is_empty() => {
                self.pos += m.end();
                m.as_str()
            }
            _ => "",
        }
    }
}
