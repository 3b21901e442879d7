//! Decoding of raw OBO tags and values.
//!
//! OBO uses the backslash as its escape character. Besides escapes, a raw value
//! may be a quoted string, may carry trailing modifiers (`{...}`) or an xref list
//! (`[...]`), and may end in a `!` comment. [`decode`] strips all of that and
//! returns only the literal text the value stands for.
//!
//! # Examples
//!
//! ```
//! use vocab_obo::escape::decode;
//!
//! let decoded = decode(r#""Abnormally long fingers." [HPO:probinson]"#);
//! assert_eq!(decoded.text, "Abnormally long fingers.");
//! assert!(decoded.quoted);
//!
//! let decoded = decode(r"Cowden syndrome {xref=PMID\:11073535} ! see also");
//! assert_eq!(decoded.text, "Cowden syndrome");
//! ```

use winnow::{
    combinator::{opt, preceded},
    prelude::*,
    token::{any, take_till, take_while},
};

/// The escape character.
pub const ESCAPE: char = '\\';

/// Two-character escape sequences and the literal they decode to.
///
/// Any escaped character missing from this table decodes to itself.
const ESCAPES: [(char, char); 15] = [
    ('n', '\n'),
    ('t', '\t'),
    ('W', ' '),
    (' ', ' '),
    (':', ':'),
    ('"', '"'),
    ('\\', '\\'),
    ('!', '!'),
    ('{', '{'),
    ('}', '}'),
    ('[', '['),
    (']', ']'),
    ('(', '('),
    (')', ')'),
    (',', ','),
];

/// Returns the literal character an escaped `c` stands for.
#[must_use]
pub fn unescape(c: char) -> char {
    ESCAPES
        .iter()
        .find_map(|&(escaped, literal)| (escaped == c).then_some(literal))
        .unwrap_or(c)
}

/// The result of decoding a raw tag or value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded literal text.
    pub text: String,
    /// Byte offset in the raw input where the meaningful part ends.
    ///
    /// For a quoted string this is just past the closing quote; for an
    /// unquoted value it is the start of the trailing comment, or the input
    /// length if there is none.
    pub end: usize,
    /// Whether the value was written as a quoted string.
    pub quoted: bool,
}

/// Decodes a raw tag or value into its literal text.
///
/// - A value whose first non-blank character is an unescaped `"` is a quoted
///   string. Everything up to the next unescaped `"` is kept verbatim (after
///   unescaping); everything after it is discarded. An unterminated quoted
///   string keeps the rest of the input.
/// - Otherwise `{...}` modifier blocks and `[...]` xref lists are dropped, an
///   unescaped `!` ends the value, and unescaped surrounding whitespace is
///   trimmed. A `"` anywhere but the start is an ordinary character.
///
/// This never fails: malformed input decodes on a best-effort basis.
#[must_use]
pub fn decode(raw: &str) -> Decoded {
    let mut input = raw.trim_start();
    let quoted = input.starts_with('"');
    let text = if quoted {
        quoted_string(&mut input)
    } else {
        unquoted_value(&mut input)
    };

    Decoded {
        text: text.unwrap_or_default(),
        end: raw.len() - input.len(),
        quoted,
    }
}

/// Shorthand for `decode(raw).text`.
#[must_use]
pub fn decode_text(raw: &str) -> String {
    decode(raw).text
}

/// Parse one escape sequence into the literal it stands for.
///
/// A lone escape at the end of input stands for itself.
fn escaped_char(input: &mut &str) -> PResult<char> {
    preceded(ESCAPE, opt(any))
        .map(|escaped: Option<char>| escaped.map_or(ESCAPE, unescape))
        .parse_next(input)
}

/// Parse a quoted string up to and including its closing quote.
fn quoted_string(input: &mut &str) -> PResult<String> {
    let _: char = '"'.parse_next(input)?;
    let mut text = String::new();

    loop {
        let chunk: &str = take_till(0.., ['"', ESCAPE]).parse_next(input)?;
        text.push_str(chunk);

        if input.is_empty() {
            tracing::trace!(text = %text, "unterminated quoted string");
            break;
        }
        if opt('"').parse_next(input)?.is_some() {
            break;
        }
        text.push(escaped_char.parse_next(input)?);
    }
    Ok(text)
}

/// Parse an unquoted value, stopping in front of an unescaped `!`.
fn unquoted_value(input: &mut &str) -> PResult<String> {
    let mut text = String::new();
    // Length of `text` up to and including the last escaped character, which
    // must survive trimming.
    let mut protected = 0;

    loop {
        let chunk: &str = take_till(0.., [ESCAPE, '!', '{', '[']).parse_next(input)?;
        text.push_str(if text.is_empty() {
            chunk.trim_start()
        } else {
            chunk
        });

        match input.chars().next() {
            Some(ESCAPE) => {
                text.push(escaped_char.parse_next(input)?);
                protected = text.len();
            }
            Some('{') => skip_block(input, '{', '}')?,
            Some('[') => skip_block(input, '[', ']')?,
            _ => break,
        }
    }

    let keep = text.trim_end().len().max(protected);
    text.truncate(keep);
    Ok(text)
}

/// Skip a `{...}` or `[...]` block, including nested blocks of the same kind.
///
/// An unterminated block swallows the rest of the input.
fn skip_block(input: &mut &str, mut open: char, mut close: char) -> PResult<()> {
    let _: char = open.parse_next(input)?;

    loop {
        let _: &str = take_till(0.., [open, close, ESCAPE]).parse_next(input)?;
        match input.chars().next() {
            Some(ESCAPE) => {
                let _: char = escaped_char.parse_next(input)?;
            }
            Some(c) if c == open => skip_block(input, open, close)?,
            Some(_) => {
                let _: char = close.parse_next(input)?;
                return Ok(());
            }
            None => return Ok(()),
        }
    }
}

/// Parse everything in front of the first unescaped `needle`.
///
/// The needle itself is left in the input; at end of input everything has
/// been consumed.
fn till_unescaped<'s>(input: &mut &'s str, needle: char) -> PResult<&'s str> {
    let start = *input;

    loop {
        let _: &str = take_till(0.., [needle, ESCAPE]).parse_next(input)?;
        if input.is_empty() || input.starts_with(needle) {
            break;
        }
        let _: char = escaped_char.parse_next(input)?;
    }
    Ok(&start[..start.len() - input.len()])
}

/// Parse a tag and the `:` after it; the value is whatever remains, minus
/// leading whitespace.
fn tag_value<'s>(input: &mut &'s str) -> PResult<(&'s str, &'s str)> {
    let tag = till_unescaped(input, ':')?;
    let _: char = ':'.parse_next(input)?;
    let _: &str = take_while(0.., char::is_whitespace).parse_next(input)?;
    Ok((tag, *input))
}

/// Finds the byte offset of the first unescaped occurrence of `needle`.
///
/// An occurrence is unescaped when it is preceded by an even number of
/// backslashes, including none.
#[must_use]
pub fn find_unescaped(line: &str, needle: char) -> Option<usize> {
    let mut input = line;
    let before = till_unescaped(&mut input, needle).ok()?;
    input.starts_with(needle).then_some(before.len())
}

/// Splits a logical line into its raw tag and raw value.
///
/// The split happens at the first unescaped `:`; whitespace following the
/// colon is not part of the value. Returns `None` for lines without an
/// unescaped colon.
#[must_use]
pub fn split_tag_value(line: &str) -> Option<(&str, &str)> {
    let mut input = line;
    tag_value(&mut input).ok()
}

/// Counts the backslashes at the very end of `line`.
#[must_use]
pub fn trailing_backslashes(line: &str) -> usize {
    line.chars().rev().take_while(|&c| c == ESCAPE).count()
}
