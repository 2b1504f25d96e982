//! Escape sequence processing.
//!
//! All three string forms (quoted, raw, Base64) share one escape rule set:
//! `\n`, `\t`, `\\`, `\<opening quote>`, and `\uXXXX`. Any other `\X` is
//! preserved verbatim as the two characters `\X`.

use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorKind};
use lax_ir::Span;

/// Consume one escape sequence and append its expansion to `out`.
///
/// The cursor must sit on the backslash. `quote` is the character that
/// opened the enclosing literal; `\<quote>` resolves to that character.
/// `token_start` anchors error spans to the start of the literal.
pub(crate) fn apply_escape(
    cursor: &mut Cursor<'_>,
    out: &mut String,
    quote: char,
    token_start: usize,
) -> Result<(), LexError> {
    cursor.advance_n(1); // backslash
    let Some(escape) = cursor.current_char() else {
        return Err(LexError::new(
            LexErrorKind::UnexpectedEof,
            Span::from_range(token_start..cursor.pos()),
        ));
    };
    cursor.advance_char();

    match escape {
        'n' => out.push('\n'),
        't' => out.push('\t'),
        '\\' => out.push('\\'),
        'u' => out.push(read_unicode_escape(cursor, token_start)?),
        c if c == quote => out.push(c),
        other => {
            // Unknown escapes pass through untouched.
            out.push('\\');
            out.push(other);
        }
    }
    Ok(())
}

/// Read the four hex digits of a `\uXXXX` escape.
///
/// Exactly four digits are required; short input, non-hex digits, and
/// surrogate code points are all malformed.
fn read_unicode_escape(cursor: &mut Cursor<'_>, token_start: usize) -> Result<char, LexError> {
    let digits = cursor.rest();
    let malformed = |end: usize| {
        LexError::new(
            LexErrorKind::MalformedUnicodeEscape,
            Span::from_range(token_start..end),
        )
    };
    if digits.len() < 4 || !digits.is_char_boundary(4) {
        return Err(malformed(cursor.source_len()));
    }
    let hex = &digits[..4];
    let code = u32::from_str_radix(hex, 16).map_err(|_| malformed(cursor.pos() + 4))?;
    let c = char::from_u32(code).ok_or_else(|| malformed(cursor.pos() + 4))?;
    cursor.advance_n(4);
    Ok(c)
}
