//! Bracket-balanced token segmentation.
//!
//! A *segment* is either a single non-bracket token or a whole balanced
//! bracket group including its delimiters. Matchers advance through a
//! slice segment by segment, which is what makes a bracketed unit opaque
//! to the separators inside it: the top level of `{a, b}` is one segment,
//! so its comma is invisible to the tuple matcher.

use crate::error::ParseError;
use lax_ir::{Symbol, Token, TokenKind};
use smallvec::SmallVec;

/// Return the segment starting at `start`.
///
/// Consumes tokens until the bracket stack empties. An unterminated group
/// simply runs to the end of input. A closer met with an empty stack ends
/// the segment before it is consumed (so a segment starting on a closer
/// is empty); only a closer that mismatches the popped opener is an
/// error. `start` past the end yields an empty segment.
pub(crate) fn next_segment<'t>(
    tokens: &'t [Token],
    start: usize,
) -> Result<&'t [Token], ParseError> {
    let mut stack: SmallVec<[Symbol; 8]> = SmallVec::new();
    let mut i = start;
    while i < tokens.len() {
        if let TokenKind::Symbol(symbol) = tokens[i].kind {
            if let Some(close) = symbol.matching_close() {
                stack.push(close);
            } else if symbol.is_close_bracket() {
                match stack.pop() {
                    Some(expected) if expected == symbol => {}
                    Some(_) => return Err(ParseError::unmatched_bracket(&tokens[i])),
                    None => return Ok(&tokens[start..i]),
                }
            }
        }
        i += 1;
        if stack.is_empty() {
            break;
        }
    }
    Ok(&tokens[start..i])
}

/// Split a slice on a top-level single-token separator.
///
/// Returns the partitions (empty ones included) and the separator count.
/// A stray closer ends the walk; whatever follows it is not partitioned.
pub(crate) fn split_top_level<'t>(
    tokens: &'t [Token],
    sep: Symbol,
) -> Result<(Vec<&'t [Token]>, usize), ParseError> {
    let mut partitions = Vec::new();
    let mut separators = 0;
    let mut part_start = 0;
    let mut i = 0;
    while i < tokens.len() {
        let segment = next_segment(tokens, i)?;
        if segment.is_empty() {
            break;
        }
        if segment.len() == 1 && segment[0].is_symbol(sep) {
            partitions.push(&tokens[part_start..i]);
            separators += 1;
            part_start = i + 1;
        }
        i += segment.len();
    }
    partitions.push(&tokens[part_start..i]);
    Ok((partitions, separators))
}

/// Index of the first top-level occurrence of `sym`, if any.
pub(crate) fn find_top_level(tokens: &[Token], sym: Symbol) -> Result<Option<usize>, ParseError> {
    let mut i = 0;
    while i < tokens.len() {
        let segment = next_segment(tokens, i)?;
        if segment.is_empty() {
            break;
        }
        if segment.len() == 1 && segment[0].is_symbol(sym) {
            return Ok(Some(i));
        }
        i += segment.len();
    }
    Ok(None)
}
