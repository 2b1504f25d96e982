//! Token stream post-passes.
//!
//! `decode` applies [`reject_comments`] then [`fuse_signed_numbers`].
//! [`merge_adjacent_strings`] is available for cross-line string
//! concatenation but is not part of the default pipeline.

use lax_ir::{Span, Symbol, Token, TokenKind};

/// Drop every comment token.
pub fn reject_comments(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| !matches!(token.kind, TokenKind::Comment(_)))
        .collect()
}

/// Fuse a unary `-` into a following number.
///
/// The minus fuses when the number is the first token or the token before
/// the minus is a symbol, i.e. positions where a binary operand cannot
/// end: `[-1]`, `(x, -2)`, `--flag -3`. The look-behind inspects the
/// original stream, so `- - 1` fuses only the second minus.
pub fn fuse_signed_numbers(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let fusable = tokens[i].is_symbol(Symbol::Minus)
            && matches!(
                tokens.get(i + 1).map(|t| &t.kind),
                Some(TokenKind::Number(_))
            )
            && (i == 0 || matches!(tokens[i - 1].kind, TokenKind::Symbol(_)));
        if fusable {
            if let TokenKind::Number(digits) = &tokens[i + 1].kind {
                out.push(Token::new(
                    TokenKind::Number(format!("-{digits}")),
                    tokens[i].span.merge(tokens[i + 1].span),
                ));
            }
            i += 2;
        } else {
            out.push(tokens[i].clone());
            i += 1;
        }
    }
    out
}

/// Merge runs of adjacent string tokens into one.
///
/// The merged token covers the span of the whole run. Non-string tokens
/// (including comments, if still present) break a run.
pub fn merge_adjacent_strings(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut pending: Option<(String, Span)> = None;
    for token in tokens {
        match token.kind {
            TokenKind::Str(text) => match pending.as_mut() {
                Some((acc, span)) => {
                    acc.push_str(&text);
                    *span = span.merge(token.span);
                }
                None => pending = Some((text, token.span)),
            },
            _ => {
                if let Some((text, span)) = pending.take() {
                    out.push(Token::new(TokenKind::Str(text), span));
                }
                out.push(token);
            }
        }
    }
    if let Some((text, span)) = pending {
        out.push(Token::new(TokenKind::Str(text), span));
    }
    out
}
