//! Grammar matchers.
//!
//! Each matcher inspects a whole token slice and either claims it
//! (`Ok(Some(expr))`), declines (`Ok(None)`) so the next matcher in
//! [`crate::parse_expr`]'s fixed order can try, or fails. Matchers look
//! for their distinguishing operator among the *top-level* segments only;
//! once the operator is found the matcher is committed and sub-parse
//! errors propagate.
//!
//! Binary forms take the first segment as the left operand and everything
//! after the operator as the right operand, so chains associate to the
//! right: `a + b + c` is `a + (b + c)`.

use crate::error::ParseError;
use crate::parse_expr;
use crate::segment::{find_top_level, next_segment, split_top_level};
use lax_ir::{BinaryOp, Expr, Symbol, Token, TokenKind};
use tracing::debug;

type MatchResult = Result<Option<Expr>, ParseError>;

/// `a; b; c` — statement sequencing.
pub(crate) fn lines(tokens: &[Token], depth: usize) -> MatchResult {
    let (partitions, separators) = split_top_level(tokens, Symbol::Semi)?;
    if separators == 0 {
        return Ok(None);
    }
    let mut exprs = Vec::with_capacity(partitions.len());
    for partition in partitions {
        if !partition.is_empty() {
            exprs.push(parse_expr(partition, depth + 1)?);
        }
    }
    debug!(lines = exprs.len(), "matched statement lines");
    Ok(Some(Expr::Lines(exprs)))
}

/// `a, b, c` — tuple via top-level commas.
pub(crate) fn tuple(tokens: &[Token], depth: usize) -> MatchResult {
    let (partitions, separators) = split_top_level(tokens, Symbol::Comma)?;
    if separators == 0 {
        return Ok(None);
    }
    let mut items = Vec::with_capacity(partitions.len());
    for partition in partitions {
        if !partition.is_empty() {
            items.push(parse_expr(partition, depth + 1)?);
        }
    }
    debug!(items = items.len(), "matched tuple");
    Ok(Some(Expr::Tuple(items)))
}

/// `name : type := value` — the value run stays unevaluated.
pub(crate) fn declaration(tokens: &[Token], depth: usize) -> MatchResult {
    let name = next_segment(tokens, 0)?;
    if name.is_empty() {
        return Ok(None);
    }
    let mut i = name.len();
    if !tokens.get(i).is_some_and(|t| t.is_symbol(Symbol::Colon)) {
        return Ok(None);
    }
    i += 1;
    let ty = next_segment(tokens, i)?;
    if ty.is_empty() {
        return Ok(None);
    }
    i += ty.len();
    if !tokens.get(i).is_some_and(|t| t.is_symbol(Symbol::ColonEq)) {
        return Ok(None);
    }
    i += 1;
    let value = tokens[i..].to_vec();
    let name = parse_expr(name, depth + 1)?;
    let ty = parse_expr(ty, depth + 1)?;
    debug!(deferred_tokens = value.len(), "matched declaration");
    Ok(Some(Expr::Decl {
        name: Box::new(name),
        ty: Box::new(ty),
        value,
    }))
}

/// `left |> right`
pub(crate) fn pipe(tokens: &[Token], depth: usize) -> MatchResult {
    let Some((left, right)) = match_operands(tokens, depth, Symbol::PipeGt)? else {
        return Ok(None);
    };
    debug!("matched pipe");
    Ok(Some(Expr::Pipe {
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// `cond ? then : else` — the then-branch must be a single segment.
pub(crate) fn if_expr(tokens: &[Token], depth: usize) -> MatchResult {
    let cond = next_segment(tokens, 0)?;
    if cond.is_empty() {
        return Ok(None);
    }
    let mut i = cond.len();
    if !tokens.get(i).is_some_and(|t| t.is_symbol(Symbol::Question)) {
        return Ok(None);
    }
    i += 1;
    let then_branch = next_segment(tokens, i)?;
    if then_branch.is_empty() {
        return Ok(None);
    }
    i += then_branch.len();
    if !tokens.get(i).is_some_and(|t| t.is_symbol(Symbol::Colon)) {
        return Ok(None);
    }
    i += 1;
    let else_tokens = &tokens[i..];
    let cond = parse_expr(cond, depth + 1)?;
    let then_branch = parse_expr(then_branch, depth + 1)?;
    let else_branch = parse_expr(else_tokens, depth + 1)?;
    debug!("matched conditional");
    Ok(Some(Expr::If {
        cond: Box::new(cond),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    }))
}

/// `left + right`
pub(crate) fn concat(tokens: &[Token], depth: usize) -> MatchResult {
    binary_op(tokens, depth, |symbol| {
        (symbol == Symbol::Plus).then_some(BinaryOp::Concat)
    })
}

/// `left * right` / `left / right`
pub(crate) fn mul_div(tokens: &[Token], depth: usize) -> MatchResult {
    binary_op(tokens, depth, |symbol| match symbol {
        Symbol::Star => Some(BinaryOp::Mul),
        Symbol::Slash => Some(BinaryOp::Div),
        _ => None,
    })
}

/// `left :> right` — membership.
pub(crate) fn contains(tokens: &[Token], depth: usize) -> MatchResult {
    binary_op(tokens, depth, |symbol| {
        (symbol == Symbol::ColonGt).then_some(BinaryOp::Contains)
    })
}

/// `--key v1 v2 --key2 …` — argument groups.
pub(crate) fn argument(tokens: &[Token], depth: usize) -> MatchResult {
    if !tokens
        .first()
        .is_some_and(|t| t.is_symbol(Symbol::DashDash))
    {
        return Ok(None);
    }

    // Structure first: group the token runs, then parse. A malformed tail
    // (trailing `--` with no key) declines before any sub-parse runs.
    let mut groups: Vec<(&[Token], Vec<&[Token]>)> = Vec::new();
    let mut key: Option<&[Token]> = None;
    let mut values: Vec<&[Token]> = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].is_symbol(Symbol::DashDash) {
            if let Some(key) = key.take() {
                groups.push((key, std::mem::take(&mut values)));
            }
            i += 1;
            continue;
        }
        let segment = next_segment(tokens, i)?;
        if segment.is_empty() {
            break;
        }
        match key {
            None => key = Some(segment),
            Some(_) => values.push(segment),
        }
        i += segment.len();
    }
    let Some(key) = key else {
        return Ok(None);
    };
    groups.push((key, values));

    let mut parsed = Vec::with_capacity(groups.len());
    for (key_tokens, value_runs) in groups {
        let key = parse_expr(key_tokens, depth + 1)?;
        let values = value_runs
            .into_iter()
            .map(|run| parse_expr(run, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;
        parsed.push((key, values));
    }
    debug!(groups = parsed.len(), "matched argument group");
    Ok(Some(Expr::ArgGroup(parsed)))
}

/// `left -> right` — both sides tuple-coerced at evaluation.
pub(crate) fn function_type(tokens: &[Token], depth: usize) -> MatchResult {
    let Some((left, right)) = match_operands(tokens, depth, Symbol::Arrow)? else {
        return Ok(None);
    };
    debug!("matched function type");
    Ok(Some(Expr::FuncType {
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// `{k: v, …}` — mapping; every entry needs a top-level `:`.
pub(crate) fn dict(tokens: &[Token], depth: usize) -> MatchResult {
    let Some(inner) = delimited_inner(tokens, Symbol::LBrace, Symbol::RBrace)? else {
        return Ok(None);
    };
    let (partitions, _) = split_top_level(inner, Symbol::Comma)?;
    let mut entry_runs = Vec::with_capacity(partitions.len());
    for partition in partitions {
        if partition.is_empty() {
            continue;
        }
        let Some(colon) = find_top_level(partition, Symbol::Colon)? else {
            // An entry without `:` means this is a set, not a mapping.
            return Ok(None);
        };
        let key = &partition[..colon];
        let value = &partition[colon + 1..];
        if key.is_empty() || value.is_empty() {
            return Ok(None);
        }
        entry_runs.push((key, value));
    }

    let mut entries = Vec::with_capacity(entry_runs.len());
    for (key, value) in entry_runs {
        entries.push((parse_expr(key, depth + 1)?, parse_expr(value, depth + 1)?));
    }
    debug!(entries = entries.len(), "matched mapping");
    Ok(Some(Expr::Mapping(entries)))
}

/// `{a, b, c}` — set; no entry may contain a top-level `:`.
pub(crate) fn set(tokens: &[Token], depth: usize) -> MatchResult {
    let Some(inner) = delimited_inner(tokens, Symbol::LBrace, Symbol::RBrace)? else {
        return Ok(None);
    };
    let (partitions, _) = split_top_level(inner, Symbol::Comma)?;
    let mut entry_runs = Vec::with_capacity(partitions.len());
    for partition in partitions {
        if partition.is_empty() {
            continue;
        }
        if find_top_level(partition, Symbol::Colon)?.is_some() {
            return Ok(None);
        }
        entry_runs.push(partition);
    }
    let mut items = Vec::with_capacity(entry_runs.len());
    for run in entry_runs {
        items.push(parse_expr(run, depth + 1)?);
    }
    debug!(items = items.len(), "matched set");
    Ok(Some(Expr::Set(items)))
}

/// `[a, b, c]`
pub(crate) fn list(tokens: &[Token], depth: usize) -> MatchResult {
    let Some(inner) = delimited_inner(tokens, Symbol::LBracket, Symbol::RBracket)? else {
        return Ok(None);
    };
    let (partitions, _) = split_top_level(inner, Symbol::Comma)?;
    let mut items = Vec::with_capacity(partitions.len());
    for partition in partitions {
        if !partition.is_empty() {
            items.push(parse_expr(partition, depth + 1)?);
        }
    }
    debug!(items = items.len(), "matched list");
    Ok(Some(Expr::List(items)))
}

/// `(…)` — precedence grouping; evaluates to the inner expression.
pub(crate) fn grouping(tokens: &[Token], depth: usize) -> MatchResult {
    let Some(inner) = delimited_inner(tokens, Symbol::LParen, Symbol::RParen)? else {
        return Ok(None);
    };
    debug!("matched grouping");
    parse_expr(inner, depth + 1).map(Some)
}

/// Shared shape of the operator matchers: one leading segment, then the
/// operator token at the top level, then the rest of the slice. Returns
/// the operand token runs and the operator without committing to it.
fn split_binary<'t>(
    tokens: &'t [Token],
) -> Result<Option<(&'t [Token], Symbol, &'t [Token])>, ParseError> {
    let left = next_segment(tokens, 0)?;
    if left.is_empty() {
        return Ok(None);
    }
    let i = left.len();
    let Some(TokenKind::Symbol(symbol)) = tokens.get(i).map(|t| &t.kind) else {
        return Ok(None);
    };
    Ok(Some((left, *symbol, &tokens[i + 1..])))
}

/// Match `left <want> right` and parse both operands.
fn match_operands(
    tokens: &[Token],
    depth: usize,
    want: Symbol,
) -> Result<Option<(Expr, Expr)>, ParseError> {
    let Some((left, symbol, right)) = split_binary(tokens)? else {
        return Ok(None);
    };
    if symbol != want {
        return Ok(None);
    }
    let left = parse_expr(left, depth + 1)?;
    let right = parse_expr(right, depth + 1)?;
    Ok(Some((left, right)))
}

/// Match one of the eager value operators.
fn binary_op(
    tokens: &[Token],
    depth: usize,
    select: impl Fn(Symbol) -> Option<BinaryOp>,
) -> MatchResult {
    let Some((left, symbol, right)) = split_binary(tokens)? else {
        return Ok(None);
    };
    let Some(op) = select(symbol) else {
        return Ok(None);
    };
    let left = parse_expr(left, depth + 1)?;
    let right = parse_expr(right, depth + 1)?;
    debug!(op = op.as_str(), "matched binary operator");
    Ok(Some(Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// Accept `open … close` only when the whole slice is one balanced
/// segment; returns the inner tokens.
fn delimited_inner<'t>(
    tokens: &'t [Token],
    open: Symbol,
    close: Symbol,
) -> Result<Option<&'t [Token]>, ParseError> {
    if tokens.len() < 2 {
        return Ok(None);
    }
    if !tokens[0].is_symbol(open) || !tokens[tokens.len() - 1].is_symbol(close) {
        return Ok(None);
    }
    if next_segment(tokens, 0)?.len() != tokens.len() {
        return Ok(None);
    }
    Ok(Some(&tokens[1..tokens.len() - 1]))
}
