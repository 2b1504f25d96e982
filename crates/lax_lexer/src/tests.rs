use super::*;
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    match tokenize(src) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(error) => unreachable!("lexing {src:?} failed: {error}"),
    }
}

fn error_kind(src: &str) -> LexErrorKind {
    match tokenize(src) {
        Ok(tokens) => unreachable!("lexing {src:?} unexpectedly produced {tokens:?}"),
        Err(error) => error.kind,
    }
}

fn num(text: &str) -> TokenKind {
    TokenKind::Number(text.into())
}

fn string(text: &str) -> TokenKind {
    TokenKind::Str(text.into())
}

fn ident(text: &str) -> TokenKind {
    TokenKind::Ident(text.into())
}

fn sym(symbol: Symbol) -> TokenKind {
    TokenKind::Symbol(symbol)
}

// === Whitespace and positions ===

#[test]
fn empty_input_yields_no_tokens() {
    assert_eq!(kinds(""), vec![]);
    assert_eq!(kinds("  \t\r\n  "), vec![]);
}

#[test]
fn positions_are_byte_offsets() {
    let tokens = match tokenize("  42 x") {
        Ok(tokens) => tokens,
        Err(error) => unreachable!("{error}"),
    };
    assert_eq!(tokens[0].span, Span::new(2, 4));
    assert_eq!(tokens[1].span, Span::new(5, 6));
}

// === Numbers ===

#[test]
fn integer_and_float_forms() {
    assert_eq!(kinds("42"), vec![num("42")]);
    assert_eq!(kinds("3.14"), vec![num("3.14")]);
    assert_eq!(kinds(".5"), vec![num(".5")]);
    assert_eq!(kinds("1e3"), vec![num("1e3")]);
    assert_eq!(kinds("2.5E-8"), vec![num("2.5E-8")]);
    assert_eq!(kinds("1e+10"), vec![num("1e+10")]);
}

#[test]
fn trailing_dot_is_not_part_of_number() {
    assert_eq!(kinds("12."), vec![num("12"), sym(Symbol::Dot)]);
}

#[test]
fn incomplete_exponent_is_left_behind() {
    assert_eq!(
        kinds("1e+"),
        vec![num("1"), ident("e"), sym(Symbol::Plus)]
    );
}

#[test]
fn number_then_identifier() {
    assert_eq!(kinds("12ab"), vec![num("12"), ident("ab")]);
}

#[test]
fn consecutive_dotted_numbers() {
    assert_eq!(kinds("1.2.3"), vec![num("1.2"), num(".3")]);
}

#[test]
fn minus_is_a_symbol_at_lex_time() {
    assert_eq!(kinds("-1"), vec![sym(Symbol::Minus), num("1")]);
}

// === Comments ===

#[test]
fn line_comment_to_eol() {
    assert_eq!(
        kinds("1 // rest\n2"),
        vec![num("1"), TokenKind::Comment(" rest".into()), num("2")]
    );
}

#[test]
fn line_comment_at_eof() {
    assert_eq!(
        kinds("// tail"),
        vec![TokenKind::Comment(" tail".into())]
    );
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        kinds("1 /* a\nb */ 2"),
        vec![num("1"), TokenKind::Comment(" a\nb ".into()), num("2")]
    );
}

#[test]
fn block_comment_closes_at_first_fence() {
    assert_eq!(
        kinds("/* a */ */"),
        vec![
            TokenKind::Comment(" a ".into()),
            sym(Symbol::Star),
            sym(Symbol::Slash),
        ]
    );
}

#[test]
fn unterminated_block_comment_fails() {
    assert_eq!(error_kind("/* open"), LexErrorKind::UnterminatedBlockComment);
}

// === Quoted strings ===

#[test]
fn double_and_single_quotes() {
    assert_eq!(kinds("\"hi\""), vec![string("hi")]);
    assert_eq!(kinds("'hi'"), vec![string("hi")]);
}

#[test]
fn fullwidth_quotes_pair_up() {
    assert_eq!(kinds("“你好”"), vec![string("你好")]);
}

#[test]
fn quote_kinds_do_not_mix() {
    assert_eq!(
        error_kind("\"abc'"),
        LexErrorKind::UnterminatedString { open: '"' }
    );
    assert_eq!(
        error_kind("“abc\""),
        LexErrorKind::UnterminatedString { open: '“' }
    );
}

#[test]
fn escapes_in_quoted_strings() {
    assert_eq!(kinds(r#""a\nb""#), vec![string("a\nb")]);
    assert_eq!(kinds(r#""a\tb""#), vec![string("a\tb")]);
    assert_eq!(kinds(r#""a\"b""#), vec![string("a\"b")]);
    assert_eq!(kinds(r#""a\\b""#), vec![string("a\\b")]);
    assert_eq!(kinds(r#""\u0041""#), vec![string("A")]);
}

#[test]
fn unknown_escape_kept_verbatim() {
    assert_eq!(kinds(r#""a\qb""#), vec![string("a\\qb")]);
}

#[test]
fn multiline_quoted_string_is_allowed() {
    assert_eq!(kinds("\"a\nb\""), vec![string("a\nb")]);
}

#[test]
fn unterminated_string_fails() {
    assert_eq!(
        error_kind("\"abc"),
        LexErrorKind::UnterminatedString { open: '"' }
    );
}

#[test]
fn malformed_unicode_escape_fails() {
    assert_eq!(error_kind(r#""\u12""#), LexErrorKind::MalformedUnicodeEscape);
    assert_eq!(
        error_kind(r#""\uwxyz""#),
        LexErrorKind::MalformedUnicodeEscape
    );
}

// === Raw strings ===

#[test]
fn raw_string_with_delimiter() {
    assert_eq!(kinds("R\"xx(body)xx\""), vec![string("body")]);
}

#[test]
fn raw_string_empty_delimiter() {
    assert_eq!(kinds("R\"(body)\""), vec![string("body")]);
}

#[test]
fn raw_string_body_may_contain_quotes_and_parens() {
    assert_eq!(
        kinds("R\"zz(a \"b\" (c))zz\""),
        vec![string("a \"b\" (c)")]
    );
}

#[test]
fn raw_string_escapes_are_interpreted() {
    assert_eq!(kinds(r#"R"xx(hello\nworld)xx""#), vec![string("hello\nworld")]);
}

#[test]
fn raw_string_missing_open_paren_fails() {
    assert_eq!(error_kind("R\"xx"), LexErrorKind::UnterminatedRawString);
}

#[test]
fn raw_string_missing_terminator_fails() {
    assert_eq!(error_kind("R\"xx(body"), LexErrorKind::UnterminatedRawString);
}

// === Base64 strings ===

#[test]
fn base64_body_is_kept_raw() {
    assert_eq!(
        kinds("$\"aGVsbG8=\""),
        vec![TokenKind::Base64("aGVsbG8=".into())]
    );
}

#[test]
fn unterminated_base64_fails() {
    assert_eq!(error_kind("$\"aGVs"), LexErrorKind::UnterminatedBase64);
}

#[test]
fn dollar_without_quote_is_identifier() {
    assert_eq!(kinds("$x"), vec![ident("$x")]);
}

// === Operators ===

#[test]
fn two_char_operators_win_over_one_char() {
    assert_eq!(kinds("->"), vec![sym(Symbol::Arrow)]);
    assert_eq!(kinds(":>"), vec![sym(Symbol::ColonGt)]);
    assert_eq!(kinds(":="), vec![sym(Symbol::ColonEq)]);
    assert_eq!(kinds("|>"), vec![sym(Symbol::PipeGt)]);
    assert_eq!(kinds("--"), vec![sym(Symbol::DashDash)]);
    assert_eq!(kinds("- >"), vec![sym(Symbol::Minus), sym(Symbol::Gt)]);
}

#[test]
fn declaration_shaped_run() {
    assert_eq!(
        kinds("a:b:=1"),
        vec![
            ident("a"),
            sym(Symbol::Colon),
            ident("b"),
            sym(Symbol::ColonEq),
            num("1"),
        ]
    );
}

#[test]
fn brackets_lex_individually() {
    assert_eq!(
        kinds("{[()]}"),
        vec![
            sym(Symbol::LBrace),
            sym(Symbol::LBracket),
            sym(Symbol::LParen),
            sym(Symbol::RParen),
            sym(Symbol::RBracket),
            sym(Symbol::RBrace),
        ]
    );
}

// === Identifiers ===

#[test]
fn identifier_breaks_at_operator() {
    assert_eq!(
        kinds("abc+def"),
        vec![ident("abc"), sym(Symbol::Plus), ident("def")]
    );
}

#[test]
fn identifier_may_contain_non_ascii() {
    assert_eq!(kinds("名字"), vec![ident("名字")]);
}

#[test]
fn identifier_breaks_at_quote() {
    assert_eq!(kinds("ab\"c\""), vec![ident("ab"), string("c")]);
}

#[test]
fn keywords_lex_as_plain_identifiers() {
    assert_eq!(
        kinds("true null"),
        vec![ident("true"), ident("null")]
    );
}

#[test]
fn stray_closing_fullwidth_quote_fails() {
    assert_eq!(
        error_kind("”"),
        LexErrorKind::UnexpectedChar { found: '”' }
    );
}

// === Whole-stream shapes ===

#[test]
fn argument_group_stream() {
    assert_eq!(
        kinds("--a 1 --b 2 3"),
        vec![
            sym(Symbol::DashDash),
            ident("a"),
            num("1"),
            sym(Symbol::DashDash),
            ident("b"),
            num("2"),
            num("3"),
        ]
    );
}

#[test]
fn mapping_stream_with_comment() {
    assert_eq!(
        kinds("{name: /* inline */ \"张三\"}"),
        vec![
            sym(Symbol::LBrace),
            ident("name"),
            sym(Symbol::Colon),
            TokenKind::Comment(" inline ".into()),
            string("张三"),
            sym(Symbol::RBrace),
        ]
    );
}

// === Properties ===

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decimal_integers_lex_as_single_number(n in any::<i64>()) {
            let text = n.unsigned_abs().to_string();
            prop_assert_eq!(kinds(&text), vec![num(&text)]);
        }

        #[test]
        fn plain_identifiers_round_trip(
            name in "[a-zA-Z_][a-zA-Z0-9_]{0,12}",
        ) {
            prop_assert_eq!(kinds(&name), vec![ident(&name)]);
        }

        #[test]
        fn quoted_ascii_strings_round_trip(body in "[ a-zA-Z0-9_.,;:!?-]{0,24}") {
            let source = format!("\"{body}\"");
            prop_assert_eq!(kinds(&source), vec![string(&body)]);
        }

        #[test]
        fn comment_rejection_never_changes_other_tokens(
            left in "[0-9]{1,6}",
            comment in "[ a-zA-Z0-9]{0,12}",
            right in "[0-9]{1,6}",
        ) {
            let with = format!("{left} /*{comment}*/ {right}");
            let without = format!("{left} {right}");
            let with_tokens: Vec<TokenKind> =
                reject_comments(match tokenize(&with) {
                    Ok(tokens) => tokens,
                    Err(error) => return Err(TestCaseError::fail(error.to_string())),
                })
                .into_iter()
                .map(|t| t.kind)
                .collect();
            prop_assert_eq!(with_tokens, kinds(&without));
        }
    }
}
