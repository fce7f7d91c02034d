//! A small JSON grammar built purely on the public combinator surface,
//! exercising the library end-to-end: recursive values, backtracking across
//! alternatives, delimiter-separated lists, defaulting, and positioned
//! failures.

use std::collections::HashMap;

use retrace::and::AndExt;
use retrace::between::between;
use retrace::cursor::Cursor;
use retrace::drop_left::drop_left;
use retrace::drop_right::drop_right;
use retrace::end::end;
use retrace::many::many;
use retrace::map::MapExt;
use retrace::maybe::maybe;
use retrace::one::is;
use retrace::or::OrExt;
use retrace::or_default::or_default;
use retrace::separated_list::separated_list;
use retrace::text::{any_char, clear, concat, digits, match_str, none_char, parse_str, whitespace};
use retrace::try_map::TryMapExt;
use retrace::{ParseResult, Parser};

#[derive(Debug, Clone, PartialEq)]
enum Json {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Json>),
    Object(HashMap<String, Json>),
}

/// A JSON value is a string, number, boolean, null, array or object,
/// possibly surrounded by whitespace.
fn value(cursor: &mut Cursor<'_, char>) -> ParseResult<Json> {
    clear(string_literal().map(Json::String))
        .or(clear(number()))
        .or(clear(match_str("false").map(|_| Json::Boolean(false))))
        .or(clear(match_str("true").map(|_| Json::Boolean(true))))
        .or(clear(match_str("null").map(|_| Json::Null)))
        .or(clear(array()))
        .or(clear(object()))
        .parse(cursor)
}

fn escaped_char() -> impl Parser<char, Output = char> {
    drop_left(is('\\'), any_char("\"\\/bfnrt")).map(|c| match c {
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    })
}

fn string_literal() -> impl Parser<char, Output = String> {
    between(is('"'), many(escaped_char().or(none_char("\"\\"))), is('"')).map(concat)
}

fn exponent() -> impl Parser<char, Output = String> {
    drop_left(
        any_char("eE"),
        or_default(any_char("-+").map(|c: char| c.to_string()), String::new()).and(digits()),
    )
    .map(|(sign, digits)| format!("e{sign}{digits}"))
}

fn number() -> impl Parser<char, Output = Json> {
    or_default(any_char("-+").map(|c| c == '-'), false)
        .and(digits())
        .and(maybe(drop_left(is('.'), digits())))
        .and(maybe(exponent()))
        .try_map(|(((negative, integer), fraction), exponent)| {
            let mut text = String::new();
            if negative {
                text.push('-');
            }
            text.push_str(&integer);
            if let Some(fraction) = fraction {
                text.push('.');
                text.push_str(&fraction);
            }
            if let Some(exponent) = exponent {
                text.push_str(&exponent);
            }
            text.parse::<f64>().map(Json::Number)
        })
}

fn array() -> impl Parser<char, Output = Json> {
    between(
        is('['),
        or_default(separated_list(value, is(',')), Vec::new()),
        drop_left(whitespace(), is(']')),
    )
    .map(Json::Array)
}

fn member(cursor: &mut Cursor<'_, char>) -> ParseResult<(String, Json)> {
    clear(string_literal())
        .and(is(':'))
        .and(value)
        .map(|((key, _), val)| (key, val))
        .parse(cursor)
}

fn object() -> impl Parser<char, Output = Json> {
    between(
        is('{'),
        or_default(separated_list(member, is(',')), Vec::new()),
        drop_left(whitespace(), is('}')),
    )
    .map(|members: Vec<(String, Json)>| Json::Object(members.into_iter().collect()))
}

fn parse_json(input: &str) -> ParseResult<Json> {
    parse_str(&drop_right(value, end()), input)
}

#[test]
fn test_scalars() {
    assert_eq!(parse_json("null"), Ok(Json::Null));
    assert_eq!(parse_json("true"), Ok(Json::Boolean(true)));
    assert_eq!(parse_json("false"), Ok(Json::Boolean(false)));
}

#[test]
fn test_integers() {
    assert_eq!(parse_json("0"), Ok(Json::Number(0.0)));
    assert_eq!(parse_json("42"), Ok(Json::Number(42.0)));
    assert_eq!(parse_json("-17"), Ok(Json::Number(-17.0)));
}

#[test]
fn test_fractions_and_exponents() {
    assert_eq!(parse_json("3.25"), Ok(Json::Number(3.25)));
    assert_eq!(parse_json("-0.5"), Ok(Json::Number(-0.5)));
    assert_eq!(parse_json("1e2"), Ok(Json::Number(100.0)));
    assert_eq!(parse_json("2.5e-3"), Ok(Json::Number(0.0025)));
    assert_eq!(parse_json("6.02E23"), Ok(Json::Number(6.02e23)));
}

#[test]
fn test_strings() {
    assert_eq!(parse_json("\"hello\""), Ok(Json::String("hello".to_string())));
    assert_eq!(parse_json("\"\""), Ok(Json::String(String::new())));
    assert_eq!(
        parse_json("\"héllo wörld\""),
        Ok(Json::String("héllo wörld".to_string()))
    );
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        parse_json(r#""a\"b\\c""#),
        Ok(Json::String("a\"b\\c".to_string()))
    );
    assert_eq!(
        parse_json(r#""line\nbreak\ttab""#),
        Ok(Json::String("line\nbreak\ttab".to_string()))
    );
    assert_eq!(parse_json(r#""\/""#), Ok(Json::String("/".to_string())));
}

#[test]
fn test_unterminated_string_fails() {
    assert!(parse_json("\"abc").is_err());
}

#[test]
fn test_arrays() {
    assert_eq!(
        parse_json("[1,2,3]"),
        Ok(Json::Array(vec![
            Json::Number(1.0),
            Json::Number(2.0),
            Json::Number(3.0)
        ]))
    );
    assert_eq!(
        parse_json("[true, null]"),
        Ok(Json::Array(vec![Json::Boolean(true), Json::Null]))
    );
}

#[test]
fn test_empty_array() {
    assert_eq!(parse_json("[]"), Ok(Json::Array(vec![])));
    assert_eq!(parse_json("[ ]"), Ok(Json::Array(vec![])));
}

#[test]
fn test_nested_arrays() {
    assert_eq!(
        parse_json("[[1], [2, [3]]]"),
        Ok(Json::Array(vec![
            Json::Array(vec![Json::Number(1.0)]),
            Json::Array(vec![
                Json::Number(2.0),
                Json::Array(vec![Json::Number(3.0)])
            ]),
        ]))
    );
}

#[test]
fn test_objects() {
    let parsed = parse_json(r#"{"a": 1, "b": true}"#).unwrap();
    let mut expected = HashMap::new();
    expected.insert("a".to_string(), Json::Number(1.0));
    expected.insert("b".to_string(), Json::Boolean(true));
    assert_eq!(parsed, Json::Object(expected));
}

#[test]
fn test_empty_object() {
    assert_eq!(parse_json("{}"), Ok(Json::Object(HashMap::new())));
    assert_eq!(parse_json("{ }"), Ok(Json::Object(HashMap::new())));
}

#[test]
fn test_nested_structures_with_whitespace() {
    let input = r#"
        {
            "name": "retrace",
            "tags": [ "parser", "combinator" ],
            "meta": { "stars": 3, "pi": 3.14 }
        }
    "#;
    let parsed = parse_json(input).unwrap();

    let mut meta = HashMap::new();
    meta.insert("stars".to_string(), Json::Number(3.0));
    meta.insert("pi".to_string(), Json::Number(3.14));

    let mut expected = HashMap::new();
    expected.insert("name".to_string(), Json::String("retrace".to_string()));
    expected.insert(
        "tags".to_string(),
        Json::Array(vec![
            Json::String("parser".to_string()),
            Json::String("combinator".to_string()),
        ]),
    );
    expected.insert("meta".to_string(), Json::Object(meta));

    assert_eq!(parsed, Json::Object(expected));
}

#[test]
fn test_duplicate_keys_last_wins() {
    let parsed = parse_json(r#"{"k": 1, "k": 2}"#).unwrap();
    let mut expected = HashMap::new();
    expected.insert("k".to_string(), Json::Number(2.0));
    assert_eq!(parsed, Json::Object(expected));
}

#[test]
fn test_trailing_input_rejected() {
    let error = parse_json("null x").unwrap_err();
    // "null" plus the trailing space are consumed; the check fails on 'x'.
    assert_eq!(error.position(), 5);
    assert!(error.to_string().contains("expected end of input"));
}

#[test]
fn test_garbage_input_fails_at_start() {
    let chars: Vec<char> = "nope".chars().collect();
    let mut cursor = Cursor::new(&chars);

    assert!(value(&mut cursor).is_err());
    // Every alternative was rolled back; nothing leaked.
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.checkpoint_depth(), 0);
}

#[test]
fn test_malformed_structures_fail() {
    assert!(parse_json("[1, ]").is_err());
    assert!(parse_json("{\"a\" 1}").is_err());
    assert!(parse_json("[1, 2").is_err());
    assert!(parse_json("").is_err());
}

#[test]
fn test_grammar_is_reusable() {
    assert_eq!(parse_json("[1]"), parse_json("[1]"));
    assert_eq!(parse_json("7"), Ok(Json::Number(7.0)));
    assert_eq!(parse_json("7"), Ok(Json::Number(7.0)));
}
