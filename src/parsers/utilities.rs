//! Utility parsers.

use crate::parsers::name::is_name_char;
use crate::parsers::{ignore_whitespace_and_comments, ParseResult, Span};
use nom::bytes::complete::tag;
use nom::character::complete::{char, satisfy};
use nom::combinator::{cut, not};
use nom::multi::{many0, many1};
use nom::sequence::{delimited, pair, preceded, terminated};

/// A combinator that matches the literal `word`, but only if it is not
/// immediately followed by a character that could continue a name. This keeps
/// `and` from matching the start of `android`.
pub fn keyword<'a>(word: &'a str) -> impl FnMut(Span<'a>) -> ParseResult<'a, Span<'a>> {
    terminated(tag(word), not(satisfy(is_name_char)))
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes a leading `(name` and trailing `)`, returning the output of `inner`.
/// Once `(name` has matched, failures are not backtracked over.
pub fn prefix_expr<'a, F, O>(name: &'a str, inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(
        pair(leading_whitespace(char('(')), leading_whitespace(keyword(name))),
        cut(terminated(
            leading_whitespace(inner),
            leading_whitespace(char(')')),
        )),
    )
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading whitespace, returning the output of `inner`. This parser
/// also suppresses line comments.
pub fn leading_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(ignore_whitespace_and_comments, inner)
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes a whitespace separated list, returning the outputs of `inner`.
pub fn space_separated_list0<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    many0(leading_whitespace(inner))
}

/// Like [`space_separated_list0`], but requires at least one element.
pub fn space_separated_list1<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    many1(leading_whitespace(inner))
}

/// A combinator that takes a parser `inner` and produces a parser that consumes
/// surrounding parentheses, returning the outputs of `inner`.
pub fn parens<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(
        leading_whitespace(char('(')),
        leading_whitespace(inner),
        leading_whitespace(char(')')),
    )
}
