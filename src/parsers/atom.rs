//! Provides parsers for atoms and literals.

use crate::parsed_types::{Atom, Literal};
use crate::parsers::{parens, parse_name, prefix_expr, space_separated_list0};
use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::combinator::map;
use nom::sequence::pair;

/// Parses an atom, i.e. `(<predicate> t*)`.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{atom, parse_name, Span};
/// # use groundplan::parsed_types::*;
/// let (_, parsed) = atom(parse_name)(Span::new("(candidate paper1 query1)")).unwrap();
/// assert_eq!(
///     parsed,
///     Atom::new("candidate", vec![Name::new("paper1"), Name::new("query1")])
/// );
/// ```
pub fn atom<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Atom<O>>
where
    F: Clone + FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    map(
        parens(pair(parse_name, space_separated_list0(inner))),
        |(predicate_name, values)| Atom::new(predicate_name, values),
    )
}

/// Parses a literal, i.e. an atom or `(not <atom>)`.
pub fn literal<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Literal<O>>
where
    F: Clone + FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    alt((
        map(prefix_expr("not", atom(inner.clone())), Literal::new_not),
        map(atom(inner), Literal::new),
    ))
}
