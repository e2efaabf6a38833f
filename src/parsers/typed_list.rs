//! Provides parsers for typed lists.

use crate::parsed_types::{Typed, TypedList};
use crate::parsers::{leading_whitespace, parse_type, space_separated_list0, space_separated_list1};
use crate::parsers::{ParseResult, Span};
use nom::character::complete::char;
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::{pair, preceded};

/// Parses a typed list, i.e. `x1 x2 - type1 x3 - type2 x4`. Elements without
/// a trailing type belong to `object`.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_name, typed_list, Span};
/// # use groundplan::parsed_types::*;
/// let (_, list) = typed_list(parse_name)(Span::new("paper1 paper2 - paper web1 - webresult x")).unwrap();
///
/// assert_eq!(list.len(), 4);
/// assert_eq!(list[1], Name::new("paper2").to_typed("paper"));
/// assert_eq!(list[2], Name::new("web1").to_typed("webresult"));
/// assert_eq!(list[3], Typed::new_object(Name::new("x")));
/// ```
pub fn typed_list<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, TypedList<O>>
where
    F: Clone + FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    let typed_group = map(
        pair(
            space_separated_list1(inner.clone()),
            preceded(leading_whitespace(char('-')), leading_whitespace(parse_type)),
        ),
        |(values, r#type)| {
            values
                .into_iter()
                .map(|value| Typed::new(value, r#type))
                .collect::<Vec<_>>()
        },
    );

    map(
        pair(many0(typed_group), space_separated_list0(inner)),
        |(groups, untyped)| {
            groups
                .into_iter()
                .flatten()
                .chain(untyped.into_iter().map(Typed::new_object))
                .collect()
        },
    )
}
