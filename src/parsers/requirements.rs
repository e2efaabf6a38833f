//! Provides parsers for requirements.

use crate::parsed_types::{Requirement, Requirements};
use crate::parsers::name::is_name_char;
use crate::parsers::{prefix_expr, space_separated_list1};
use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::combinator::{map, recognize};
use nom::error::{context, make_error, ErrorKind};
use nom::sequence::pair;
use std::str::FromStr;

/// Parses a requirement key, e.g. `:negative-preconditions`. Every PDDL key is
/// recognised; whether it is supported is decided later.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_requirement_key, Span};
/// # use groundplan::parsed_types::Requirement;
/// let (_, key) = parse_requirement_key(Span::new(":equality")).unwrap();
/// assert_eq!(key, Requirement::Equality);
///
/// assert!(parse_requirement_key(Span::new(":no-such-thing")).is_err());
/// ```
pub fn parse_requirement_key<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Requirement> {
    let (remainder, key) = context(
        "requirement",
        recognize(pair(char(':'), take_while1(is_name_char))),
    )(input.into())?;
    match Requirement::from_str(key.fragment()) {
        Ok(requirement) => Ok((remainder, requirement)),
        Err(_) => Err(nom::Err::Error(make_error(key, ErrorKind::Tag))),
    }
}

/// Parses a requirements section, i.e. `(:requirements <key>+)`.
pub fn parse_requirements<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Requirements> {
    map(
        prefix_expr(":requirements", space_separated_list1(parse_requirement_key)),
        Requirements::new,
    )(input.into())
}
