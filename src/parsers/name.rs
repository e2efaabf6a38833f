//! Provides parsers for names, variables, terms and types.

use crate::parsed_types::{Name, Term, Type, Variable};
use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::character::complete::{char, satisfy};
use nom::combinator::{map, recognize};
use nom::error::context;
use nom::multi::many0_count;
use nom::sequence::{pair, preceded};

pub(crate) fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Parses a name, i.e. a letter followed by letters, digits, `-` or `_`.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_name, Span};
/// let (remainder, name) = parse_name(Span::new("web-result_1)")).unwrap();
/// assert_eq!(name, "web-result_1");
/// assert_eq!(remainder.fragment(), &")");
///
/// assert!(parse_name(Span::new("-name")).is_err());
/// assert!(parse_name(Span::new("1name")).is_err());
/// ```
pub fn parse_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Name> {
    map(
        context(
            "name",
            recognize(pair(
                satisfy(|c| c.is_alphabetic()),
                many0_count(satisfy(is_name_char)),
            )),
        ),
        |span: Span| Name::new(span.fragment()),
    )(input.into())
}

/// Parses a variable, i.e. `?name`.
pub fn parse_variable<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Variable> {
    map(preceded(char('?'), parse_name), Variable::new)(input.into())
}

/// Parses a term, i.e. a name or a variable.
pub fn parse_term<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Term> {
    alt((
        map(parse_name, Term::Name),
        map(parse_variable, Term::Variable),
    ))(input.into())
}

/// Parses a primitive type.
pub fn parse_type<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Type> {
    map(context("type", parse_name), Type::new)(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_drops_question_mark() {
        let (_, variable) = parse_variable("?from").unwrap();
        assert_eq!(variable, Variable::from("from"));
        assert!(parse_variable("from").is_err());
    }

    #[test]
    fn term_distinguishes_names_and_variables() {
        assert_eq!(parse_term("b1").unwrap().1, Term::new_name("b1"));
        assert_eq!(parse_term("?x").unwrap().1, Term::new_variable("x"));
    }

    #[test]
    fn names_preserve_case() {
        assert_eq!(parse_name("Paper1").unwrap().1, "Paper1");
    }
}
