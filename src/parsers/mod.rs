//! Parsers for the STRIPS subset of PDDL, producing [`crate::parsed_types`].

mod atom;
mod comments;
mod domain;
mod name;
mod plan;
mod problem;
mod prop_condition;
mod requirements;
mod typed_list;
mod utilities;

use crate::error::ParseError;
use nom_greedyerror::GreedyErrorKind;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    /// Parses a string slice into the desired type. Only whitespace and
    /// comments may follow the parsed value.
    fn from_str(input: &str) -> Result<Self::Item, ParseError> {
        let span = Span::new(input);
        let (remainder, value) = Self::parse(span).map_err(into_parse_error)?;
        let (remainder, _) = ignore_whitespace_and_comments(remainder).map_err(into_parse_error)?;
        if !remainder.is_empty() {
            return Err(ParseError {
                line: remainder.location_line(),
                column: remainder.get_utf8_column(),
                message: "unexpected trailing input".to_string(),
            });
        }
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type NomError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = NomError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Converts a nom error into a [`ParseError`] located at the furthest point
/// any alternative reached.
pub(crate) fn into_parse_error(error: nom::Err<NomError>) -> ParseError {
    let error = match error {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        nom::Err::Incomplete(_) => {
            return ParseError {
                line: 0,
                column: 0,
                message: "unexpected end of input".to_string(),
            }
        }
    };
    let context = error
        .errors
        .iter()
        .rev()
        .find_map(|(_, kind)| match kind {
            GreedyErrorKind::Context(context) => Some(*context),
            _ => None,
        });
    match error
        .errors
        .iter()
        .max_by_key(|(span, _)| span.location_offset())
    {
        Some((span, kind)) => {
            let mut message = match kind {
                GreedyErrorKind::Char(c) => format!("expected `{c}`"),
                GreedyErrorKind::Context(context) => format!("invalid {context}"),
                GreedyErrorKind::Nom(kind) => format!("unexpected input ({})", kind.description()),
            };
            if let Some(context) = context {
                if !matches!(kind, GreedyErrorKind::Context(_)) {
                    message = format!("{message} in {context}");
                }
            }
            if span.fragment().is_empty() {
                message.push_str(" at end of input");
            }
            ParseError {
                line: span.location_line(),
                column: span.get_utf8_column(),
                message,
            }
        }
        None => ParseError {
            line: 1,
            column: 1,
            message: "invalid input".to_string(),
        },
    }
}

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::Parser;
    pub use crate::parsers::{NomError, ParseResult, Span};
}

// Parsers
pub use comments::ignore_whitespace_and_comments;
pub use domain::{parse_action_definition, parse_domain, parse_predicate_definition};
pub use name::{parse_name, parse_term, parse_type, parse_variable};
pub use plan::{parse_plan, parse_plan_step};
pub use problem::parse_problem;
pub use prop_condition::{parse_prop_condition, parse_prop_effects};
pub use requirements::{parse_requirement_key, parse_requirements};

// Parser combinators
pub use atom::{atom, literal};
pub use typed_list::typed_list;

pub(crate) use utilities::{
    keyword, leading_whitespace, parens, prefix_expr, space_separated_list0,
    space_separated_list1,
};
