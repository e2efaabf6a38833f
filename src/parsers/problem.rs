//! Provides parsers for problem definitions.

use crate::parsed_types::Problem;
use crate::parsers::{
    literal, parse_name, parse_prop_condition, parse_requirements, prefix_expr,
    space_separated_list0, typed_list, Parser,
};
use crate::parsers::{ParseResult, Span};
use nom::combinator::{map, opt};
use nom::sequence::tuple;

/// Parses a problem definition.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_problem, Span};
/// # use groundplan::parsed_types::*;
/// let input = r#"(define (problem sussman)
///     (:domain blocksworld)
///     (:objects a b c - block)
///     (:init (on c a) (ontable a) (ontable b) (clear c) (clear b) (handempty))
///     (:goal (and (on a b) (on b c))))"#;
///
/// let (remainder, problem) = parse_problem(Span::new(input)).unwrap();
///
/// assert!(remainder.is_empty());
/// assert_eq!(problem.name(), &Name::new("sussman"));
/// assert_eq!(problem.domain(), &Name::new("blocksworld"));
/// assert_eq!(problem.objects().len(), 3);
/// assert_eq!(problem.init().len(), 6);
/// ```
pub fn parse_problem<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Problem> {
    map(
        prefix_expr(
            "define",
            tuple((
                prefix_expr("problem", parse_name),
                prefix_expr(":domain", parse_name),
                opt(parse_requirements),
                opt(prefix_expr(":objects", typed_list(parse_name))),
                prefix_expr(":init", space_separated_list0(literal(parse_name))),
                prefix_expr(":goal", parse_prop_condition),
            )),
        ),
        |(name, domain, requirements, objects, init, goal)| {
            Problem::new(
                name,
                domain,
                requirements.unwrap_or_default(),
                objects.unwrap_or_default(),
                init,
                goal,
            )
        },
    )(input.into())
}

impl Parser for Problem {
    type Item = Problem;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_problem(input)
    }
}
