//! Provides parsers for plans.

use crate::parsed_types::{Plan, PlanStep};
use crate::parsers::{parens, parse_name, space_separated_list0, Parser};
use crate::parsers::{ParseResult, Span};
use nom::combinator::map;
use nom::sequence::pair;

/// Parses a plan step, i.e. `(<action> <object>*)`.
pub fn parse_plan_step<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PlanStep> {
    map(
        parens(pair(parse_name, space_separated_list0(parse_name))),
        |(action_name, parameters)| PlanStep::new(action_name, parameters),
    )(input.into())
}

/// Parses a plan, i.e. a sequence of plan steps. Comments such as the
/// `; cost = 6 (unit cost)` footer written by most planners are ignored.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_plan, Span};
/// let input = "(unstack c a)\n(put-down c)\n; cost = 2 (unit cost)\n";
/// let (_, plan) = parse_plan(Span::new(input)).unwrap();
///
/// assert_eq!(plan.len(), 2);
/// assert_eq!(plan.steps()[0].to_string(), "(unstack c a)");
/// ```
pub fn parse_plan<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Plan> {
    map(space_separated_list0(parse_plan_step), Plan::new)(input.into())
}

impl Parser for Plan {
    type Item = Plan;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan(input)
    }
}
