//! Provides parsers for preconditions, goals and effects.

use crate::parsed_types::{PropCondition, PropEffect};
use crate::parsers::{atom, leading_whitespace, parse_term, prefix_expr, space_separated_list0};
use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::combinator::map;
use nom::error::context;
use nom::sequence::pair;

/// Parser for preconditions and goals.
///
/// ## Examples
/// ```
/// # use groundplan::parsers::{parse_prop_condition, Span};
/// # use groundplan::parsed_types::*;
/// let (_, condition) = parse_prop_condition(Span::new(
///     "(and (can-verify ?v) (not (= ?v ?r)) (not (answer-verified ?a)))",
/// ))
/// .unwrap();
///
/// assert_eq!(
///     condition,
///     PropCondition::new_and([
///         PropCondition::new_atom(Atom::new("can-verify", vec![Term::new_variable("v")])),
///         PropCondition::new_not(PropCondition::new_equality(
///             Term::new_variable("v"),
///             Term::new_variable("r"),
///         )),
///         PropCondition::new_not(PropCondition::new_atom(Atom::new(
///             "answer-verified",
///             vec![Term::new_variable("a")],
///         ))),
///     ])
/// );
/// ```
pub fn parse_prop_condition<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PropCondition> {
    let and = map(
        prefix_expr("and", space_separated_list0(parse_prop_condition)),
        PropCondition::new_and,
    );
    let not = map(prefix_expr("not", parse_prop_condition), PropCondition::new_not);
    let equality = map(
        prefix_expr("=", pair(parse_term, leading_whitespace(parse_term))),
        |(left, right)| PropCondition::new_equality(left, right),
    );
    let atom = map(atom(parse_term), PropCondition::new_atom);

    context("condition", alt((and, not, equality, atom)))(input.into())
}

fn parse_prop_effect<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PropEffect> {
    alt((
        map(prefix_expr("not", atom(parse_term)), PropEffect::new_delete),
        map(atom(parse_term), PropEffect::new_add),
    ))(input.into())
}

/// Parser for action effects, i.e. a single (negated) atom or a conjunction
/// of them.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_prop_effects, Span};
/// # use groundplan::parsed_types::*;
/// let (_, effects) = parse_prop_effects(Span::new(
///     "(and (analyzed ?p) (not (query-pending ?q)))",
/// ))
/// .unwrap();
///
/// assert_eq!(effects.len(), 2);
/// assert!(matches!(effects[0], PropEffect::Add(_)));
/// assert!(matches!(effects[1], PropEffect::Delete(_)));
/// ```
pub fn parse_prop_effects<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<PropEffect>> {
    context(
        "effect",
        alt((
            prefix_expr("and", space_separated_list0(parse_prop_effect)),
            map(parse_prop_effect, |effect| vec![effect]),
        )),
    )(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{Atom, Term};

    #[test]
    fn single_atom_condition() {
        let (_, condition) = parse_prop_condition("(role-active ?r)").unwrap();
        assert_eq!(
            condition,
            PropCondition::new_atom(Atom::new("role-active", vec![Term::new_variable("r")]))
        );
    }

    #[test]
    fn empty_conjunction() {
        let (_, condition) = parse_prop_condition("(and)").unwrap();
        assert_eq!(condition, PropCondition::empty());
    }

    #[test]
    fn nested_conjunctions_are_kept() {
        let (_, condition) = parse_prop_condition("(and (a) (and (b) (c)))").unwrap();
        match condition {
            PropCondition::And(conditions) => {
                assert_eq!(conditions.len(), 2);
                assert!(matches!(conditions[1], PropCondition::And(_)));
            }
            other => panic!("expected a conjunction, got {other}"),
        }
    }

    #[test]
    fn disjunction_is_rejected() {
        assert!(parse_prop_condition("(or (a) (b))").is_err());
    }

    #[test]
    fn single_effect() {
        let (_, effects) = parse_prop_effects("(not (role-active ?r))").unwrap();
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], PropEffect::Delete(_)));
    }

    #[test]
    fn conditional_effect_is_rejected() {
        assert!(parse_prop_effects("(when (a) (b))").is_err());
    }
}
