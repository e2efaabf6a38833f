//! Provides parsers for domain definitions.

use crate::parsed_types::{
    ActionDefinition, Domain, PredicateDefinition, PropCondition, Requirements, TypedList,
};
use crate::parsers::{
    keyword, leading_whitespace, parens, parse_name, parse_prop_condition, parse_prop_effects,
    parse_requirements, parse_variable, prefix_expr, space_separated_list0, typed_list, Parser,
};
use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::character::complete::char;
use nom::combinator::{map, opt, value};
use nom::error::context;
use nom::sequence::{pair, preceded, tuple};

/// Parses a predicate definition, i.e. `(<name> <typed list (variable)>)`.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_predicate_definition, Span};
/// let (_, predicate) = parse_predicate_definition(Span::new("(candidate ?s - source ?q - query)")).unwrap();
/// assert_eq!(predicate.name(), "candidate");
/// assert_eq!(predicate.arity(), 2);
/// ```
pub fn parse_predicate_definition<'a, T: Into<Span<'a>>>(
    input: T,
) -> ParseResult<'a, PredicateDefinition> {
    map(
        parens(pair(parse_name, typed_list(parse_variable))),
        PredicateDefinition::from,
    )(input.into())
}

/// Parses an action definition. `:parameters`, `:precondition` and `:effect`
/// may each be omitted, and `()` stands for an empty precondition.
pub fn parse_action_definition<'a, T: Into<Span<'a>>>(
    input: T,
) -> ParseResult<'a, ActionDefinition> {
    let parameters = preceded(
        leading_whitespace(keyword(":parameters")),
        parens(typed_list(parse_variable)),
    );
    let precondition = preceded(
        leading_whitespace(keyword(":precondition")),
        leading_whitespace(alt((
            value(
                PropCondition::empty(),
                pair(char('('), leading_whitespace(char(')'))),
            ),
            parse_prop_condition,
        ))),
    );
    let effect = preceded(
        leading_whitespace(keyword(":effect")),
        leading_whitespace(parse_prop_effects),
    );

    map(
        context(
            "action definition",
            prefix_expr(
                ":action",
                tuple((parse_name, opt(parameters), opt(precondition), opt(effect))),
            ),
        ),
        |(name, parameters, precondition, effects)| {
            ActionDefinition::new(
                name,
                parameters.unwrap_or_default(),
                precondition.unwrap_or_else(PropCondition::empty),
                effects.unwrap_or_default(),
            )
        },
    )(input.into())
}

/// Parses a domain definition.
///
/// ## Example
/// ```
/// # use groundplan::parsers::{parse_domain, Span};
/// # use groundplan::parsed_types::*;
/// let input = r#"
/// ; the classic four-operator blocksworld
/// (define
///     (domain blocksworld)
///     (:requirements :strips :typing :negative-preconditions :equality)
///     (:types block)
///     (:predicates
///         (on ?x - block ?y - block)
///         (ontable ?x - block)
///         (clear ?x - block)
///         (handempty)
///         (holding ?x - block))
///
///     (:action pick-up
///         :parameters (?x - block)
///         :precondition (and (clear ?x) (ontable ?x) (handempty))
///         :effect (and (not (ontable ?x)) (not (clear ?x)) (not (handempty)) (holding ?x)))
///
///     (:action stack
///         :parameters (?x - block ?y - block)
///         :precondition (and (holding ?x) (clear ?y) (not (= ?x ?y)))
///         :effect (and (not (holding ?x)) (not (clear ?y)) (clear ?x) (handempty) (on ?x ?y))))
/// "#;
///
/// let (remainder, domain) = parse_domain(Span::new(input)).unwrap();
///
/// assert!(remainder.trim().is_empty());
/// assert_eq!(domain.name(), &Name::new("blocksworld"));
/// assert_eq!(domain.requirements().len(), 4);
/// assert_eq!(domain.types().len(), 1);
/// assert_eq!(domain.constants().len(), 0);
/// assert_eq!(domain.predicates().len(), 5);
/// assert_eq!(domain.actions().len(), 2);
/// ```
pub fn parse_domain<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Domain> {
    map(
        prefix_expr(
            "define",
            tuple((
                prefix_expr("domain", parse_name),
                opt(parse_requirements),
                opt(prefix_expr(":types", typed_list(parse_name))),
                opt(prefix_expr(":constants", typed_list(parse_name))),
                opt(prefix_expr(
                    ":predicates",
                    space_separated_list0(parse_predicate_definition),
                )),
                space_separated_list0(parse_action_definition),
            )),
        ),
        |(name, requirements, types, constants, predicates, actions)| {
            Domain::builder(name, actions)
                .with_requirements(requirements.unwrap_or_else(Requirements::default))
                .with_types(types.unwrap_or_else(TypedList::default))
                .with_constants(constants.unwrap_or_default())
                .with_predicates(predicates.unwrap_or_default())
        },
    )(input.into())
}

impl Parser for Domain {
    type Item = Domain;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_domain(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::{Name, PropEffect, Typed};

    #[test]
    fn action_with_constants_and_equality() {
        let input = r#"(:action verify-answer
            :parameters (?v - agent ?r - role ?a - answer)
            :precondition (and (can-verify ?v) (not (= ?v ?r)) (answer-complete ?a))
            :effect (answer-verified ?a))"#;
        let (_, action) = parse_action_definition(input).unwrap();
        assert_eq!(action.name(), &Name::new("verify-answer"));
        assert_eq!(action.parameters().len(), 3);
        assert_eq!(action.effects().len(), 1);
        assert!(matches!(action.effects()[0], PropEffect::Add(_)));
    }

    #[test]
    fn action_with_empty_precondition() {
        let input = "(:action reset :parameters () :precondition () :effect (and (not (busy))))";
        let (_, action) = parse_action_definition(input).unwrap();
        assert!(action.parameters().is_empty());
        assert_eq!(action.precondition(), &PropCondition::empty());
        assert!(matches!(action.effects()[0], PropEffect::Delete(_)));
    }

    #[test]
    fn action_without_sections() {
        let (_, action) = parse_action_definition("(:action noop)").unwrap();
        assert!(action.parameters().is_empty());
        assert!(action.effects().is_empty());
    }

    #[test]
    fn domain_with_type_hierarchy_and_constants() {
        let input = r#"(define (domain d)
            (:types role verifier - agent paper - source)
            (:constants librarian - agent)
            (:predicates (busy ?a - agent)))"#;
        let domain = Domain::from_str(input).unwrap();
        assert_eq!(domain.types().len(), 3);
        assert_eq!(domain.types()[2], Typed::new(Name::new("paper"), "source".into()));
        assert_eq!(domain.constants().len(), 1);
        assert!(domain.actions().is_empty());
    }

    #[test]
    fn trailing_input_is_rejected() {
        let error = Domain::from_str("(define (domain d)) (extra)").unwrap_err();
        assert_eq!(error.line, 1);
        assert_eq!(error.column, 21);
    }

    #[test]
    fn error_points_at_bad_action() {
        let input = "(define (domain d)\n  (:action a\n    :parameters (?x)\n    :effect (or (p))))";
        let error = Domain::from_str(input).unwrap_err();
        assert_eq!(error.line, 4);
    }
}
