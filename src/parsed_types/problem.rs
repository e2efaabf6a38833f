//! Contains the [`Problem`] type.

use crate::parsed_types::{Name, NameLiteral, PropCondition, Requirements, TypedList};

/// A problem instance: the object universe, the initial facts and the goal.
///
/// ## Example
/// ```
/// # use groundplan::parsed_types::*;
/// # use groundplan::parsers::Parser;
/// let input = r#"(define (problem two-switches)
///         (:domain switches)
///         (:objects s1 s2 - switch)
///         (:init (on s1))
///         (:goal (and (on s1) (on s2))))"#;
///
/// let problem = Problem::from_str(input).unwrap();
///
/// assert_eq!(problem.name(), &Name::new("two-switches"));
/// assert_eq!(problem.domain(), &Name::new("switches"));
/// assert_eq!(problem.objects().len(), 2);
/// assert_eq!(problem.init().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// The problem name.
    name: Name,
    /// The name of the [`Domain`](crate::parsed_types::Domain) this problem
    /// belongs to.
    domain: Name,
    requirements: Requirements,
    objects: TypedList<Name>,
    /// The initial facts. Negative literals are representable so that they
    /// can be reported, they are rejected when the task is built.
    init: Vec<NameLiteral>,
    goal: PropCondition,
}

impl Problem {
    pub fn new<P: Into<Name>, D: Into<Name>>(
        name: P,
        domain: D,
        requirements: Requirements,
        objects: TypedList<Name>,
        init: Vec<NameLiteral>,
        goal: PropCondition,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            requirements,
            objects,
            init,
            goal,
        }
    }

    pub const fn name(&self) -> &Name {
        &self.name
    }

    pub const fn domain(&self) -> &Name {
        &self.domain
    }

    pub const fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    pub const fn objects(&self) -> &TypedList<Name> {
        &self.objects
    }

    pub fn init(&self) -> &[NameLiteral] {
        &self.init
    }

    pub const fn goal(&self) -> &PropCondition {
        &self.goal
    }

    /// Returns a copy of this problem with the given initial facts.
    pub fn with_init(mut self, init: Vec<NameLiteral>) -> Self {
        self.init = init;
        self
    }
}
