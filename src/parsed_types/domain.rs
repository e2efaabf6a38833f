//! Contains the [`Domain`] type.

use crate::parsed_types::{ActionDefinition, Name, PredicateDefinition, Requirements, TypedList};

/// The `Domain` type specifies the types, predicates and action schemas a
/// [`Problem`](crate::parsed_types::Problem) is posed over.
///
/// ## Example
/// ```
/// # use groundplan::parsed_types::*;
/// # use groundplan::parsers::Parser;
/// let input = r#"
/// (define (domain switches)
///     (:requirements :strips :typing)
///     (:types switch)
///     (:predicates (on ?s - switch))
///     (:action flip-on
///         :parameters (?s - switch)
///         :precondition (not (on ?s))
///         :effect (on ?s)))
/// "#;
///
/// let domain = Domain::from_str(input).unwrap();
///
/// assert_eq!(domain.name(), &Name::new("switches"));
/// assert_eq!(domain.requirements().len(), 2);
/// assert_eq!(domain.types().len(), 1);
/// assert_eq!(domain.predicates().len(), 1);
/// assert_eq!(domain.actions().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    /// The domain name.
    name: Name,
    /// The specified requirements.
    requirements: Requirements,
    /// The type declarations, each with its parent type.
    types: TypedList<Name>,
    /// Objects shared by every problem of the domain.
    constants: TypedList<Name>,
    /// The predicate definitions.
    predicates: Vec<PredicateDefinition>,
    /// The action definitions.
    actions: Vec<ActionDefinition>,
}

impl Domain {
    /// Creates a builder to easily construct [`Domain`] instances.
    pub fn builder<N: Into<Name>, T: Into<Vec<ActionDefinition>>>(name: N, actions: T) -> Self {
        Self {
            name: name.into(),
            requirements: Requirements::default(),
            types: TypedList::default(),
            constants: TypedList::default(),
            predicates: Vec::default(),
            actions: actions.into(),
        }
    }

    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn with_types<T: Into<TypedList<Name>>>(mut self, types: T) -> Self {
        self.types = types.into();
        self
    }

    pub fn with_constants<C: Into<TypedList<Name>>>(mut self, constants: C) -> Self {
        self.constants = constants.into();
        self
    }

    pub fn with_predicates<P: Into<Vec<PredicateDefinition>>>(mut self, predicates: P) -> Self {
        self.predicates = predicates.into();
        self
    }

    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// If no requirements were specified, `:strips` is implied.
    pub const fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    pub const fn types(&self) -> &TypedList<Name> {
        &self.types
    }

    pub const fn constants(&self) -> &TypedList<Name> {
        &self.constants
    }

    pub fn predicates(&self) -> &[PredicateDefinition] {
        &self.predicates
    }

    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }
}
