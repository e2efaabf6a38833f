//! Contains action and predicate definitions.

use crate::parsed_types::{Name, PropCondition, PropEffect, TypedList, Variable};

/// An action schema as written in a domain, e.g. `(:action stack ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDefinition {
    name: Name,
    parameters: TypedList<Variable>,
    precondition: PropCondition,
    effects: Vec<PropEffect>,
}

impl ActionDefinition {
    pub fn new<N: Into<Name>>(
        name: N,
        parameters: TypedList<Variable>,
        precondition: PropCondition,
        effects: Vec<PropEffect>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            precondition,
            effects,
        }
    }

    pub const fn name(&self) -> &Name {
        &self.name
    }

    pub const fn parameters(&self) -> &TypedList<Variable> {
        &self.parameters
    }

    pub const fn precondition(&self) -> &PropCondition {
        &self.precondition
    }

    pub fn effects(&self) -> &[PropEffect] {
        &self.effects
    }
}

/// A predicate signature, e.g. `(on ?x - block ?y - block)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateDefinition {
    name: Name,
    variables: TypedList<Variable>,
}

impl PredicateDefinition {
    pub fn new<N: Into<Name>>(name: N, variables: TypedList<Variable>) -> Self {
        Self {
            name: name.into(),
            variables,
        }
    }

    pub const fn name(&self) -> &Name {
        &self.name
    }

    pub const fn variables(&self) -> &TypedList<Variable> {
        &self.variables
    }

    pub fn arity(&self) -> usize {
        self.variables.len()
    }
}

impl From<(Name, TypedList<Variable>)> for PredicateDefinition {
    fn from(value: (Name, TypedList<Variable>)) -> Self {
        PredicateDefinition::new(value.0, value.1)
    }
}
