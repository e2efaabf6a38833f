//! Contains the syntactic form of a plan, see [`Plan`].

use crate::parsed_types::Name;
use std::fmt::{self, Display, Formatter};

/// A single step of a plan, e.g. `(stack b1 b2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    action_name: Name,
    parameters: Vec<Name>,
}

impl PlanStep {
    pub fn new<N: Into<Name>>(action_name: N, parameters: Vec<Name>) -> Self {
        Self {
            action_name: action_name.into(),
            parameters,
        }
    }

    pub const fn action_name(&self) -> &Name {
        &self.action_name
    }

    pub fn parameters(&self) -> &[Name] {
        &self.parameters
    }
}

impl Display for PlanStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.action_name)?;
        for parameter in &self.parameters {
            write!(f, " {}", parameter)?;
        }
        write!(f, ")")
    }
}

/// An unresolved plan, as read from a plan file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan(Vec<PlanStep>);

impl Plan {
    pub const fn new(steps: Vec<PlanStep>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
