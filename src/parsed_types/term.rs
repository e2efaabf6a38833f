//! Contains the [`Term`] type.

use crate::parsed_types::{Name, Variable};
use std::fmt::{self, Display, Formatter};

/// A term is either an object (or constant) name or a variable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Term {
    Name(Name),
    Variable(Variable),
}

impl Term {
    pub fn new_name<N: Into<Name>>(name: N) -> Self {
        Self::Name(name.into())
    }

    pub fn new_variable<V: Into<Variable>>(variable: V) -> Self {
        Self::Variable(variable.into())
    }
}

impl From<Name> for Term {
    fn from(value: Name) -> Self {
        Self::Name(value)
    }
}

impl From<Variable> for Term {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Name(name) => write!(f, "{}", name),
            Term::Variable(variable) => write!(f, "{}", variable),
        }
    }
}
