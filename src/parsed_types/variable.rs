//! Contains variables.

use crate::parsed_types::Name;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// A variable, i.e. an action or predicate parameter such as `?x`. The
/// leading `?` is not part of the stored name.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct Variable(Name);

impl Variable {
    #[inline(always)]
    pub const fn new(name: Name) -> Self {
        Self(name)
    }

    #[inline(always)]
    pub fn name(&self) -> &Name {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self::new(Name::new(value))
    }
}

impl Deref for Variable {
    type Target = Name;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}
