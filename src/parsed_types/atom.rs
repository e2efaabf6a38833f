//! Contains atoms via the [`Atom`] type and literals via the [`Literal`] type.

use crate::parsed_types::Name;
use std::fmt::{self, Display, Formatter};

/// An atom, i.e. a predicate applied to a list of values. In schemas the
/// values are [`crate::parsed_types::Term`]s, in problems they are [`Name`]s.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Atom<T> {
    predicate_name: Name,
    values: Vec<T>,
}

impl<T> Atom<T> {
    pub fn new<N: Into<Name>>(predicate_name: N, values: Vec<T>) -> Self {
        Self {
            predicate_name: predicate_name.into(),
            values,
        }
    }

    pub const fn predicate_name(&self) -> &Name {
        &self.predicate_name
    }

    pub fn values(&self) -> &[T] {
        self.values.as_slice()
    }
}

impl<T: Display> Display for Atom<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.predicate_name)?;
        for value in &self.values {
            write!(f, " {}", value)?;
        }
        write!(f, ")")
    }
}

/// An [`Atom`] or its negation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Literal<T> {
    Positive(Atom<T>),
    Negative(Atom<T>),
}

impl<T> Literal<T> {
    pub const fn new(atom: Atom<T>) -> Self {
        Self::Positive(atom)
    }

    pub const fn new_not(atom: Atom<T>) -> Self {
        Self::Negative(atom)
    }

    pub const fn is_negated(&self) -> bool {
        matches!(self, Self::Negative(..))
    }

    pub const fn atom(&self) -> &Atom<T> {
        match self {
            Self::Positive(atom) | Self::Negative(atom) => atom,
        }
    }
}

impl<T> From<Atom<T>> for Literal<T> {
    fn from(value: Atom<T>) -> Self {
        Literal::new(value)
    }
}

impl<T: Display> Display for Literal<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Positive(atom) => write!(f, "{}", atom),
            Literal::Negative(atom) => write!(f, "(not {})", atom),
        }
    }
}

/// A literal over object names, as found in `:init` and ground goals.
pub type NameLiteral = Literal<Name>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::Term;

    #[test]
    fn literal_display_matches_pddl() {
        let atom = Atom::new("candidate", vec![Name::new("paper1"), Name::new("query1")]);
        assert_eq!(Literal::new(atom.clone()).to_string(), "(candidate paper1 query1)");
        assert_eq!(
            Literal::new_not(atom).to_string(),
            "(not (candidate paper1 query1))"
        );
    }

    #[test]
    fn nullary_atom_display() {
        let atom: Atom<Term> = Atom::new("has-websearch-tool", vec![]);
        assert_eq!(atom.to_string(), "(has-websearch-tool)");
    }
}
