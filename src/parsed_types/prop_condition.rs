//! Contains propositional conditions via the [`PropCondition`] type and
//! effects via the [`PropEffect`] type.

use crate::parsed_types::{Atom, Term};
use std::fmt::{self, Display, Formatter};

/// A precondition or goal. Only conjunctions of (negated) atoms and
/// (in)equalities are representable, disjunctions and quantifiers are not.
#[derive(Debug, Clone, PartialEq)]
pub enum PropCondition {
    Atom(Atom<Term>),
    And(Vec<PropCondition>),
    /// ## Requirements
    /// Requires `:negative-preconditions` (or `:equality` when negating an
    /// equality).
    Not(Box<PropCondition>),
    /// ## Requirements
    /// Requires `:equality`.
    Equality(Term, Term),
}

impl PropCondition {
    #[inline(always)]
    pub const fn new_atom(value: Atom<Term>) -> Self {
        Self::Atom(value)
    }

    #[inline(always)]
    pub fn new_and<T: IntoIterator<Item = PropCondition>>(values: T) -> Self {
        Self::And(values.into_iter().collect())
    }

    #[inline(always)]
    pub fn new_not(value: PropCondition) -> Self {
        Self::Not(Box::new(value))
    }

    #[inline(always)]
    pub const fn new_equality(left: Term, right: Term) -> Self {
        Self::Equality(left, right)
    }

    /// The empty conjunction, which is trivially true.
    pub fn empty() -> Self {
        Self::And(vec![])
    }
}

impl Display for PropCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PropCondition::Atom(atom) => write!(f, "{}", atom),
            PropCondition::And(conditions) => {
                write!(f, "(and")?;
                for condition in conditions {
                    write!(f, " {}", condition)?;
                }
                write!(f, ")")
            }
            PropCondition::Not(condition) => write!(f, "(not {})", condition),
            PropCondition::Equality(left, right) => write!(f, "(= {} {})", left, right),
        }
    }
}

/// An unconditional effect, adding or deleting a single atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropEffect {
    Add(Atom<Term>),
    Delete(Atom<Term>),
}

impl PropEffect {
    pub const fn new_add(atom: Atom<Term>) -> Self {
        Self::Add(atom)
    }

    pub const fn new_delete(atom: Atom<Term>) -> Self {
        Self::Delete(atom)
    }

    pub const fn atom(&self) -> &Atom<Term> {
        match self {
            Self::Add(atom) | Self::Delete(atom) => atom,
        }
    }
}
