//! World states under the closed-world assumption, and the two operations on
//! them: [`satisfies`] and [`apply`].

use crate::search::{Action, Atom, Condition, Task};
use std::collections::BTreeSet;

/// A set of ground atoms. An atom is true iff it is in the set. States are
/// values: transitions build new states and equal sets are equal states,
/// which is what duplicate detection during search relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct State {
    atoms: BTreeSet<Atom>,
}

impl State {
    pub fn new<I: IntoIterator<Item = Atom>>(atoms: I) -> Self {
        Self {
            atoms: atoms.into_iter().collect(),
        }
    }

    #[inline(always)]
    pub fn contains(&self, atom: &Atom) -> bool {
        self.atoms.contains(atom)
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn satisfies(&self, condition: &Condition) -> bool {
        condition.is_satisfied(self)
    }

    /// The successor state: the delete list is removed first, then the add
    /// list is inserted, so an atom that is both added and deleted stays true.
    ///
    /// The action must be applicable; applying an inapplicable action is a
    /// bug in the caller.
    pub fn apply(&self, action: &Action) -> State {
        debug_assert!(
            action.is_applicable(self),
            "action {} applied in a state where its precondition does not hold",
            action.index
        );
        let mut atoms = self.atoms.clone();
        for atom in action.delete_effects() {
            atoms.remove(atom);
        }
        for atom in action.add_effects() {
            atoms.insert(atom.clone());
        }
        State { atoms }
    }

    pub fn to_string(&self, task: &Task) -> String {
        let atoms: Vec<String> = self.atoms.iter().map(|atom| atom.to_string(task)).collect();
        atoms.join(" ")
    }
}

/// Whether every literal of `condition` holds in `state`.
pub fn satisfies(state: &State, condition: &Condition) -> bool {
    state.satisfies(condition)
}

/// Applies `action` to `state`, see [`State::apply`].
pub fn apply(state: &State, action: &Action) -> State {
    state.apply(action)
}
