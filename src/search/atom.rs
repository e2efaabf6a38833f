use crate::search::Task;
use smallvec::SmallVec;

const TYPICAL_NUM_ARGUMENTS: usize = 5;

/// Object indices of a ground atom or a ground action.
pub type ObjectTuple = SmallVec<[usize; TYPICAL_NUM_ARGUMENTS]>;

/// A ground atom, i.e. a predicate applied to objects. States are sets of
/// these; the ordering (by predicate, then arguments) keeps state iteration
/// deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom {
    predicate_index: usize,
    arguments: ObjectTuple,
}

impl Atom {
    pub fn new(predicate_index: usize, arguments: ObjectTuple) -> Self {
        Self {
            predicate_index,
            arguments,
        }
    }

    #[inline(always)]
    pub fn predicate_index(&self) -> usize {
        self.predicate_index
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[usize] {
        &self.arguments
    }

    /// Renders the atom with its predicate and object names, e.g.
    /// `(candidate paper1 query1)`.
    pub fn to_string(&self, task: &Task) -> String {
        let mut text = format!("({}", task.predicates[self.predicate_index].name);
        for &argument in self.arguments.iter() {
            text.push(' ');
            text.push_str(&task.objects[argument].name);
        }
        text.push(')');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn atoms_order_by_predicate_then_arguments() {
        let mut atoms = vec![
            Atom::new(1, smallvec![0]),
            Atom::new(0, smallvec![2, 1]),
            Atom::new(0, smallvec![1, 5]),
        ];
        atoms.sort();
        assert_eq!(atoms[0].arguments(), &[1, 5]);
        assert_eq!(atoms[1].arguments(), &[2, 1]);
        assert_eq!(atoms[2].predicate_index(), 1);
    }
}
