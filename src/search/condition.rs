//! Ground conditions: action preconditions and the goal.

use crate::error::GroundingError;
use crate::parsed_types::{PropCondition, Term};
use crate::search::symbols::{flatten, FlatLiteral, Symbols};
use crate::search::{Atom, Negatable, State, Task};

/// A ground literal. Atom literals are evaluated against a state under the
/// closed-world assumption; equalities compare object indices and do not
/// depend on the state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroundLiteral {
    Atom(Negatable<Atom>),
    Equality(Negatable<(usize, usize)>),
}

impl GroundLiteral {
    #[inline(always)]
    pub fn holds(&self, state: &State) -> bool {
        match self {
            GroundLiteral::Atom(literal) => literal.holds_if(state.contains(literal.underlying())),
            GroundLiteral::Equality(literal) => {
                let (left, right) = literal.underlying();
                literal.holds_if(left == right)
            }
        }
    }

    pub fn is_negated(&self) -> bool {
        match self {
            GroundLiteral::Atom(literal) => literal.is_negated(),
            GroundLiteral::Equality(literal) => literal.is_negated(),
        }
    }

    pub fn to_string(&self, task: &Task) -> String {
        let positive = match self {
            GroundLiteral::Atom(literal) => literal.underlying().to_string(task),
            GroundLiteral::Equality(literal) => {
                let (left, right) = literal.underlying();
                format!("(= {} {})", task.objects[*left].name, task.objects[*right].name)
            }
        };
        if self.is_negated() {
            format!("(not {})", positive)
        } else {
            positive
        }
    }
}

/// A conjunction of ground literals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Condition {
    literals: Vec<GroundLiteral>,
}

impl Condition {
    pub fn new(literals: Vec<GroundLiteral>) -> Self {
        Self { literals }
    }

    /// Resolves a variable-free condition such as a goal.
    pub(crate) fn from_parsed(
        condition: &PropCondition,
        symbols: &Symbols,
        context: &str,
    ) -> Result<Self, GroundingError> {
        let resolve = |term: &Term| match term {
            Term::Name(name) => symbols.object(name, context),
            Term::Variable(variable) => Err(GroundingError::UnexpectedVariable {
                variable: *variable.name(),
                context: context.to_string(),
            }),
        };

        let mut literals = vec![];
        for literal in flatten(condition, context)? {
            literals.push(match literal {
                FlatLiteral::Atom(atom) => {
                    let parsed = atom.underlying();
                    let predicate_index =
                        symbols.predicate(parsed.predicate_name(), parsed.values().len(), context)?;
                    let arguments = parsed
                        .values()
                        .iter()
                        .map(resolve)
                        .collect::<Result<_, _>>()?;
                    GroundLiteral::Atom(Negatable::new(
                        atom.is_negated(),
                        Atom::new(predicate_index, arguments),
                    ))
                }
                FlatLiteral::Equality(equality) => {
                    let (left, right) = equality.underlying();
                    GroundLiteral::Equality(Negatable::new(
                        equality.is_negated(),
                        (resolve(*left)?, resolve(*right)?),
                    ))
                }
            });
        }
        Ok(Self { literals })
    }

    pub fn literals(&self) -> &[GroundLiteral] {
        &self.literals
    }

    pub fn is_satisfied(&self, state: &State) -> bool {
        self.literals.iter().all(|literal| literal.holds(state))
    }

    /// The first literal, in declaration order, that does not hold.
    pub fn first_violation(&self, state: &State) -> Option<&GroundLiteral> {
        self.literals.iter().find(|literal| !literal.holds(state))
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn to_string(&self, task: &Task) -> String {
        let literals: Vec<String> = self.literals.iter().map(|l| l.to_string(task)).collect();
        format!("(and {})", literals.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn fact(predicate: usize, arguments: &[usize]) -> Atom {
        Atom::new(predicate, arguments.iter().copied().collect())
    }

    #[test]
    fn absent_atoms_are_false() {
        let state = State::new([fact(0, &[1])]);
        let present = GroundLiteral::Atom(Negatable::Positive(fact(0, &[1])));
        let absent = GroundLiteral::Atom(Negatable::Positive(fact(0, &[2])));
        let negated_absent = GroundLiteral::Atom(Negatable::Negative(fact(0, &[2])));

        assert!(present.holds(&state));
        assert!(!absent.holds(&state));
        assert!(negated_absent.holds(&state));
    }

    #[test]
    fn equalities_ignore_the_state() {
        let state = State::default();
        assert!(GroundLiteral::Equality(Negatable::Positive((3, 3))).holds(&state));
        assert!(GroundLiteral::Equality(Negatable::Negative((3, 4))).holds(&state));
        assert!(!GroundLiteral::Equality(Negatable::Negative((3, 3))).holds(&state));
    }

    #[test]
    fn empty_condition_always_holds() {
        assert!(Condition::default().is_satisfied(&State::default()));
    }

    #[test]
    fn first_violation_is_in_declaration_order() {
        let state = State::new([Atom::new(0, smallvec![])]);
        let condition = Condition::new(vec![
            GroundLiteral::Atom(Negatable::Positive(Atom::new(0, smallvec![]))),
            GroundLiteral::Atom(Negatable::Positive(Atom::new(1, smallvec![]))),
            GroundLiteral::Atom(Negatable::Negative(Atom::new(0, smallvec![]))),
        ]);
        assert!(!condition.is_satisfied(&state));
        assert_eq!(condition.first_violation(&state), Some(&condition.literals()[1]));
    }
}
