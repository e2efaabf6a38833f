use crate::error::GroundingError;
use crate::parsed_types::{Atom as ParsedAtom, Name, NameLiteral, PropCondition, Term};
use crate::search::{Atom, Negatable, Object, Predicate, TypeHierarchy};
use std::collections::HashMap;

/// Name lookup tables used while resolving schemas, the initial state and the
/// goal into indices.
#[derive(Debug)]
pub(crate) struct Symbols<'a> {
    pub predicates: &'a [Predicate],
    pub objects: &'a [Object],
    pub types: &'a TypeHierarchy,
    predicate_table: HashMap<Name, usize>,
    object_table: HashMap<Name, usize>,
}

impl<'a> Symbols<'a> {
    pub fn new(predicates: &'a [Predicate], objects: &'a [Object], types: &'a TypeHierarchy) -> Self {
        Self {
            predicates,
            objects,
            types,
            predicate_table: predicates.iter().map(|p| (p.name, p.index)).collect(),
            object_table: objects.iter().map(|o| (o.name, o.index)).collect(),
        }
    }

    /// Looks up a predicate and checks that it is used with the right number
    /// of arguments.
    pub fn predicate(&self, name: &Name, arity: usize, context: &str) -> Result<usize, GroundingError> {
        let index = *self
            .predicate_table
            .get(name)
            .ok_or_else(|| GroundingError::UnknownPredicate {
                predicate: *name,
                context: context.to_string(),
            })?;
        let expected = self.predicates[index].arity();
        if expected != arity {
            return Err(GroundingError::ArityMismatch {
                predicate: *name,
                expected,
                found: arity,
                context: context.to_string(),
            });
        }
        Ok(index)
    }

    pub fn object(&self, name: &Name, context: &str) -> Result<usize, GroundingError> {
        self.object_table
            .get(name)
            .copied()
            .ok_or_else(|| GroundingError::UnknownObject {
                object: *name,
                context: context.to_string(),
            })
    }

    pub fn object_index(&self, name: &Name) -> Option<usize> {
        self.object_table.get(name).copied()
    }

    /// Resolves a variable-free atom.
    pub fn ground_atom(&self, atom: &ParsedAtom<Name>, context: &str) -> Result<Atom, GroundingError> {
        let predicate_index = self.predicate(atom.predicate_name(), atom.values().len(), context)?;
        let arguments = atom
            .values()
            .iter()
            .map(|name| self.object(name, context))
            .collect::<Result<_, _>>()?;
        Ok(Atom::new(predicate_index, arguments))
    }

    /// Resolves an `:init` literal. Initial facts must be positive and their
    /// arguments must match the predicate's declared types.
    pub fn initial_fact(&self, literal: &NameLiteral) -> Result<Atom, GroundingError> {
        if literal.is_negated() {
            return Err(GroundingError::NegativeInitialFact(literal.to_string()));
        }
        let context = format!("initial fact `{}`", literal);
        let atom = self.ground_atom(literal.atom(), &context)?;
        let predicate = &self.predicates[atom.predicate_index()];
        for (&object, &expected) in atom.arguments().iter().zip(&predicate.types) {
            if !self.types.is_subtype(self.objects[object].type_index, expected) {
                return Err(GroundingError::TypeMismatch {
                    object: self.objects[object].name,
                    expected: *self.types.name(expected),
                    context,
                });
            }
        }
        Ok(atom)
    }
}

/// A literal of a flattened precondition or goal, before its terms are
/// resolved.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FlatLiteral<'a> {
    Atom(Negatable<&'a ParsedAtom<Term>>),
    Equality(Negatable<(&'a Term, &'a Term)>),
}

/// Flattens nested conjunctions into a list of literals. Negation may only
/// be applied to an atom or an equality.
pub(crate) fn flatten<'a>(
    condition: &'a PropCondition,
    context: &str,
) -> Result<Vec<FlatLiteral<'a>>, GroundingError> {
    fn collect<'a>(
        condition: &'a PropCondition,
        negated: bool,
        context: &str,
        literals: &mut Vec<FlatLiteral<'a>>,
    ) -> Result<(), GroundingError> {
        match condition {
            PropCondition::Atom(atom) => {
                literals.push(FlatLiteral::Atom(Negatable::new(negated, atom)));
            }
            PropCondition::Equality(left, right) => {
                literals.push(FlatLiteral::Equality(Negatable::new(negated, (left, right))));
            }
            PropCondition::And(conditions) if !negated => {
                for condition in conditions {
                    collect(condition, false, context, literals)?;
                }
            }
            PropCondition::Not(inner) if !negated => collect(inner, true, context, literals)?,
            _ => {
                return Err(GroundingError::UnsupportedCondition {
                    condition: format!("(not {})", condition),
                    context: context.to_string(),
                })
            }
        }
        Ok(())
    }

    let mut literals = vec![];
    collect(condition, false, context, &mut literals)?;
    Ok(literals)
}
