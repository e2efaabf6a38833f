use crate::error::GroundingError;
use crate::parsed_types::{Atom as ParsedAtom, Name, Term};
use crate::search::symbols::Symbols;
use crate::search::Atom;
use std::collections::HashMap;

/// If the argument is a constant, then the value is the index of the object in
/// the task, otherwise the index is the index of the parameter in the action
/// schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaArgument {
    Constant(usize),
    Free(usize),
}

impl SchemaArgument {
    pub(crate) fn new(
        argument: &Term,
        action_name: &Name,
        parameter_table: &HashMap<Name, usize>,
        symbols: &Symbols,
    ) -> Result<Self, GroundingError> {
        match argument {
            Term::Name(name) => Ok(Self::Constant(
                symbols.object(name, &format!("action `{}`", action_name))?,
            )),
            Term::Variable(variable) => parameter_table
                .get(variable.name())
                .map(|&index| Self::Free(index))
                .ok_or_else(|| GroundingError::UnknownParameter {
                    action: *action_name,
                    parameter: *variable.name(),
                }),
        }
    }

    /// The object this argument stands for under `instantiation`.
    #[inline(always)]
    pub fn ground(&self, instantiation: &[usize]) -> usize {
        match self {
            Self::Constant(object_index) => *object_index,
            Self::Free(parameter_index) => instantiation[*parameter_index],
        }
    }
}

/// An atom over schema parameters and constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomSchema {
    predicate_index: usize,
    arguments: Vec<SchemaArgument>,
}

impl AtomSchema {
    pub fn new(predicate_index: usize, arguments: Vec<SchemaArgument>) -> Self {
        Self {
            predicate_index,
            arguments,
        }
    }

    pub(crate) fn from_parsed(
        atom: &ParsedAtom<Term>,
        action_name: &Name,
        parameter_table: &HashMap<Name, usize>,
        symbols: &Symbols,
    ) -> Result<Self, GroundingError> {
        let predicate_index = symbols.predicate(
            atom.predicate_name(),
            atom.values().len(),
            &format!("action `{}`", action_name),
        )?;
        let arguments = atom
            .values()
            .iter()
            .map(|argument| SchemaArgument::new(argument, action_name, parameter_table, symbols))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            predicate_index,
            arguments,
        })
    }

    #[inline(always)]
    pub fn predicate_index(&self) -> usize {
        self.predicate_index
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[SchemaArgument] {
        &self.arguments
    }

    pub fn ground(&self, instantiation: &[usize]) -> Atom {
        Atom::new(
            self.predicate_index,
            self.arguments
                .iter()
                .map(|argument| argument.ground(instantiation))
                .collect(),
        )
    }
}
