use crate::error::GroundingError;
use crate::parsed_types::{ActionDefinition, Name, PropEffect};
use crate::search::symbols::{flatten, FlatLiteral, Symbols};
use crate::search::{Action, AtomSchema, Condition, GroundLiteral, Negatable, SchemaArgument};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaParameter {
    index: usize,
    name: Name,
    type_index: usize,
}

impl SchemaParameter {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn type_index(&self) -> usize {
        self.type_index
    }
}

/// A precondition literal of an action schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaLiteral {
    Atom(Negatable<AtomSchema>),
    Equality(Negatable<(SchemaArgument, SchemaArgument)>),
}

impl SchemaLiteral {
    pub fn ground(&self, instantiation: &[usize]) -> GroundLiteral {
        match self {
            SchemaLiteral::Atom(atom) => {
                GroundLiteral::Atom(atom.clone().map(|atom| atom.ground(instantiation)))
            }
            SchemaLiteral::Equality(equality) => GroundLiteral::Equality(equality.map(
                |(left, right)| (left.ground(instantiation), right.ground(instantiation)),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSchema {
    name: Name,
    index: usize,
    parameters: Vec<SchemaParameter>,
    precondition: Vec<SchemaLiteral>,
    add_effects: Vec<AtomSchema>,
    delete_effects: Vec<AtomSchema>,
}

impl ActionSchema {
    pub(crate) fn new(
        index: usize,
        action_definition: &ActionDefinition,
        symbols: &Symbols,
    ) -> Result<Self, GroundingError> {
        let name = *action_definition.name();

        let mut parameter_table: HashMap<Name, usize> = HashMap::new();
        let mut parameters = Vec::with_capacity(action_definition.parameters().len());
        for (parameter_index, parameter) in action_definition.parameters().iter().enumerate() {
            let parameter_name = *parameter.value().name();
            if parameter_table.insert(parameter_name, parameter_index).is_some() {
                return Err(GroundingError::Duplicate {
                    kind: "parameter",
                    name: parameter_name,
                });
            }
            let type_index = symbols.types.index_of(
                parameter.type_().name(),
                &format!("parameter `{}` of action `{}`", parameter.value(), name),
            )?;
            parameters.push(SchemaParameter {
                index: parameter_index,
                name: parameter_name,
                type_index,
            });
        }

        let context = format!("the precondition of action `{}`", name);
        let mut precondition = vec![];
        for literal in flatten(action_definition.precondition(), &context)? {
            precondition.push(match literal {
                FlatLiteral::Atom(atom) => SchemaLiteral::Atom(Negatable::new(
                    atom.is_negated(),
                    AtomSchema::from_parsed(atom.underlying(), &name, &parameter_table, symbols)?,
                )),
                FlatLiteral::Equality(equality) => {
                    let (left, right) = equality.underlying();
                    SchemaLiteral::Equality(Negatable::new(
                        equality.is_negated(),
                        (
                            SchemaArgument::new(left, &name, &parameter_table, symbols)?,
                            SchemaArgument::new(right, &name, &parameter_table, symbols)?,
                        ),
                    ))
                }
            });
        }

        let mut add_effects = vec![];
        let mut delete_effects = vec![];
        for effect in action_definition.effects() {
            let atom = AtomSchema::from_parsed(effect.atom(), &name, &parameter_table, symbols)?;
            match effect {
                PropEffect::Add(_) => add_effects.push(atom),
                PropEffect::Delete(_) => delete_effects.push(atom),
            }
        }

        Ok(Self {
            name,
            index,
            parameters,
            precondition,
            add_effects,
            delete_effects,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_ground(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn parameters(&self) -> &[SchemaParameter] {
        &self.parameters
    }

    pub fn precondition(&self) -> &[SchemaLiteral] {
        &self.precondition
    }

    pub fn add_effects(&self) -> &[AtomSchema] {
        &self.add_effects
    }

    pub fn delete_effects(&self) -> &[AtomSchema] {
        &self.delete_effects
    }

    /// Instantiates the schema with one object per parameter. Types are not
    /// checked here, callers pick type-compatible objects.
    pub fn ground(&self, instantiation: &[usize]) -> Action {
        debug_assert_eq!(instantiation.len(), self.parameters.len());
        Action::new(
            self.index,
            instantiation.to_vec(),
            Condition::new(
                self.precondition
                    .iter()
                    .map(|literal| literal.ground(instantiation))
                    .collect(),
            ),
            self.add_effects
                .iter()
                .map(|atom| atom.ground(instantiation))
                .collect(),
            self.delete_effects
                .iter()
                .map(|atom| atom.ground(instantiation))
                .collect(),
        )
    }
}
