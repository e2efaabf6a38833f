use crate::error::GroundingError;
use crate::parsed_types::{Name, PredicateDefinition};
use crate::search::TypeHierarchy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub name: Name,
    pub index: usize,
    /// Type index of each argument position.
    pub types: Vec<usize>,
}

impl Predicate {
    pub fn new(
        index: usize,
        predicate_definition: &PredicateDefinition,
        types: &TypeHierarchy,
    ) -> Result<Self, GroundingError> {
        let context = format!("predicate `{}`", predicate_definition.name());
        let argument_types = predicate_definition
            .variables()
            .iter()
            .map(|variable| types.index_of(variable.type_().name(), &context))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: *predicate_definition.name(),
            index,
            types: argument_types,
        })
    }

    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.types.len()
    }
}
