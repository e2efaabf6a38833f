use crate::error::GroundingError;
use crate::parsed_types::{Name, Typed};
use crate::search::TypeHierarchy;

/// An object of the task universe: a problem object or a domain constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub index: usize,
    pub name: Name,
    pub type_index: usize,
}

impl Object {
    pub fn new(
        index: usize,
        object: &Typed<Name>,
        types: &TypeHierarchy,
    ) -> Result<Self, GroundingError> {
        let type_index = types.index_of(
            object.type_().name(),
            &format!("the declaration of object `{}`", object.value()),
        )?;
        Ok(Self {
            index,
            name: *object.value(),
            type_index,
        })
    }
}
