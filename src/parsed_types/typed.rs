//! Contains typed values via [`Typed`] and lists thereof via [`TypedList`].

use crate::parsed_types::Name;
use std::ops::Deref;

/// The name of the implicit root type.
pub const OBJECT_TYPE_NAME: &str = "object";

/// A primitive type name. Only single types are supported, `(either ..)`
/// types are not.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Type(Name);

impl Type {
    pub fn new<N: Into<Name>>(name: N) -> Self {
        Self(name.into())
    }

    /// The predefined type `object`.
    pub fn object() -> Self {
        Self(Name::new(OBJECT_TYPE_NAME))
    }

    pub fn name(&self) -> &Name {
        &self.0
    }

    pub fn is_object(&self) -> bool {
        self.0 == OBJECT_TYPE_NAME
    }
}

impl Default for Type {
    fn default() -> Self {
        Self::object()
    }
}

impl From<&str> for Type {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A value together with its declared type, e.g. `?x - block`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Typed<T> {
    value: T,
    r#type: Type,
}

impl<T> Typed<T> {
    pub const fn new(value: T, r#type: Type) -> Self {
        Self { value, r#type }
    }

    /// Wraps a value with the default `object` type.
    pub fn new_object(value: T) -> Self {
        Self::new(value, Type::object())
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub const fn type_(&self) -> &Type {
        &self.r#type
    }
}

/// Convenience conversion for building typed lists by hand.
pub trait ToTyped: Sized {
    fn to_typed<I: Into<Type>>(self, r#type: I) -> Typed<Self> {
        Typed::new(self, r#type.into())
    }
}

impl ToTyped for Name {}
impl ToTyped for crate::parsed_types::Variable {}

/// A list of typed elements.
///
/// ## Example
/// ```
/// # use groundplan::parsed_types::{Name, ToTyped, TypedList};
/// let list = TypedList::from_iter([
///     Name::new("paper1").to_typed("paper"),
///     Name::new("web1").to_typed("webresult"),
/// ]);
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[1].type_().name(), &Name::new("webresult"));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TypedList<T>(Vec<Typed<T>>);

impl<T> TypedList<T> {
    pub const fn new(list: Vec<Typed<T>>) -> Self {
        Self(list)
    }

    pub fn values(&self) -> &[Typed<T>] {
        self.0.as_slice()
    }
}

impl<T> Default for TypedList<T> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<T> From<Vec<Typed<T>>> for TypedList<T> {
    fn from(list: Vec<Typed<T>>) -> Self {
        TypedList::new(list)
    }
}

impl<T> FromIterator<Typed<T>> for TypedList<T> {
    fn from_iter<I: IntoIterator<Item = Typed<T>>>(iter: I) -> Self {
        TypedList::new(iter.into_iter().collect())
    }
}

impl<T> Deref for TypedList<T> {
    type Target = [Typed<T>];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl<T> IntoIterator for TypedList<T> {
    type Item = Typed<T>;
    type IntoIter = std::vec::IntoIter<Typed<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
