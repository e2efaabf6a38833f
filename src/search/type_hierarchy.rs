//! Resolves the `:types` section into a tree rooted at `object`, with an
//! explicit ancestor table so subtype checks never walk the tree.
//!
//! A parent that is only ever named after a `-` is declared implicitly as a
//! direct subtype of `object`.

use crate::error::GroundingError;
use crate::parsed_types::{Name, TypedList, OBJECT_TYPE_NAME};
use std::collections::HashMap;

/// Index of the implicit root type `object`.
pub const OBJECT_TYPE: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeHierarchy {
    names: Vec<Name>,
    parents: Vec<Option<usize>>,
    /// `ancestors[t][a]` is true iff `t` equals `a` or descends from it.
    ancestors: Vec<Vec<bool>>,
    type_table: HashMap<Name, usize>,
}

impl TypeHierarchy {
    pub fn new(types: &TypedList<Name>) -> Result<Self, GroundingError> {
        let object = Name::new(OBJECT_TYPE_NAME);
        let mut names = vec![object];
        let mut type_table = HashMap::from([(object, OBJECT_TYPE)]);

        for typed in types.iter() {
            let name = *typed.value();
            if name == object {
                continue;
            }
            if type_table.insert(name, names.len()).is_some() {
                return Err(GroundingError::Duplicate { kind: "type", name });
            }
            names.push(name);
        }

        let declared = names.len();
        for typed in types.iter() {
            let parent_name = *typed.type_().name();
            if !type_table.contains_key(&parent_name) {
                type_table.insert(parent_name, names.len());
                names.push(parent_name);
            }
        }

        let mut parents = vec![None; names.len()];
        parents[declared..].fill(Some(OBJECT_TYPE));
        for typed in types.iter() {
            let index = type_table[typed.value()];
            if index == OBJECT_TYPE {
                continue;
            }
            parents[index] = Some(type_table[typed.type_().name()]);
        }

        let mut ancestors = vec![vec![false; names.len()]; names.len()];
        for (index, row) in ancestors.iter_mut().enumerate() {
            let mut current = Some(index);
            let mut steps = 0;
            while let Some(type_index) = current {
                if steps > names.len() {
                    return Err(GroundingError::CyclicTypes(names[index]));
                }
                row[type_index] = true;
                current = parents[type_index];
                steps += 1;
            }
        }

        Ok(Self {
            names,
            parents,
            ancestors,
            type_table,
        })
    }

    /// Looks up a type by name. `context` describes where the name was used.
    pub fn index_of(&self, name: &Name, context: &str) -> Result<usize, GroundingError> {
        self.type_table
            .get(name)
            .copied()
            .ok_or_else(|| GroundingError::UnknownType {
                name: *name,
                context: context.to_string(),
            })
    }

    /// Whether `sub` equals `ancestor` or descends from it.
    #[inline(always)]
    pub fn is_subtype(&self, sub: usize, ancestor: usize) -> bool {
        self.ancestors[sub][ancestor]
    }

    pub fn name(&self, index: usize) -> &Name {
        &self.names[index]
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parents[index]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsed_types::ToTyped;
    use crate::parsers::{parse_name, typed_list, Span};

    fn research_types() -> TypedList<Name> {
        TypedList::from_iter([
            Name::new("role").to_typed("agent"),
            Name::new("verifier").to_typed("agent"),
            Name::new("paper").to_typed("source"),
            Name::new("webresult").to_typed("source"),
            Name::new("agent").to_typed("object"),
            Name::new("source").to_typed("object"),
            Name::new("topic").to_typed("object"),
        ])
    }

    fn parse_types(input: &str) -> TypedList<Name> {
        let (_, list) = typed_list(parse_name)(Span::new(input)).unwrap();
        list
    }

    #[test]
    fn ancestors_are_transitive() {
        let types = TypeHierarchy::new(&research_types()).unwrap();
        let role = types.index_of(&Name::new("role"), "").unwrap();
        let agent = types.index_of(&Name::new("agent"), "").unwrap();
        let source = types.index_of(&Name::new("source"), "").unwrap();

        assert_eq!(types.len(), 8);
        assert!(types.is_subtype(role, role));
        assert!(types.is_subtype(role, agent));
        assert!(types.is_subtype(role, OBJECT_TYPE));
        assert!(!types.is_subtype(agent, role));
        assert!(!types.is_subtype(role, source));
        assert_eq!(types.parent(role), Some(agent));
        assert_eq!(types.parent(OBJECT_TYPE), None);
    }

    #[test]
    fn parents_named_only_after_a_dash_are_declared() {
        let types = TypeHierarchy::new(&parse_types("role verifier - agent topic")).unwrap();
        let role = types.index_of(&Name::new("role"), "").unwrap();
        let verifier = types.index_of(&Name::new("verifier"), "").unwrap();
        let agent = types.index_of(&Name::new("agent"), "").unwrap();
        let topic = types.index_of(&Name::new("topic"), "").unwrap();

        assert_eq!(types.len(), 5);
        assert_eq!(types.parent(agent), Some(OBJECT_TYPE));
        assert_eq!(types.parent(role), Some(agent));
        assert!(types.is_subtype(verifier, agent));
        assert!(types.is_subtype(agent, OBJECT_TYPE));
        assert!(!types.is_subtype(topic, agent));
    }

    #[test]
    fn implicit_and_explicit_parents_agree() {
        let implicit = TypeHierarchy::new(&parse_types("paper webresult - source")).unwrap();
        let explicit =
            TypeHierarchy::new(&parse_types("paper webresult - source source - object")).unwrap();
        for name in ["paper", "webresult", "source"] {
            let a = implicit.index_of(&Name::new(name), "").unwrap();
            let b = explicit.index_of(&Name::new(name), "").unwrap();
            assert_eq!(
                implicit.parent(a).map(|p| *implicit.name(p)),
                explicit.parent(b).map(|p| *explicit.name(p))
            );
        }
    }

    #[test]
    fn untyped_domain_has_only_object() {
        let types = TypeHierarchy::new(&TypedList::default()).unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types.name(OBJECT_TYPE), "object");
    }

    #[test]
    fn undeclared_type_lookup_is_rejected() {
        let types = TypeHierarchy::new(&parse_types("truck - vehicle")).unwrap();
        assert!(types.index_of(&Name::new("vehicle"), "").is_ok());
        assert!(matches!(
            types.index_of(&Name::new("boat"), "a parameter"),
            Err(GroundingError::UnknownType { name, .. }) if name == "boat"
        ));
    }

    #[test]
    fn cycles_are_rejected() {
        let list = TypedList::from_iter([
            Name::new("a").to_typed("b"),
            Name::new("b").to_typed("a"),
        ]);
        assert!(matches!(
            TypeHierarchy::new(&list),
            Err(GroundingError::CyclicTypes(_))
        ));
    }

    #[test]
    fn duplicates_are_rejected() {
        let list = TypedList::from_iter([
            Name::new("a").to_typed("object"),
            Name::new("a").to_typed("object"),
        ]);
        assert!(matches!(
            TypeHierarchy::new(&list),
            Err(GroundingError::Duplicate { kind: "type", .. })
        ));
    }
}
