use crate::search::{Atom, Condition, State, Task};

/// A ground action: an action schema instantiated with objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    /// The action schema index.
    pub index: usize,
    /// List of object indices that instantiate the action schema.
    pub instantiation: Vec<usize>,
    precondition: Condition,
    add_effects: Vec<Atom>,
    delete_effects: Vec<Atom>,
}

impl Action {
    pub fn new(
        index: usize,
        instantiation: Vec<usize>,
        precondition: Condition,
        add_effects: Vec<Atom>,
        delete_effects: Vec<Atom>,
    ) -> Self {
        Self {
            index,
            instantiation,
            precondition,
            add_effects,
            delete_effects,
        }
    }

    pub fn precondition(&self) -> &Condition {
        &self.precondition
    }

    pub fn add_effects(&self) -> &[Atom] {
        &self.add_effects
    }

    pub fn delete_effects(&self) -> &[Atom] {
        &self.delete_effects
    }

    #[inline(always)]
    pub fn is_applicable(&self, state: &State) -> bool {
        self.precondition.is_satisfied(state)
    }

    /// Renders the action as a plan step, e.g. `(analyze-paper paper1 query1
    /// inventory1)`.
    pub fn to_string(&self, task: &Task) -> String {
        let mut text = format!("({}", task.action_schemas()[self.index].name());
        for &object_index in &self.instantiation {
            text.push(' ');
            text.push_str(&task.objects[object_index].name);
        }
        text.push(')');
        text
    }
}
