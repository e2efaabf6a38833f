use crate::search::search_engines::{NodeId, SearchNode};
use crate::search::{Action, Plan, State};
use std::collections::HashMap;
use std::rc::Rc;

/// Every state reached so far, each with the node that first reached it.
/// States are keyed by content, so reaching a state a second time is
/// detected no matter which path led there.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: Vec<SearchNode>,
    registered_states: HashMap<Rc<State>, NodeId>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let initial_state = Rc::new(initial_state);
        let mut registered_states = HashMap::new();
        registered_states.insert(initial_state.clone(), NodeId(0));

        Self {
            nodes: vec![SearchNode::new_without_parent(initial_state)],
            registered_states,
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Registers `state` as reached from `parent_id` via the action at
    /// `action_index`, unless it has been reached before.
    pub fn insert_if_new(&mut self, state: State, parent_id: NodeId, action_index: usize) -> Option<NodeId> {
        if self.registered_states.contains_key(&state) {
            return None;
        }
        let state = Rc::new(state);
        let node_id = NodeId(self.nodes.len());
        let node = SearchNode::new_with_parent(state.clone(), self.get_node(parent_id), parent_id, action_index);
        self.nodes.push(node);
        self.registered_states.insert(state, node_id);
        Some(node_id)
    }

    /// Walks the parent pointers from `node_id` back to the root.
    pub fn extract_plan(&self, node_id: NodeId, actions: &[Action]) -> Plan {
        let mut steps = vec![];
        let mut current = self.get_node(node_id);
        while let Some((parent_id, action_index)) = current.get_parent() {
            steps.push(actions[action_index].clone());
            current = self.get_node(parent_id);
        }
        steps.reverse();
        Plan::new(steps)
    }

    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        &self.nodes[node_id.0]
    }

    pub fn get_state(&self, node_id: NodeId) -> &Rc<State> {
        self.get_node(node_id).get_state()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Atom, Condition};
    use smallvec::smallvec;

    fn fact(predicate: usize) -> Atom {
        Atom::new(predicate, smallvec![])
    }

    fn add(predicate: usize) -> Action {
        Action::new(predicate, vec![], Condition::default(), vec![fact(predicate)], vec![])
    }

    #[test]
    fn duplicates_are_detected_by_content() {
        let mut space = SearchSpace::new(State::default());
        let root = space.root_id();

        let first = space.insert_if_new(State::new([fact(0), fact(1)]), root, 0);
        assert!(first.is_some());
        assert_eq!(space.insert_if_new(State::new([fact(1), fact(0)]), root, 1), None);
        assert_eq!(space.insert_if_new(State::default(), root, 0), None);
        assert_eq!(space.len(), 2);
    }

    #[test]
    fn plan_follows_parent_pointers() {
        let actions = vec![add(0), add(1), add(2)];
        let mut space = SearchSpace::new(State::default());
        let s1 = space
            .insert_if_new(State::new([fact(2)]), space.root_id(), 2)
            .unwrap();
        let s2 = space
            .insert_if_new(State::new([fact(0), fact(2)]), s1, 0)
            .unwrap();

        assert_eq!(space.get_node(s2).get_g(), 2);
        assert_eq!(space.extract_plan(s2, &actions).steps(), &[add(2), add(0)]);
        assert!(space.extract_plan(space.root_id(), &actions).is_empty());
    }
}
