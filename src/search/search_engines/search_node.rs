use crate::search::State;
use std::rc::Rc;

/// Position of a node in its [`crate::search::search_engines::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

#[derive(Debug, Clone)]
pub struct SearchNode {
    state: Rc<State>,
    /// Depth of the node, i.e. the length of the path from the root
    g: usize,
    /// Parent node and the index of the ground action that led here
    parent: Option<(NodeId, usize)>,
}

impl SearchNode {
    pub fn new_without_parent(state: Rc<State>) -> Self {
        Self {
            state,
            g: 0,
            parent: None,
        }
    }

    pub fn new_with_parent(state: Rc<State>, parent: &SearchNode, parent_id: NodeId, action: usize) -> Self {
        Self {
            state,
            g: parent.g + 1,
            parent: Some((parent_id, action)),
        }
    }

    pub fn get_state(&self) -> &Rc<State> {
        &self.state
    }

    pub fn get_g(&self) -> usize {
        self.g
    }

    pub fn get_parent(&self) -> Option<(NodeId, usize)> {
        self.parent
    }
}
