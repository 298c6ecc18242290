//! Search nodes and the arena that owns expanded nodes.

/// Handle to a node stored in a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One step of the search tree.
///
/// `parent` and `action` are both `None` only for the source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Person id.
    pub state: String,
    pub parent: Option<NodeId>,
    /// Movie id connecting this node to its parent.
    pub action: Option<String>,
}

impl SearchNode {
    pub fn root(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            parent: None,
            action: None,
        }
    }

    pub fn child(state: impl Into<String>, parent: NodeId, action: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            parent: Some(parent),
            action: Some(action.into()),
        }
    }
}

/// Arena of expanded nodes. Parents are stored as indexes into it, so the
/// tree has no ownership cycles and lives only as long as one search.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move a node into the arena.
    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Handles are only minted by `insert`, so lookups never miss.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
