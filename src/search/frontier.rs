//! Exploration order for the search.
//!
//! A [`Frontier`] holds discovered-but-unexplored nodes. [`StackFrontier`]
//! removes the newest node (depth-first), [`QueueFrontier`] the oldest
//! (breadth-first). Only the queue guarantees shortest paths.

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;

use super::node::SearchNode;

/// Capabilities the search engine needs from an exploration order.
pub trait Frontier {
    fn add(&mut self, node: SearchNode);

    /// Remove the next node in this frontier's order.
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty. Callers check [`Frontier::is_empty`] first.
    fn remove_next(&mut self) -> SearchNode;

    fn is_empty(&self) -> bool;

    /// Whether a node for `state` is waiting in the frontier.
    fn contains_state(&self, state: &str) -> bool;

    fn len(&self) -> usize;
}

/// Last-in, first-out.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<SearchNode>,
    states: HashSet<String>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: SearchNode) {
        self.states.insert(node.state.clone());
        self.nodes.push(node);
    }

    fn remove_next(&mut self) -> SearchNode {
        let Some(node) = self.nodes.pop() else {
            panic!("remove_next called on an empty frontier");
        };
        self.states.remove(&node.state);
        node
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// First-in, first-out.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<SearchNode>,
    states: HashSet<String>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: SearchNode) {
        self.states.insert(node.state.clone());
        self.nodes.push_back(node);
    }

    fn remove_next(&mut self) -> SearchNode {
        let Some(node) = self.nodes.pop_front() else {
            panic!("remove_next called on an empty frontier");
        };
        self.states.remove(&node.state);
        node
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Exploration order selectable from config or the command line.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FrontierKind {
    /// Depth-first. Finds a path, not necessarily the shortest.
    Stack,
    /// Breadth-first. Finds a shortest path.
    #[default]
    Queue,
}

impl FrontierKind {
    pub fn build(self) -> AnyFrontier {
        match self {
            FrontierKind::Stack => AnyFrontier::Stack(StackFrontier::new()),
            FrontierKind::Queue => AnyFrontier::Queue(QueueFrontier::new()),
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierKind::Stack => write!(f, "stack"),
            FrontierKind::Queue => write!(f, "queue"),
        }
    }
}

/// Either frontier, chosen at runtime.
#[derive(Debug)]
pub enum AnyFrontier {
    Stack(StackFrontier),
    Queue(QueueFrontier),
}

impl AnyFrontier {
    pub fn kind(&self) -> FrontierKind {
        match self {
            AnyFrontier::Stack(_) => FrontierKind::Stack,
            AnyFrontier::Queue(_) => FrontierKind::Queue,
        }
    }
}

impl Frontier for AnyFrontier {
    fn add(&mut self, node: SearchNode) {
        match self {
            AnyFrontier::Stack(f) => f.add(node),
            AnyFrontier::Queue(f) => f.add(node),
        }
    }

    fn remove_next(&mut self) -> SearchNode {
        match self {
            AnyFrontier::Stack(f) => f.remove_next(),
            AnyFrontier::Queue(f) => f.remove_next(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            AnyFrontier::Stack(f) => f.is_empty(),
            AnyFrontier::Queue(f) => f.is_empty(),
        }
    }

    fn contains_state(&self, state: &str) -> bool {
        match self {
            AnyFrontier::Stack(f) => f.contains_state(state),
            AnyFrontier::Queue(f) => f.contains_state(state),
        }
    }

    fn len(&self) -> usize {
        match self {
            AnyFrontier::Stack(f) => f.len(),
            AnyFrontier::Queue(f) => f.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<F: Frontier>(frontier: &mut F) {
        for state in ["a", "b", "c"] {
            frontier.add(SearchNode::root(state));
        }
    }

    fn drain<F: Frontier>(frontier: &mut F) -> Vec<String> {
        let mut order = Vec::new();
        while !frontier.is_empty() {
            order.push(frontier.remove_next().state);
        }
        order
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut frontier = StackFrontier::new();
        fill(&mut frontier);
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut frontier = QueueFrontier::new();
        fill(&mut frontier);
        assert_eq!(drain(&mut frontier), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_contains_state_tracks_membership() {
        let mut frontier = QueueFrontier::new();
        fill(&mut frontier);
        assert!(frontier.contains_state("b"));
        assert!(!frontier.contains_state("z"));

        frontier.remove_next();
        assert!(!frontier.contains_state("a"));
        assert!(frontier.contains_state("c"));
    }

    #[test]
    #[should_panic(expected = "empty frontier")]
    fn test_stack_remove_from_empty_panics() {
        StackFrontier::new().remove_next();
    }

    #[test]
    #[should_panic(expected = "empty frontier")]
    fn test_queue_remove_from_empty_panics() {
        QueueFrontier::new().remove_next();
    }

    #[test]
    fn test_kind_builds_matching_frontier() {
        let mut stack = FrontierKind::Stack.build();
        let mut queue = FrontierKind::Queue.build();
        assert_eq!(stack.kind(), FrontierKind::Stack);
        assert_eq!(queue.kind(), FrontierKind::Queue);

        fill(&mut stack);
        fill(&mut queue);
        assert!(stack.contains_state("a"));
        assert_eq!(drain(&mut stack), vec!["c", "b", "a"]);
        assert_eq!(drain(&mut queue), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_default_kind_is_queue() {
        assert_eq!(FrontierKind::default(), FrontierKind::Queue);
        assert_eq!(FrontierKind::Queue.to_string(), "queue");
    }
}
