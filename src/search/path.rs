//! Path reconstruction from the search tree.

use serde::Serialize;

use super::node::{SearchNode, SearchTree};

/// One hop: `person_id` was reached through `movie_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub movie_id: String,
    pub person_id: String,
}

impl PathStep {
    pub fn new(movie_id: impl Into<String>, person_id: impl Into<String>) -> Self {
        Self {
            movie_id: movie_id.into(),
            person_id: person_id.into(),
        }
    }
}

/// Ordered steps from source to target. The source itself is not a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// Number of co-starring links.
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The path as `(movie_id, person_id)` pairs.
    pub fn to_pairs(&self) -> Vec<(&str, &str)> {
        self.steps
            .iter()
            .map(|s| (s.movie_id.as_str(), s.person_id.as_str()))
            .collect()
    }
}

impl IntoIterator for Path {
    type Item = PathStep;
    type IntoIter = std::vec::IntoIter<PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Walk parent links from `terminal` back to the source and return the
/// steps in source-to-target order.
///
/// `terminal` may live outside the arena (the engine synthesizes it when the
/// target shows up among a node's neighbors); its ancestors are in `tree`.
/// A terminal without a parent is the source itself, giving an empty path.
pub fn export_path(tree: &SearchTree, terminal: &SearchNode) -> Path {
    let mut steps = Vec::new();
    let mut node = terminal;

    while let (Some(parent), Some(action)) = (node.parent, node.action.as_ref()) {
        steps.push(PathStep::new(action.clone(), node.state.clone()));
        node = tree.get(parent);
    }

    steps.reverse();
    Path::new(steps)
}
