//
//  engine.rs
//  Degrees
//

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

use super::frontier::{Frontier, QueueFrontier};
use super::node::{SearchNode, SearchTree};
use super::path::{export_path, Path};
use crate::graph::MovieGraph;

/// Knobs for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Sort neighbors by `(movie_id, person_id)` before use, so the same
    /// path is returned every time when several shortest paths exist.
    pub deterministic: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            deterministic: true,
        }
    }
}

/// How a search ended. Not being connected is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Connected(Path),
    NotConnected,
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States removed from the frontier and expanded.
    pub explored: usize,
    /// Nodes added to the frontier, the source included.
    pub enqueued: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn path(&self) -> Option<&Path> {
        match &self.outcome {
            SearchOutcome::Connected(path) => Some(path),
            SearchOutcome::NotConnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Connected(_))
    }

    pub fn into_path(self) -> Option<Path> {
        match self.outcome {
            SearchOutcome::Connected(path) => Some(path),
            SearchOutcome::NotConnected => None,
        }
    }
}

/// Shortest path from `source` to `target`: breadth-first with default options.
pub fn shortest_path(graph: &MovieGraph, source: &str, target: &str) -> SearchResult {
    search(
        graph,
        source,
        target,
        QueueFrontier::new(),
        SearchOptions::default(),
    )
}

/// Search the co-star graph from `source` to `target` in the order given by
/// `frontier`.
///
/// Each state enters the frontier at most once, so the loop runs at most once
/// per reachable person. With a [`QueueFrontier`] the returned path is a
/// shortest one; a stack only guarantees some path.
pub fn search<F: Frontier>(
    graph: &MovieGraph,
    source: &str,
    target: &str,
    mut frontier: F,
    options: SearchOptions,
) -> SearchResult {
    debug!(source, target, deterministic = options.deterministic, "search started");

    let mut tree = SearchTree::new();
    let mut explored: HashSet<String> = HashSet::new();
    let mut stats = SearchStats::default();

    frontier.add(SearchNode::root(source));
    stats.enqueued += 1;

    loop {
        if frontier.is_empty() {
            debug!(source, target, explored = stats.explored, "no connection");
            return SearchResult {
                outcome: SearchOutcome::NotConnected,
                stats,
            };
        }

        let node = frontier.remove_next();

        if node.state == target {
            return found(&tree, &node, stats);
        }

        explored.insert(node.state.clone());
        stats.explored += 1;
        let state = node.state.clone();
        let current = tree.insert(node);

        let mut neighbors = graph.neighbors(&state);
        if options.deterministic {
            neighbors.sort_unstable();
        }
        trace!(state = %state, neighbors = neighbors.len(), frontier = frontier.len(), "expanding");

        // First discovery under breadth-first order is already minimal, so the
        // target can be taken straight from the neighbor list.
        if let Some((movie_id, person_id)) = neighbors.iter().find(|(_, p)| p == target) {
            let terminal = SearchNode::child(person_id.clone(), current, movie_id.clone());
            return found(&tree, &terminal, stats);
        }

        for (movie_id, person_id) in neighbors {
            if !frontier.contains_state(&person_id) && !explored.contains(&person_id) {
                frontier.add(SearchNode::child(person_id, current, movie_id));
                stats.enqueued += 1;
            }
        }
    }
}

fn found(tree: &SearchTree, terminal: &SearchNode, stats: SearchStats) -> SearchResult {
    let path = export_path(tree, terminal);
    debug!(
        degrees = path.degrees(),
        explored = stats.explored,
        enqueued = stats.enqueued,
        "connection found"
    );
    SearchResult {
        outcome: SearchOutcome::Connected(path),
        stats,
    }
}
