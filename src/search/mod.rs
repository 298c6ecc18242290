//! Shortest-path search over the co-star graph.
//!
//! - [`frontier`]: exploration order (stack or queue)
//! - [`node`]: search nodes and the arena holding expanded ones
//! - [`engine`]: the explore/expand loop
//! - [`path`]: turning the terminal node into source-to-target steps

pub mod engine;
pub mod frontier;
pub mod node;
pub mod path;

pub use engine::{search, shortest_path, SearchOptions, SearchOutcome, SearchResult, SearchStats};
pub use frontier::{AnyFrontier, Frontier, FrontierKind, QueueFrontier, StackFrontier};
pub use node::{NodeId, SearchNode, SearchTree};
pub use path::{export_path, Path, PathStep};
