//! # Degrees
//!
//! Degrees of separation between actors.
//!
//! Loads a dataset of people, movies and cast memberships into a bipartite
//! co-star graph and finds the shortest chain of "starred in the same movie"
//! links between two people with breadth-first search.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use degrees::{load_dataset, shortest_path, NameResolver};
//! use std::path::Path;
//!
//! let graph = load_dataset(Path::new("small")).unwrap();
//! let resolver = NameResolver::new(&graph);
//!
//! let source = resolver.resolve("Kevin Bacon");
//! let target = resolver.resolve("Tom Hanks");
//!
//! if let (Some(s), Some(t)) = (source.person_id(), target.person_id()) {
//!     let result = shortest_path(&graph, s, t);
//!     match result.path() {
//!         Some(path) => println!("{} degrees of separation.", path.degrees()),
//!         None => println!("Not connected."),
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod search;

// Re-exports for convenience
pub use config::DegreesConfig;
pub use error::{DegreesError, Result};
pub use graph::{load_dataset, MovieGraph, NameResolver, Resolution};
pub use search::{
    search, shortest_path, FrontierKind, Path, PathStep, SearchOptions, SearchOutcome,
    SearchResult,
};
