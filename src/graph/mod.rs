//! Co-star graph module — people, movies and the cast edges between them.
//!
//! Provides the graph data model, the CSV loader, id/name lookups
//! and name resolution.

pub mod engine;
pub mod loader;
pub mod query;
pub mod resolve;
pub mod types;

pub use engine::MovieGraph;
pub use loader::load_dataset;
pub use resolve::{NameResolver, Resolution};
pub use types::{
    Candidate, GraphStats, Movie, MovieRecord, NodeData, NodeKind, Person, PersonRecord,
    StarRecord,
};
