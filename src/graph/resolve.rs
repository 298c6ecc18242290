//! Name resolution: free-text name -> person id.

use super::engine::MovieGraph;
use super::types::Candidate;

/// Outcome of resolving a name against the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NotFound,
    Unique(String),
    /// Several people share the name. Sorted by id.
    Ambiguous(Vec<Candidate>),
}

impl Resolution {
    /// Narrow an ambiguous resolution to the chosen id.
    ///
    /// An id outside the candidate list resolves to `NotFound`.
    /// `Unique` and `NotFound` are returned unchanged.
    pub fn select(self, id: &str) -> Resolution {
        match self {
            Resolution::Ambiguous(candidates) => {
                let id = id.trim();
                if candidates.iter().any(|c| c.id == id) {
                    Resolution::Unique(id.to_string())
                } else {
                    Resolution::NotFound
                }
            }
            other => other,
        }
    }

    /// The resolved id, if exactly one person matched.
    pub fn person_id(&self) -> Option<&str> {
        match self {
            Resolution::Unique(id) => Some(id),
            _ => None,
        }
    }
}

/// Resolves names through the graph's lowercase name index.
pub struct NameResolver<'g> {
    graph: &'g MovieGraph,
}

impl<'g> NameResolver<'g> {
    pub fn new(graph: &'g MovieGraph) -> Self {
        Self { graph }
    }

    /// Case-insensitive exact match on the full name.
    pub fn resolve(&self, name: &str) -> Resolution {
        let ids = self.graph.person_ids_for_name(name.trim());

        match ids {
            [] => Resolution::NotFound,
            [id] => Resolution::Unique(id.clone()),
            _ => {
                let mut candidates: Vec<Candidate> = ids
                    .iter()
                    .filter_map(|id| self.graph.person(id))
                    .map(|p| Candidate {
                        id: p.id.clone(),
                        name: p.name.clone(),
                        birth: p.birth,
                    })
                    .collect();
                candidates.sort_by(|a, b| a.id.cmp(&b.id));
                Resolution::Ambiguous(candidates)
            }
        }
    }
}
