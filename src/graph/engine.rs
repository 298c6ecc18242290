//
//  engine.rs
//  Degrees
//

use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

use super::types::*;

/// The co-star graph: people and movies joined by cast edges, plus the
/// indexes needed for O(1) lookup by id and by name.
///
/// Built once at load time and read-only afterwards.
#[derive(Debug, Clone)]
pub struct MovieGraph {
    /// Bipartite graph; every edge joins a person to a movie.
    pub(crate) graph: UnGraph<NodeData, ()>,
    /// Index: person id -> node index.
    pub(crate) person_index: HashMap<String, NodeIndex>,
    /// Index: movie id -> node index.
    pub(crate) movie_index: HashMap<String, NodeIndex>,
    /// Index: lowercase name -> person ids (names are not unique).
    pub(crate) name_index: HashMap<String, Vec<String>>,
}

impl MovieGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            person_index: HashMap::new(),
            movie_index: HashMap::new(),
            name_index: HashMap::new(),
        }
    }

    // ─── Node Operations ────────────────────────────────────────

    /// Add a person. Returns the node index.
    /// A repeated id replaces the earlier row and re-files it under the new name.
    pub fn add_person(&mut self, person: Person) -> NodeIndex {
        let key = person.name.to_lowercase();

        if let Some(&idx) = self.person_index.get(&person.id) {
            let old_key = match self.graph.node_weight(idx) {
                Some(NodeData::Person(old)) => Some(old.name.to_lowercase()),
                _ => None,
            };
            if let Some(old_key) = old_key {
                self.unindex_name(&old_key, &person.id);
            }
            self.index_name(key, &person.id);
            self.graph[idx] = NodeData::Person(person);
            return idx;
        }

        self.index_name(key, &person.id);
        let id = person.id.clone();
        let idx = self.graph.add_node(NodeData::Person(person));
        self.person_index.insert(id, idx);
        idx
    }

    /// Add a movie. Returns the node index. A repeated id replaces the earlier row.
    pub fn add_movie(&mut self, movie: Movie) -> NodeIndex {
        if let Some(&idx) = self.movie_index.get(&movie.id) {
            self.graph[idx] = NodeData::Movie(movie);
            return idx;
        }

        let id = movie.id.clone();
        let idx = self.graph.add_node(NodeData::Movie(movie));
        self.movie_index.insert(id, idx);
        idx
    }

    // ─── Edge Operations ────────────────────────────────────────

    /// Record that `person_id` stars in `movie_id`.
    ///
    /// Returns `false` and leaves the graph untouched when either id is
    /// unknown. Recording the same pair twice keeps a single edge.
    pub fn add_star(&mut self, person_id: &str, movie_id: &str) -> bool {
        let (Some(&person), Some(&movie)) = (
            self.person_index.get(person_id),
            self.movie_index.get(movie_id),
        ) else {
            return false;
        };

        if self.graph.find_edge(person, movie).is_none() {
            self.graph.add_edge(person, movie, ());
        }
        true
    }

    // ─── Internal Helpers ───────────────────────────────────────

    fn index_name(&mut self, key: String, person_id: &str) {
        let ids = self.name_index.entry(key).or_default();
        if !ids.iter().any(|id| id == person_id) {
            ids.push(person_id.to_string());
        }
    }

    fn unindex_name(&mut self, key: &str, person_id: &str) {
        if let Some(ids) = self.name_index.get_mut(key) {
            ids.retain(|id| id != person_id);
            if ids.is_empty() {
                self.name_index.remove(key);
            }
        }
    }
}

impl Default for MovieGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn person(id: &str, name: &str, birth: Option<i32>) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            birth,
        }
    }

    pub(crate) fn movie(id: &str, title: &str, year: Option<i32>) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            year,
        }
    }

    /// Tom Hanks and Cher share M1, Cher and Emma Watson share M2.
    pub(crate) fn sample_graph() -> MovieGraph {
        let mut graph = MovieGraph::new();
        graph.add_person(person("A", "Tom Hanks", Some(1956)));
        graph.add_person(person("B", "Cher", Some(1946)));
        graph.add_person(person("C", "Emma Watson", Some(1990)));
        graph.add_movie(movie("M1", "Movie One", Some(1990)));
        graph.add_movie(movie("M2", "Movie Two", Some(2001)));
        graph.add_star("A", "M1");
        graph.add_star("B", "M1");
        graph.add_star("B", "M2");
        graph.add_star("C", "M2");
        graph
    }

    #[test]
    fn test_empty_graph() {
        let graph = MovieGraph::new();
        let stats = graph.stats();
        assert_eq!(stats.people, 0);
        assert_eq!(stats.movies, 0);
        assert_eq!(stats.cast_edges, 0);
    }

    #[test]
    fn test_add_person_and_movie() {
        let graph = sample_graph();
        let stats = graph.stats();
        assert_eq!(stats.people, 3);
        assert_eq!(stats.movies, 2);
        assert_eq!(stats.cast_edges, 4);
        assert_eq!(stats.unique_names, 3);
    }

    #[test]
    fn test_add_star_unknown_ids_is_skipped() {
        let mut graph = sample_graph();
        assert!(!graph.add_star("nobody", "M1"));
        assert!(!graph.add_star("A", "no-such-movie"));
        assert_eq!(graph.stats().cast_edges, 4);
    }

    #[test]
    fn test_add_star_duplicate_keeps_single_edge() {
        let mut graph = sample_graph();
        assert!(graph.add_star("A", "M1"));
        assert_eq!(graph.stats().cast_edges, 4);
        assert_eq!(graph.neighbors("A").len(), 2);
    }

    #[test]
    fn test_readd_person_reindexes_name() {
        let mut graph = sample_graph();
        graph.add_person(person("A", "Thomas Hanks", Some(1956)));

        assert!(graph.person_ids_for_name("tom hanks").is_empty());
        assert_eq!(graph.person_ids_for_name("thomas hanks"), vec!["A".to_string()]);
        assert_eq!(graph.stats().people, 3);
        // Cast edges survive the replacement.
        assert_eq!(graph.neighbors("A").len(), 2);
    }
}
