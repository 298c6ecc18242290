//
//  query.rs
//  Degrees
//

use petgraph::graph::NodeIndex;
use std::collections::HashSet;

use super::engine::MovieGraph;
use super::types::*;

impl MovieGraph {
    /// Look up a person by id.
    pub fn person(&self, id: &str) -> Option<&Person> {
        let &idx = self.person_index.get(id)?;
        match &self.graph[idx] {
            NodeData::Person(p) => Some(p),
            NodeData::Movie(_) => None,
        }
    }

    /// Look up a movie by id.
    pub fn movie(&self, id: &str) -> Option<&Movie> {
        let &idx = self.movie_index.get(id)?;
        match &self.graph[idx] {
            NodeData::Movie(m) => Some(m),
            NodeData::Person(_) => None,
        }
    }

    /// Ids of every person filed under `name`, compared case-insensitively.
    pub fn person_ids_for_name(&self, name: &str) -> &[String] {
        self.name_index
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Movie ids a person appears in. Empty for an unknown id.
    pub fn movies_of(&self, person_id: &str) -> HashSet<&str> {
        self.person_index
            .get(person_id)
            .map(|&idx| self.adjacent_ids(idx))
            .unwrap_or_default()
    }

    /// Person ids starring in a movie. Empty for an unknown id.
    pub fn stars_of(&self, movie_id: &str) -> HashSet<&str> {
        self.movie_index
            .get(movie_id)
            .map(|&idx| self.adjacent_ids(idx))
            .unwrap_or_default()
    }

    /// Every `(movie_id, person_id)` pair such that the person co-starred
    /// with `person_id` in that movie.
    ///
    /// The person itself appears once per movie it is in. An unknown id
    /// yields no neighbors. Order follows the graph's adjacency order and
    /// carries no meaning.
    pub fn neighbors(&self, person_id: &str) -> Vec<(String, String)> {
        let Some(&person_idx) = self.person_index.get(person_id) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        for movie_idx in self.graph.neighbors(person_idx) {
            let NodeData::Movie(movie) = &self.graph[movie_idx] else {
                continue;
            };
            for star_idx in self.graph.neighbors(movie_idx) {
                if let NodeData::Person(star) = &self.graph[star_idx] {
                    result.push((movie.id.clone(), star.id.clone()));
                }
            }
        }
        result
    }

    /// Iterate over every loaded person.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.graph.node_weights().filter_map(|n| match n {
            NodeData::Person(p) => Some(p),
            NodeData::Movie(_) => None,
        })
    }

    /// Get graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            people: self.person_index.len(),
            movies: self.movie_index.len(),
            cast_edges: self.graph.edge_count(),
            unique_names: self.name_index.len(),
        }
    }

    fn adjacent_ids(&self, idx: NodeIndex) -> HashSet<&str> {
        self.graph
            .neighbors(idx)
            .map(|n| self.graph[n].id())
            .collect()
    }
}
