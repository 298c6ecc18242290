//
//  types.rs
//  Degrees
//

use serde::{Deserialize, Serialize};

/// A node in the co-star graph: either a person or a movie.
///
/// Edges only ever connect a `Person` to a `Movie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Person(Person),
    Movie(Movie),
}

impl NodeData {
    pub fn id(&self) -> &str {
        match self {
            NodeData::Person(p) => &p.id,
            NodeData::Movie(m) => &m.id,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Person(_) => NodeKind::Person,
            NodeData::Movie(_) => NodeKind::Movie,
        }
    }
}

/// The side of the bipartite graph a node lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Person,
    Movie,
}

/// A person as loaded from `people.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub birth: Option<i32>,
}

/// A movie as loaded from `movies.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: Option<i32>,
}

/// Raw row of `people.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub birth: String,
}

/// Raw row of `movies.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
}

/// Raw row of `stars.csv`: one cast membership.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StarRecord {
    pub person_id: String,
    pub movie_id: String,
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Self {
            birth: parse_year(&record.birth),
            id: record.id,
            name: record.name,
        }
    }
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Self {
            year: parse_year(&record.year),
            id: record.id,
            title: record.title,
        }
    }
}

/// Blank or non-numeric years are treated as unknown.
pub(crate) fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// A person matching an ambiguous name lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub birth: Option<i32>,
}

/// Graph statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub people: usize,
    pub movies: usize,
    pub cast_edges: usize,
    pub unique_names: usize,
}
