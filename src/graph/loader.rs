//
//  loader.rs
//  Degrees
//

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

use super::engine::MovieGraph;
use super::types::{Movie, MovieRecord, Person, PersonRecord, StarRecord};
use crate::error::{DegreesError, Result};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

impl MovieGraph {
    /// Build a graph from already-parsed records.
    ///
    /// Cast rows naming an unknown person or movie are skipped.
    /// Returns the graph and the number of skipped cast rows.
    pub fn build_from_records(
        people: impl IntoIterator<Item = Person>,
        movies: impl IntoIterator<Item = Movie>,
        stars: impl IntoIterator<Item = StarRecord>,
    ) -> (Self, usize) {
        let mut graph = MovieGraph::new();

        for person in people {
            graph.add_person(person);
        }
        for movie in movies {
            graph.add_movie(movie);
        }

        let mut skipped = 0;
        for star in stars {
            if !graph.add_star(&star.person_id, &star.movie_id) {
                debug!(
                    person_id = %star.person_id,
                    movie_id = %star.movie_id,
                    "skipping cast row with unknown id"
                );
                skipped += 1;
            }
        }

        (graph, skipped)
    }
}

/// Load `people.csv`, `movies.csv` and `stars.csv` from `dir`.
///
/// A people or movies row that fails to parse is an error. A stars row that
/// fails to parse, or names an unknown id, is skipped.
pub fn load_dataset(dir: &Path) -> Result<MovieGraph> {
    let people: Vec<Person> = read_records::<PersonRecord>(&dir.join(PEOPLE_FILE))?
        .into_iter()
        .map(Person::from)
        .collect();
    let movies: Vec<Movie> = read_records::<MovieRecord>(&dir.join(MOVIES_FILE))?
        .into_iter()
        .map(Movie::from)
        .collect();
    let (stars, unreadable) = read_records_lenient::<StarRecord>(&dir.join(STARS_FILE))?;

    let (graph, unknown) = MovieGraph::build_from_records(people, movies, stars);

    let stats = graph.stats();
    info!(
        dir = %dir.display(),
        people = stats.people,
        movies = stats.movies,
        cast_edges = stats.cast_edges,
        skipped_rows = unreadable + unknown,
        "dataset loaded"
    );

    Ok(graph)
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    if !path.is_file() {
        return Err(DegreesError::MissingFile(path.to_path_buf()));
    }
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| DegreesError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = open_reader(path)?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|source| DegreesError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Like `read_records`, but drops rows that fail to parse.
/// Returns the rows and the number dropped.
fn read_records_lenient<T: DeserializeOwned>(path: &Path) -> Result<(Vec<T>, usize)> {
    let mut reader = open_reader(path)?;
    let mut rows = Vec::new();
    let mut dropped = 0;

    for (line, row) in reader.deserialize::<T>().enumerate() {
        match row {
            Ok(row) => rows.push(row),
            Err(e) => {
                debug!(file = %path.display(), row = line + 1, error = %e, "skipping unreadable row");
                dropped += 1;
            }
        }
    }

    Ok((rows, dropped))
}
