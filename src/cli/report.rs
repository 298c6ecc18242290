//! Human-readable and JSON rendering of a search result.

use serde::Serialize;
use std::io::Write;

use crate::graph::MovieGraph;
use crate::search::SearchResult;

/// A search result with ids replaced by names and titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub connected: bool,
    pub degrees: Option<usize>,
    pub explored: usize,
    pub steps: Vec<ReportStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportStep {
    pub step: usize,
    pub person_a: String,
    pub person_b: String,
    pub movie: String,
}

impl Report {
    pub fn new(graph: &MovieGraph, source: &str, result: &SearchResult) -> Self {
        let Some(path) = result.path() else {
            return Self {
                connected: false,
                degrees: None,
                explored: result.stats.explored,
                steps: Vec::new(),
            };
        };

        let person_name = |id: &str| {
            graph
                .person(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| id.to_string())
        };
        let movie_title = |id: &str| {
            graph
                .movie(id)
                .map(|m| m.title.clone())
                .unwrap_or_else(|| id.to_string())
        };

        let mut previous = source;
        let mut steps = Vec::with_capacity(path.degrees());
        for (i, step) in path.steps().iter().enumerate() {
            steps.push(ReportStep {
                step: i + 1,
                person_a: person_name(previous),
                person_b: person_name(&step.person_id),
                movie: movie_title(&step.movie_id),
            });
            previous = step.person_id.as_str();
        }

        Self {
            connected: true,
            degrees: Some(path.degrees()),
            explored: result.stats.explored,
            steps,
        }
    }

    /// The text output, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        let Some(degrees) = self.degrees else {
            return vec!["Not connected.".to_string()];
        };

        let mut lines = Vec::with_capacity(self.steps.len() + 1);
        lines.push(format!("{} degrees of separation.", degrees));
        for s in &self.steps {
            lines.push(format!(
                "{}: {} and {} starred in {}",
                s.step, s.person_a, s.person_b, s.movie
            ));
        }
        lines
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
