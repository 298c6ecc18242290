//! Interactive name input.
//!
//! Reads names line by line and walks the user through picking one person
//! when a name is shared.

use std::io::{BufRead, Write};

use crate::error::{DegreesError, Result};
use crate::graph::{Candidate, NameResolver, Resolution};

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one line. End of input reads as an empty line.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Resolve a person id from `name`, asking for the name when it is `None`
    /// and for an id when the name is ambiguous.
    pub fn person(&mut self, resolver: &NameResolver<'_>, name: Option<&str>) -> Result<String> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.ask("Name: ")?,
        };

        let resolution = match resolver.resolve(&name) {
            Resolution::Ambiguous(candidates) => {
                self.list_candidates(&name, &candidates)?;
                let choice = self.ask("Intended Person ID: ")?;
                Resolution::Ambiguous(candidates).select(&choice)
            }
            other => other,
        };

        match resolution {
            Resolution::Unique(id) => Ok(id),
            _ => Err(DegreesError::PersonNotFound { name }),
        }
    }

    fn list_candidates(&mut self, name: &str, candidates: &[Candidate]) -> Result<()> {
        writeln!(self.output, "Which '{}'?", name)?;
        for c in candidates {
            let birth = c.birth.map(|b| b.to_string()).unwrap_or_default();
            writeln!(self.output, "ID: {}, Name: {}, Birth: {}", c.id, c.name, birth)?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
