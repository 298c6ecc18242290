//! CLI module for degrees.
//!
//! `degrees [DIRECTORY]` loads a dataset, asks for two names and prints how
//! they are connected.
//!
//! - prompt: name input and disambiguation
//! - report: text / JSON output

pub mod prompt;
pub mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{DegreesConfig, DEFAULT_CONFIG_FILE};
use crate::graph::{load_dataset, NameResolver};
use crate::search::{search, FrontierKind, SearchOptions};

pub use prompt::Prompt;
pub use report::{Report, ReportStep};

#[derive(Parser, Debug)]
#[command(name = "degrees")]
#[command(about = "Degrees of separation between two actors", long_about = None)]
pub struct Cli {
    /// Dataset directory with people.csv, movies.csv and stars.csv (default: large)
    pub directory: Option<PathBuf>,

    /// Path to a TOML config file (default: ./degrees.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exploration order; only queue guarantees a shortest path
    #[arg(short, long, value_enum)]
    pub frontier: Option<FrontierKind>,

    /// Source person's name (prompted for when omitted)
    #[arg(long)]
    pub source: Option<String>,

    /// Target person's name (prompted for when omitted)
    #[arg(long)]
    pub target: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective settings after merging the config file with CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub directory: PathBuf,
    pub frontier: FrontierKind,
    pub options: SearchOptions,
}

impl Cli {
    /// Load the config named by `--config`, or `degrees.toml` when present.
    pub fn load_config(&self) -> crate::Result<DegreesConfig> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        DegreesConfig::load(&path)
    }

    /// CLI flags win over config values.
    pub fn settings(&self, config: &DegreesConfig) -> Settings {
        Settings {
            directory: self
                .directory
                .clone()
                .unwrap_or_else(|| config.data.directory.clone()),
            frontier: self.frontier.unwrap_or(config.search.frontier),
            options: config.search.options(),
        }
    }
}

/// Load, ask, search, report.
///
/// `input`/`prompt_out` carry the interactive exchange; the result goes to
/// `output`.
pub fn run<R, P, W>(cli: &Cli, input: R, prompt_out: P, mut output: W) -> Result<()>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let config = cli.load_config()?;
    let settings = cli.settings(&config);

    if !cli.json {
        writeln!(output, "Loading data...")?;
    }
    let graph = load(&settings.directory)?;
    if !cli.json {
        writeln!(output, "Data loaded.")?;
    }

    let resolver = NameResolver::new(&graph);
    let mut prompt = Prompt::new(input, prompt_out);
    let source = prompt.person(&resolver, cli.source.as_deref())?;
    let target = prompt.person(&resolver, cli.target.as_deref())?;

    info!(%source, %target, frontier = %settings.frontier, "searching");
    let result = search(
        &graph,
        &source,
        &target,
        settings.frontier.build(),
        settings.options,
    );
    let report = Report::new(&graph, &source, &result);

    if cli.json {
        writeln!(output, "{}", report.to_json()?)?;
    } else {
        report.write_text(&mut output)?;
    }
    Ok(())
}

fn load(dir: &Path) -> Result<crate::graph::MovieGraph> {
    load_dataset(dir).with_context(|| format!("Failed to load dataset from {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DegreesError;
    use std::fs;
    use std::io::Cursor;

    fn dataset() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("people.csv"),
            "id,name,birth\nA,Tom Hanks,1956\nB,Cher,1946\nC,Emma Watson,1990\nD,Cher,1970\nE,Zed,\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("movies.csv"),
            "id,title,year\nM1,Movie One,1990\nM2,Movie Two,2001\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("stars.csv"),
            "person_id,movie_id\nA,M1\nB,M1\nB,M2\nC,M2\nX,M2\n",
        )
        .unwrap();
        dir
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("degrees").chain(args.iter().copied())).unwrap()
    }

    fn run_to_string(cli: &Cli, input: &str) -> Result<(String, String)> {
        let mut prompt_out = Vec::new();
        let mut output = Vec::new();
        run(cli, Cursor::new(input.to_string()), &mut prompt_out, &mut output)?;
        Ok((
            String::from_utf8(prompt_out).unwrap(),
            String::from_utf8(output).unwrap(),
        ))
    }

    #[test]
    fn test_at_most_one_positional() {
        assert!(Cli::try_parse_from(["degrees"]).is_ok());
        assert!(Cli::try_parse_from(["degrees", "small"]).is_ok());
        assert!(Cli::try_parse_from(["degrees", "small", "large"]).is_err());
    }

    #[test]
    fn test_settings_merge() {
        let config = DegreesConfig::parse(
            "[data]\ndirectory = \"small\"\n[search]\nfrontier = \"stack\"\ndeterministic = false\n",
        )
        .unwrap();

        let s = cli(&[]).settings(&config);
        assert_eq!(s.directory, PathBuf::from("small"));
        assert_eq!(s.frontier, FrontierKind::Stack);
        assert!(!s.options.deterministic);

        let s = cli(&["other", "--frontier", "queue"]).settings(&config);
        assert_eq!(s.directory, PathBuf::from("other"));
        assert_eq!(s.frontier, FrontierKind::Queue);
    }

    #[test]
    fn test_run_interactive() {
        let dir = dataset();
        let cli = cli(&[dir.path().to_str().unwrap()]);

        let (prompts, output) = run_to_string(&cli, "Tom Hanks\nEmma Watson\n").unwrap();
        assert_eq!(prompts, "Name: Name: ");
        assert_eq!(
            output,
            "Loading data...\n\
             Data loaded.\n\
             2 degrees of separation.\n\
             1: Tom Hanks and Cher starred in Movie One\n\
             2: Cher and Emma Watson starred in Movie Two\n"
        );
    }

    #[test]
    fn test_run_disambiguates() {
        let dir = dataset();
        let cli = cli(&[dir.path().to_str().unwrap(), "--source", "Tom Hanks"]);

        let (prompts, output) = run_to_string(&cli, "cher\nB\n").unwrap();
        assert!(prompts.contains("Which 'cher'?"));
        assert!(prompts.contains("ID: D, Name: Cher, Birth: 1970"));
        assert!(output.ends_with("1: Tom Hanks and Cher starred in Movie One\n"));
    }

    #[test]
    fn test_run_not_connected() {
        let dir = dataset();
        let cli = cli(&[
            dir.path().to_str().unwrap(),
            "--source",
            "Tom Hanks",
            "--target",
            "Zed",
        ]);

        let (_, output) = run_to_string(&cli, "").unwrap();
        assert!(output.ends_with("Not connected.\n"));
    }

    #[test]
    fn test_run_person_not_found() {
        let dir = dataset();
        let cli = cli(&[dir.path().to_str().unwrap(), "--source", "Zzyzx"]);

        let err = run_to_string(&cli, "").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DegreesError>(),
            Some(DegreesError::PersonNotFound { .. })
        ));
        assert_eq!(err.to_string(), "Person not found.");
    }

    #[test]
    fn test_run_json() {
        let dir = dataset();
        let cli = cli(&[
            dir.path().to_str().unwrap(),
            "--source",
            "Emma Watson",
            "--target",
            "Tom Hanks",
            "--json",
        ]);

        let (_, output) = run_to_string(&cli, "").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["connected"], true);
        assert_eq!(value["degrees"], 2);
        assert_eq!(value["steps"][1]["person_b"], "Tom Hanks");
    }

    #[test]
    fn test_run_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(&[dir.path().join("nope").to_str().unwrap()]);

        let err = run_to_string(&cli, "").unwrap_err();
        assert!(err.to_string().starts_with("Failed to load dataset"));
    }
}
