//! Command dispatch for the `repograde` binary.

use crate::cli::{Cli, Commands, InputKind, OutputFormat};
use crate::config::apply_config_to_env;
use crate::output::write_summary;
use anyhow::{Context, Result};
use clap::Parser;
use repograde_engine::{Analyzer, RepositorySnapshot, TechnologyInfo, TechnologyTable};
use repograde_intake::GitHubBundle;
use serde::Serialize;
use std::io::{self, Read, Write};
use std::path::Path;

/// Parse arguments and run the selected command.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    apply_config_to_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            input,
            format,
            table,
        } => analyze(&file, input, format.unwrap_or_default(), table.as_deref()),
        Commands::Detect { names } => detect(&names),
        Commands::Table { table } => print_table(table.as_deref()),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read input from stdin")?;
        Ok(content)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn load_snapshot(content: &str, input: InputKind) -> Result<RepositorySnapshot> {
    match input {
        InputKind::Snapshot => {
            serde_json::from_str(content).context("Failed to parse repository snapshot")
        }
        InputKind::Github => Ok(GitHubBundle::from_json_str(content)?.into_snapshot()?),
    }
}

fn load_table(path: Option<&Path>) -> Result<TechnologyTable> {
    match path {
        Some(path) => TechnologyTable::load(path)
            .with_context(|| format!("Failed to load technology table {}", path.display())),
        None => Ok(TechnologyTable::builtin()),
    }
}

/// The built-in table is shared process-wide; a custom one is loaded per run.
fn build_analyzer(table: Option<&Path>) -> Result<Analyzer> {
    match table {
        Some(_) => Ok(Analyzer::new(load_table(table)?)),
        None => Ok(Analyzer::default()),
    }
}

fn analyze(
    file: &Path,
    input: InputKind,
    format: OutputFormat,
    table: Option<&Path>,
) -> Result<()> {
    let content = read_input(file)?;
    let snapshot = load_snapshot(&content, input)?;
    let analyzer = build_analyzer(table)?;

    let result = analyzer
        .analyze(&snapshot)
        .with_context(|| format!("Failed to analyze '{}'", snapshot.name))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
        OutputFormat::Summary => write_summary(&mut out, &result)?,
    }
    Ok(())
}

fn detect(names: &[String]) -> Result<()> {
    let flags = repograde_intake::detect(names);
    println!("{}", serde_json::to_string_pretty(&flags)?);
    Ok(())
}

#[derive(Serialize)]
struct TableRow<'a> {
    name: &'a str,
    #[serde(flatten)]
    info: &'a TechnologyInfo,
}

fn print_table(path: Option<&Path>) -> Result<()> {
    let table = load_table(path)?;
    let rows: Vec<TableRow<'_>> = table
        .iter()
        .map(|(name, info)| TableRow { name, info })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use repograde_test_utils::TestFixture;

    #[test]
    fn snapshot_input_uses_serde_defaults() {
        let snapshot = load_snapshot(r#"{"name": "tiny"}"#, InputKind::Snapshot).unwrap();
        assert_eq!(snapshot.contributor_count, 1);
        assert_eq!(snapshot.commit_count, 0);
    }

    #[test]
    fn github_input_is_normalized() {
        let snapshot = load_snapshot(
            r#"{"repository": {"name": "gh"}, "contents": [{"name": "README.md"}]}"#,
            InputKind::Github,
        )
        .unwrap();
        assert_eq!(snapshot.file_names, vec!["readme.md"]);
        assert!(snapshot.has_readme);
    }

    #[test]
    fn bad_snapshot_input_has_context() {
        let err = load_snapshot("[]", InputKind::Snapshot).unwrap_err();
        assert!(err.to_string().contains("Failed to parse repository snapshot"));
    }

    #[test]
    fn missing_input_file_names_the_path() {
        let err = read_input(Path::new("/nonexistent/repograde/snap.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/repograde/snap.json"));
    }

    #[test]
    fn custom_table_is_loaded_from_disk() {
        let fixture = TestFixture::new().unwrap();
        let path = fixture
            .write_file(
                "techs.toml",
                "[languages.Zig]\ncategory = \"language\"\ndemand = \"low\"\n",
            )
            .unwrap();
        let table = load_table(Some(&path)).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get("Zig").is_some());
        assert!(!load_table(None).unwrap().is_empty());
    }

    #[test]
    fn analyzer_uses_the_loaded_table() {
        let fixture = TestFixture::new().unwrap();
        let path = fixture
            .write_file(
                "techs.toml",
                "[languages.Zig]\ncategory = \"language\"\ndemand = \"low\"\n",
            )
            .unwrap();
        assert_eq!(build_analyzer(Some(&path)).unwrap().table().len(), 1);
        assert!(build_analyzer(None).unwrap().table().get("JavaScript").is_some());

        let err = build_analyzer(Some(Path::new("/nonexistent/techs.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load technology table"));
    }
}
