use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shape of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum InputKind {
    /// A normalized repository snapshot.
    #[default]
    Snapshot,
    /// A bundle of GitHub REST responses.
    Github,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// The full analysis as pretty-printed JSON.
    #[default]
    Json,
    /// A short human-readable report.
    Summary,
}

/// Command-line interface for the `repograde` application.
#[derive(Debug, Parser)]
#[command(
    name = "repograde",
    version,
    about = "Score repositories and suggest what to learn next"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `repograde` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scores a repository snapshot.
    Analyze {
        /// Input file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Input document shape.
        #[arg(long, value_enum, default_value = "snapshot")]
        input: InputKind,
        /// Output format (overrides `REPOGRADE_FORMAT` and the config file).
        #[arg(long, value_enum, env = "REPOGRADE_FORMAT")]
        format: Option<OutputFormat>,
        /// Custom technology table (overrides `REPOGRADE_TECHNOLOGY_TABLE`).
        #[arg(long, value_name = "FILE", env = "REPOGRADE_TECHNOLOGY_TABLE")]
        table: Option<PathBuf>,
    },
    /// Prints the presence flags derived from top-level entry names.
    Detect {
        /// Top-level file and directory names.
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,
    },
    /// Prints the flattened technology table as JSON.
    Table {
        /// Custom technology table to validate and print.
        #[arg(long, value_name = "FILE", env = "REPOGRADE_TECHNOLOGY_TABLE")]
        table: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_defaults() {
        let cli = Cli::try_parse_from(["repograde", "analyze", "snap.json"]).unwrap();
        let Commands::Analyze { file, input, .. } = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(file, PathBuf::from("snap.json"));
        assert_eq!(input, InputKind::Snapshot);
    }

    #[test]
    fn analyze_accepts_stdin_and_options() {
        let cli = Cli::try_parse_from([
            "repograde",
            "analyze",
            "-",
            "--input",
            "github",
            "--format",
            "summary",
            "--table",
            "techs.toml",
        ])
        .unwrap();
        let Commands::Analyze {
            file,
            input,
            format,
            table,
        } = cli.command
        else {
            panic!("expected analyze");
        };
        assert_eq!(file, PathBuf::from("-"));
        assert_eq!(input, InputKind::Github);
        assert_eq!(format, Some(OutputFormat::Summary));
        assert_eq!(table, Some(PathBuf::from("techs.toml")));
    }

    #[test]
    fn detect_requires_names() {
        assert!(Cli::try_parse_from(["repograde", "detect"]).is_err());
        let cli = Cli::try_parse_from(["repograde", "detect", "README.md", "src"]).unwrap();
        assert!(matches!(cli.command, Commands::Detect { names } if names.len() == 2));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["repograde", "analyze", "x", "--format", "pdf"]).is_err());
    }
}
