//! Command-line interface for the `repograde` application.
//!
//! Reads a repository snapshot (or a bundle of GitHub API responses),
//! scores it with `repograde-engine` and prints the result.

mod app;
mod cli;
mod config;
mod output;

fn main() -> anyhow::Result<()> {
    app::run()
}
