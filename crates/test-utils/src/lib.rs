//! Shared test utilities for repograde crates.
//!
//! Snapshot builders for the engine tests plus the environment and
//! temp-home fixtures the CLI tests need.

use repograde_snapshot::RepositorySnapshot;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = repograde_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Fluent builder over [`RepositorySnapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    snapshot: RepositorySnapshot,
}

impl SnapshotBuilder {
    /// Start from the documented defaults.
    pub fn new(name: &str) -> Self {
        Self {
            snapshot: RepositorySnapshot::new(name),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.snapshot.description = description.to_string();
        self
    }

    pub fn last_updated(mut self, timestamp: &str) -> Self {
        self.snapshot.last_updated = timestamp.to_string();
        self
    }

    pub fn stars(mut self, stars: u64) -> Self {
        self.snapshot.stars = stars;
        self
    }

    pub fn forks(mut self, forks: u64) -> Self {
        self.snapshot.forks = forks;
        self
    }

    pub fn open_issues(mut self, open_issues: u64) -> Self {
        self.snapshot.open_issues = open_issues;
        self
    }

    pub fn primary_language(mut self, language: &str) -> Self {
        self.snapshot.primary_language = Some(language.to_string());
        self
    }

    /// Append a language with its byte count, keeping insertion order.
    pub fn language(mut self, language: &str, bytes: u64) -> Self {
        self.snapshot
            .language_byte_counts
            .insert(language.to_string(), bytes);
        self
    }

    /// Append top-level entries; names are lower-cased like the intake does.
    pub fn files(mut self, names: &[&str]) -> Self {
        self.snapshot
            .file_names
            .extend(names.iter().map(|n| n.to_lowercase()));
        self
    }

    pub fn readme(mut self, present: bool) -> Self {
        self.snapshot.has_readme = present;
        self
    }

    pub fn license(mut self, present: bool) -> Self {
        self.snapshot.has_license = present;
        self
    }

    pub fn tests(mut self, present: bool) -> Self {
        self.snapshot.has_tests = present;
        self
    }

    pub fn ci(mut self, present: bool) -> Self {
        self.snapshot.has_ci = present;
        self
    }

    pub fn documentation(mut self, present: bool) -> Self {
        self.snapshot.has_documentation = present;
        self
    }

    pub fn commits(mut self, count: u64) -> Self {
        self.snapshot.commit_count = count;
        self
    }

    pub fn contributors(mut self, count: u64) -> Self {
        self.snapshot.contributor_count = count;
        self
    }

    pub fn build(self) -> RepositorySnapshot {
        self.snapshot
    }
}

/// A repository with no signals at all: 5 commits, 1 contributor, 30 open issues.
pub fn bare_snapshot() -> RepositorySnapshot {
    SnapshotBuilder::new("bare-repo")
        .commits(5)
        .contributors(1)
        .open_issues(30)
        .build()
}

/// A mature full-stack JavaScript repository.
pub fn mature_snapshot() -> RepositorySnapshot {
    SnapshotBuilder::new("mature-repo")
        .description("Production-ready full-stack web application")
        .last_updated("2024-06-01T08:30:00Z")
        .stars(420)
        .forks(37)
        .open_issues(4)
        .primary_language("TypeScript")
        .language("TypeScript", 120_000)
        .language("JavaScript", 30_000)
        .language("CSS", 8_000)
        .files(&[
            ".github",
            ".gitignore",
            "docker-compose.yml",
            "dockerfile",
            "docs",
            "jest.config.js",
            "license",
            "package.json",
            "readme.md",
            "src",
            "tsconfig.json",
        ])
        .readme(true)
        .license(true)
        .tests(true)
        .ci(true)
        .documentation(true)
        .commits(640)
        .contributors(9)
        .build()
}

/// Temp directory standing in for `$HOME`, with helpers for config and input files.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
}

impl TestFixture {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            tempdir: tempfile::tempdir()?,
        })
    }

    /// Get the path that should be set as HOME.
    pub fn home_path(&self) -> &Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(&self.home_path().to_string_lossy()))
    }

    /// Write `~/.repograde/config.toml`.
    pub fn write_config(&self, content: &str) -> std::io::Result<PathBuf> {
        let dir = self.tempdir.path().join(".repograde");
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("config.toml");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a snapshot as JSON under the temp directory.
    pub fn write_snapshot(
        &self,
        file: &str,
        snapshot: &RepositorySnapshot,
    ) -> std::io::Result<PathBuf> {
        let path = self.tempdir.path().join(file);
        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }

    /// Write an arbitrary file under the temp directory.
    pub fn write_file(&self, file: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.tempdir.path().join(file);
        std::fs::write(&path, content)?;
        Ok(path)
    }
}
