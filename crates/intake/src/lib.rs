//! Metadata intake for repograde.
//!
//! Turns what a hosting platform reports about a repository into the
//! [`RepositorySnapshot`] the engine scores. This crate does no network
//! I/O; a client fetches the payloads and hands them over as a
//! [`GitHubBundle`].
//!
//! # Example
//!
//! ```rust
//! use repograde_intake::{detect, RepoRef};
//!
//! let repo: RepoRef = "https://github.com/serde-rs/json.git".parse().unwrap();
//! assert_eq!(repo.full_name(), "serde-rs/json");
//!
//! let flags = detect(&["readme.md", "license-mit", ".github"]);
//! assert!(flags.has_readme && flags.has_license && flags.has_ci);
//! ```

#![deny(unsafe_code)]

pub mod detect;
pub mod error;
pub mod github;
pub mod pagination;
pub mod repo_ref;

pub use detect::{detect, PresenceFlags};
pub use error::IntakeError;
pub use github::{ContentEntry, GitHubBundle, GitHubLicense, GitHubRepository};
pub use pagination::{commit_count, contributor_count, last_page};
pub use repo_ref::RepoRef;

pub use repograde_snapshot::RepositorySnapshot;
