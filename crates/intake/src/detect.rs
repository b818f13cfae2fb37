//! Presence flags derived from a top-level file listing.
//!
//! Every check runs over lower-cased entry names. Most checks are substring
//! matches, so they over-report: `dockerfile` contains `doc` and counts as
//! documentation, and `pyproject.toml` counts as a test setup.

use repograde_snapshot::RepositorySnapshot;
use serde::Serialize;

const README_PREFIX: &str = "readme";

const LICENSE_PATTERNS: &[&str] = &["license", "licence", "copying", "unlicense"];

const TEST_PATTERNS: &[&str] = &[
    "test",
    "spec",
    "__tests__",
    "jest.config",
    "vitest.config",
    "pytest.ini",
    "pyproject.toml",
    "tox.ini",
    "mocha.opts",
    "karma.conf",
    "cypress.config",
    "playwright.config",
];

/// CI markers are matched exactly, not as substrings.
const CI_MARKERS: &[&str] = &[
    ".github",
    ".gitlab-ci.yml",
    ".travis.yml",
    "jenkinsfile",
    ".circleci",
    "azure-pipelines.yml",
    "appveyor.yml",
    ".appveyor.yml",
    "bitbucket-pipelines.yml",
    "buildkite.yml",
    "drone.yml",
    ".drone.yml",
    "wercker.yml",
    "cloudbuild.yaml",
    "cloudbuild.yml",
    "codebuild.yml",
    "codebuild.yaml",
];

const DOC_PATTERNS: &[&str] = &[
    "docs",
    "documentation",
    "doc",
    "wiki",
    "guide",
    "manual",
    "tutorial",
    "api",
    "reference",
    "changelog",
    "history.md",
    "history.txt",
    "contributing",
    "code_of_conduct",
    "security",
];

/// The five boolean signals of a [`RepositorySnapshot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceFlags {
    /// A README sits at the top level.
    pub has_readme: bool,
    /// A license file is present.
    pub has_license: bool,
    /// Test directories or test-runner config are present.
    pub has_tests: bool,
    /// A CI configuration marker is present.
    pub has_ci: bool,
    /// Docs, guides or community files are present.
    pub has_documentation: bool,
}

impl PresenceFlags {
    /// Copy the flags onto a snapshot.
    pub fn apply(self, snapshot: &mut RepositorySnapshot) {
        snapshot.has_readme = self.has_readme;
        snapshot.has_license = self.has_license;
        snapshot.has_tests = self.has_tests;
        snapshot.has_ci = self.has_ci;
        snapshot.has_documentation = self.has_documentation;
    }
}

fn any_contains<S: AsRef<str>>(names: &[S], patterns: &[&str]) -> bool {
    names.iter().any(|name| {
        let name = name.as_ref().to_lowercase();
        patterns.iter().any(|p| name.contains(p))
    })
}

/// A name starting with `readme` (`readme.md`, `readme.rst`, ...).
pub fn has_readme<S: AsRef<str>>(names: &[S]) -> bool {
    names
        .iter()
        .any(|name| name.as_ref().to_lowercase().starts_with(README_PREFIX))
}

/// A name containing a license spelling (`license`, `licence`, `copying`).
pub fn has_license<S: AsRef<str>>(names: &[S]) -> bool {
    any_contains(names, LICENSE_PATTERNS)
}

/// A name containing a test marker or a test-runner config name.
pub fn has_tests<S: AsRef<str>>(names: &[S]) -> bool {
    any_contains(names, TEST_PATTERNS)
}

/// A name equal to a CI marker (`.github`, `.travis.yml`, ...).
pub fn has_ci<S: AsRef<str>>(names: &[S]) -> bool {
    names
        .iter()
        .any(|name| CI_MARKERS.contains(&name.as_ref().to_lowercase().as_str()))
}

/// A name containing a documentation pattern (`docs`, `guide`, `changelog`, ...).
pub fn has_documentation<S: AsRef<str>>(names: &[S]) -> bool {
    any_contains(names, DOC_PATTERNS)
}

/// Derive every flag from a top-level listing.
pub fn detect<S: AsRef<str>>(names: &[S]) -> PresenceFlags {
    let flags = PresenceFlags {
        has_readme: has_readme(names),
        has_license: has_license(names),
        has_tests: has_tests(names),
        has_ci: has_ci(names),
        has_documentation: has_documentation(names),
    };
    tracing::trace!(
        target: "repograde::intake",
        entries = names.len(),
        ?flags,
        "Detected presence flags"
    );
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_has_no_flags() {
        let names: [&str; 0] = [];
        assert_eq!(detect(&names), PresenceFlags::default());
    }

    #[test]
    fn readme_variants_match_by_prefix() {
        assert!(has_readme(&["README.md"]));
        assert!(has_readme(&["readme.rst"]));
        assert!(has_readme(&["readme"]));
        assert!(!has_readme(&["docs/readme.md", "my-readme.md"]));
    }

    #[test]
    fn license_spellings() {
        assert!(has_license(&["LICENSE"]));
        assert!(has_license(&["licence.txt"]));
        assert!(has_license(&["COPYING"]));
        assert!(has_license(&["unlicense"]));
        assert!(!has_license(&["notice"]));
    }

    #[test]
    fn tests_match_directories_and_configs() {
        assert!(has_tests(&["tests"]));
        assert!(has_tests(&["__tests__"]));
        assert!(has_tests(&["spec"]));
        assert!(has_tests(&["jest.config.ts"]));
        assert!(has_tests(&["playwright.config.js"]));
        assert!(has_tests(&["pyproject.toml"]));
        assert!(!has_tests(&["src", "lib"]));
    }

    #[test]
    fn ci_markers_are_exact() {
        assert!(has_ci(&[".github"]));
        assert!(has_ci(&["Jenkinsfile"]));
        assert!(has_ci(&[".gitlab-ci.yml"]));
        assert!(!has_ci(&[".github-old"]));
        assert!(!has_ci(&["github"]));
    }

    #[test]
    fn documentation_is_a_loose_substring_match() {
        assert!(has_documentation(&["docs"]));
        assert!(has_documentation(&["changelog.md"]));
        assert!(has_documentation(&["contributing.md"]));
        assert!(has_documentation(&["openapi.yaml"]));
        // known false positive
        assert!(has_documentation(&["dockerfile"]));
        assert!(!has_documentation(&["src", "readme.md"]));
    }

    #[test]
    fn apply_copies_every_flag() {
        let flags = detect(&["readme.md", "license", "tests", ".github", "docs"]);
        let mut snapshot = RepositorySnapshot::new("demo");
        flags.apply(&mut snapshot);
        assert!(snapshot.has_readme);
        assert!(snapshot.has_license);
        assert!(snapshot.has_tests);
        assert!(snapshot.has_ci);
        assert!(snapshot.has_documentation);
    }
}
