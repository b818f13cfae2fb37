//! Reference table of known technologies.
//!
//! The table is partitioned by domain (languages, frameworks, databases,
//! devops, cloud, tools) but the engine only ever sees the flattened view.
//! Partitions are flattened in that order and the first entry for a name
//! wins, so a later partition never overrides an earlier one.

use crate::error::TableError;
use indexmap::IndexMap;
use repograde_snapshot::{Category, Demand};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Metadata for one known technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyInfo {
    /// Category.
    pub category: Category,
    /// Market demand.
    pub demand: Demand,
    /// Related skills.
    #[serde(default)]
    pub related: Vec<String>,
}

/// The six partitions of a table as they appear in a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TablePartitions {
    /// Programming languages.
    #[serde(default)]
    pub languages: IndexMap<String, TechnologyInfo>,
    /// Frameworks and runtimes.
    #[serde(default)]
    pub frameworks: IndexMap<String, TechnologyInfo>,
    /// Databases.
    #[serde(default)]
    pub databases: IndexMap<String, TechnologyInfo>,
    /// DevOps tooling.
    #[serde(default)]
    pub devops: IndexMap<String, TechnologyInfo>,
    /// Cloud platforms.
    #[serde(default)]
    pub cloud: IndexMap<String, TechnologyInfo>,
    /// Developer tools.
    #[serde(default)]
    pub tools: IndexMap<String, TechnologyInfo>,
}

impl TablePartitions {
    fn in_flatten_order(&self) -> [(&'static str, &IndexMap<String, TechnologyInfo>); 6] {
        [
            ("languages", &self.languages),
            ("frameworks", &self.frameworks),
            ("databases", &self.databases),
            ("devops", &self.devops),
            ("cloud", &self.cloud),
            ("tools", &self.tools),
        ]
    }
}

/// Flattened technology lookup keyed by exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechnologyTable {
    entries: IndexMap<String, TechnologyInfo>,
}

impl TechnologyTable {
    /// Empty table; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The table compiled into the engine.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (category, entries) in BUILTIN {
            for (name, demand, related) in *entries {
                table.insert_first(
                    name,
                    TechnologyInfo {
                        category: *category,
                        demand: *demand,
                        related: related.iter().map(|s| (*s).to_string()).collect(),
                    },
                );
            }
        }
        table
    }

    /// Flatten partitions into a lookup, rejecting empty names.
    pub fn from_partitions(partitions: TablePartitions) -> Result<Self, TableError> {
        let mut table = Self::empty();
        for (partition, entries) in partitions.in_flatten_order() {
            for (name, info) in entries {
                if name.trim().is_empty() {
                    return Err(TableError::EmptyName { partition });
                }
                table.insert_first(name, info.clone());
            }
        }
        Ok(table)
    }

    /// Parse a TOML document with `[languages.<name>]`-style partitions.
    pub fn from_toml_str(content: &str) -> Result<Self, TableError> {
        let partitions: TablePartitions = toml::from_str(content)?;
        Self::from_partitions(partitions)
    }

    /// Read and parse a TOML table from disk.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&content)?;
        tracing::debug!(
            target: "repograde::engine",
            path = %path.display(),
            entries = table.len(),
            "Loaded technology table"
        );
        Ok(table)
    }

    /// Add an entry unless the name is already taken. Returns true when inserted.
    pub fn insert_first(&mut self, name: &str, info: TechnologyInfo) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), info);
        true
    }

    /// Look up a technology by exact name.
    pub fn get(&self, name: &str) -> Option<&TechnologyInfo> {
        self.entries.get(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in flatten order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TechnologyInfo)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

type BuiltinEntry = (&'static str, Demand, &'static [&'static str]);

const LANGUAGES: &[BuiltinEntry] = &[
    ("JavaScript", Demand::High, &["TypeScript", "Node.js", "React"]),
    ("TypeScript", Demand::High, &["JavaScript", "Angular", "React"]),
    ("Python", Demand::High, &["Django", "FastAPI", "Data Science"]),
    ("Java", Demand::High, &["Spring Boot", "Maven", "JVM"]),
    ("Go", Demand::High, &["Microservices", "Docker", "gRPC"]),
    ("C#", Demand::High, &[".NET", "Azure", "Unity"]),
    ("Rust", Demand::Medium, &["Systems Programming", "WebAssembly", "Cargo"]),
    ("C++", Demand::Medium, &["Systems Programming", "CMake", "Game Development"]),
    ("C", Demand::Medium, &["Embedded Systems", "Linux", "Make"]),
    ("Kotlin", Demand::Medium, &["Android", "Java", "Spring Boot"]),
    ("Swift", Demand::Medium, &["iOS", "SwiftUI", "Xcode"]),
    ("PHP", Demand::Medium, &["Laravel", "MySQL", "WordPress"]),
    ("Ruby", Demand::Medium, &["Ruby on Rails", "RSpec", "Bundler"]),
    ("Dart", Demand::Medium, &["Flutter", "Mobile Development"]),
    ("HTML", Demand::High, &["CSS", "JavaScript", "Accessibility"]),
    ("CSS", Demand::High, &["HTML", "Sass", "Tailwind CSS"]),
    ("Shell", Demand::Medium, &["Bash", "Linux", "Automation"]),
    ("Scala", Demand::Low, &["Spark", "Akka", "JVM"]),
    ("R", Demand::Low, &["Statistics", "Data Analysis", "Shiny"]),
    ("Elixir", Demand::Low, &["Phoenix", "Erlang", "OTP"]),
];

const FRAMEWORKS: &[BuiltinEntry] = &[
    ("React", Demand::High, &["JavaScript", "TypeScript", "Redux"]),
    ("Next.js", Demand::High, &["React", "Server-Side Rendering", "Vercel"]),
    ("Vue", Demand::Medium, &["JavaScript", "Nuxt", "Pinia"]),
    ("Angular", Demand::Medium, &["TypeScript", "RxJS", "NgRx"]),
    ("Express", Demand::High, &["Node.js", "REST APIs", "Middleware"]),
    ("NestJS", Demand::Medium, &["TypeScript", "Node.js", "Microservices"]),
    ("Django", Demand::High, &["Python", "ORM", "Django REST Framework"]),
    ("FastAPI", Demand::High, &["Python", "Pydantic", "Async"]),
    ("Flask", Demand::Medium, &["Python", "Jinja2", "REST APIs"]),
    ("Spring Boot", Demand::High, &["Java", "Microservices", "Hibernate"]),
    ("Ruby on Rails", Demand::Medium, &["Ruby", "Active Record", "MVC"]),
    ("Laravel", Demand::Medium, &["PHP", "Eloquent", "MVC"]),
];

const DATABASES: &[BuiltinEntry] = &[
    ("PostgreSQL", Demand::High, &["SQL", "Database Design", "Indexing"]),
    ("MongoDB", Demand::High, &["NoSQL", "Mongoose", "Aggregation"]),
    ("MySQL", Demand::Medium, &["SQL", "Database Design", "Replication"]),
    ("Redis", Demand::High, &["Caching", "Pub/Sub", "Key-Value Stores"]),
    ("SQLite", Demand::Low, &["SQL", "Embedded Databases"]),
];

const DEVOPS: &[BuiltinEntry] = &[
    ("Docker", Demand::High, &["Containerization", "Kubernetes"]),
    ("Kubernetes", Demand::High, &["Docker", "Orchestration", "Cloud"]),
    ("Terraform", Demand::High, &["Infrastructure as Code", "AWS", "Cloud"]),
    ("GitHub Actions", Demand::High, &["CI/CD", "Automation", "YAML"]),
    ("Jenkins", Demand::Medium, &["CI/CD", "Groovy", "Automation"]),
    ("Ansible", Demand::Medium, &["Configuration Management", "YAML", "Linux"]),
];

const CLOUD: &[BuiltinEntry] = &[
    ("AWS", Demand::High, &["EC2", "S3", "Lambda"]),
    ("Azure", Demand::High, &["Azure Functions", "Active Directory", ".NET"]),
    ("Google Cloud", Demand::Medium, &["BigQuery", "Cloud Run", "GKE"]),
    ("Firebase", Demand::Medium, &["Authentication", "Firestore", "Hosting"]),
    ("Vercel", Demand::Medium, &["Next.js", "Serverless", "Edge Functions"]),
];

const TOOLS: &[BuiltinEntry] = &[
    ("Git", Demand::High, &["Version Control", "GitHub", "Branching"]),
    ("Jest", Demand::High, &["Testing", "JavaScript", "TDD"]),
    ("Pytest", Demand::High, &["Testing", "Python", "TDD"]),
    ("Webpack", Demand::Medium, &["Bundling", "JavaScript", "Build Tools"]),
    ("Vite", Demand::Medium, &["Bundling", "JavaScript", "Build Tools"]),
    ("ESLint", Demand::Medium, &["Linting", "JavaScript", "Code Quality"]),
];

const BUILTIN: &[(Category, &[BuiltinEntry])] = &[
    (Category::Language, LANGUAGES),
    (Category::Framework, FRAMEWORKS),
    (Category::Database, DATABASES),
    (Category::Devops, DEVOPS),
    (Category::Cloud, CLOUD),
    (Category::Tool, TOOLS),
];
