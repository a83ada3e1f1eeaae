//! Server configuration and seed fixtures.
//!
//! - [`ServerConfig`] — Bind address and seed location read from the environment
//! - [`Seed`] — Records loaded into the stores at startup
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TALLY_HOST` | 0.0.0.0 | Host to bind |
//! | `TALLY_PORT` | 8000 | Port to listen on |
//! | `TALLY_SEED_FILE` | (built-in fixture) | JSON file with `assets` and `tasks` arrays |
//!
//! # Loading a seed file
//!
//! ```rust,ignore
//! use tally_config::Seed;
//!
//! let seed = Seed::from_file("seed.json")?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Number;
use tally_core::validate;
use tally_core::{Asset, AssetId, Task, TaskId, ValidationError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Errors that can occur when loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("Failed to parse seed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A seed record fails the same checks as request data.
    #[error("Invalid seed {kind} '{id}': {source}")]
    InvalidRecord {
        kind: &'static str,
        id: String,
        #[source]
        source: ValidationError,
    },

    /// An environment variable holds an unusable value.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

impl ConfigError {
    /// Creates an IO error with path context.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seed file replacing the built-in fixture.
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_file: None,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("TALLY_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("TALLY_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "TALLY_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let seed_file = lookup("TALLY_SEED_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            seed_file,
        })
    }

    /// Returns the `host:port` pair to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Loads the configured seed file, or the built-in fixture when none is set.
    pub fn load_seed(&self) -> Result<Seed, ConfigError> {
        match &self.seed_file {
            Some(path) => Seed::from_file(path),
            None => Ok(Seed::default()),
        }
    }
}

/// Records placed in the stores at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Seed {
    /// An empty seed.
    pub fn empty() -> Self {
        Self {
            assets: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Loads a seed from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::io(path.display().to_string(), e))?;
        Self::from_json(&content)
    }

    /// Parses and validates a seed from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let seed: Self = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks every record's text and URL fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for asset in &self.assets {
            check_asset(asset).map_err(|source| ConfigError::InvalidRecord {
                kind: "asset",
                id: asset.id.to_string(),
                source,
            })?;
        }
        for task in &self.tasks {
            check_task(task).map_err(|source| ConfigError::InvalidRecord {
                kind: "task",
                id: task.id.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}

fn check_asset(asset: &Asset) -> Result<(), ValidationError> {
    validate::text("name", asset.name.clone())?;
    validate::text("slug", asset.slug.clone())?;
    validate::url("image", asset.image.clone())?;
    Ok(())
}

fn check_task(task: &Task) -> Result<(), ValidationError> {
    validate::text("title", task.title.clone())?;
    validate::text("description", task.description.clone())?;
    Ok(())
}

impl Default for Seed {
    /// The built-in fixture: two assets and two tasks.
    fn default() -> Self {
        let image = "https://via.placeholder.com/150";
        Self {
            assets: vec![
                Asset {
                    id: AssetId::from("1"),
                    name: "Asset 1".into(),
                    price: Number::from(100),
                    slug: "asset-1".into(),
                    image: image.into(),
                },
                Asset {
                    id: AssetId::from("2"),
                    name: "Asset 2".into(),
                    price: Number::from(200),
                    slug: "asset-2".into(),
                    image: image.into(),
                },
            ],
            tasks: vec![
                Task {
                    id: TaskId(1),
                    title: "Task 1".into(),
                    description: "Task 1 description".into(),
                    completed: false,
                },
                Task {
                    id: TaskId(2),
                    title: "Task 2".into(),
                    description: "Task 2 description".into(),
                    completed: true,
                },
            ],
        }
    }
}
