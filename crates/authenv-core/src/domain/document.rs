//! Loading authority documents from disk.
//!
//! The document schema is a replaceable boundary: [`DocumentFormat`] turns
//! raw bytes into an [`AuthorityDefinition`], and nothing downstream cares which
//! format produced it.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::authority::AuthorityDefinition;

/// Errors raised while loading an authority document.
#[derive(Debug, Error)]
pub enum AuthorityLoadError {
    /// The document could not be opened or read.
    #[error("Failed to read authority document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML document is malformed or does not match the schema.
    #[error("Invalid YAML authority document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document is malformed or does not match the schema.
    #[error("Invalid JSON authority document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization formats an authority document may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from the file extension. Anything that is not
    /// `.json` is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    /// Deserialize a definition from `bytes`.
    ///
    /// An empty or null document is rejected: `sql-sets` must be present.
    pub fn parse(self, bytes: &[u8]) -> Result<AuthorityDefinition, AuthorityLoadError> {
        match self {
            Self::Yaml => Ok(serde_yaml::from_slice(bytes)?),
            Self::Json => Ok(serde_json::from_slice(bytes)?),
        }
    }
}

impl AuthorityDefinition {
    /// Load a definition from `path`, choosing the format by extension.
    ///
    /// The whole file is read up front, so any open or read failure
    /// (including `path` naming a directory) is reported as
    /// [`AuthorityLoadError::Io`] rather than as a parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AuthorityLoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| AuthorityLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        DocumentFormat::from_path(path).parse(&bytes)
    }
}
