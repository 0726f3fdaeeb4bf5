//! Database dialect selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Database engine dialect used to pick the authority statements that apply.
///
/// The value is only ever a lookup key; no dialect-specific behavior lives
/// behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DatabaseType {
    H2,
    MySQL,
    PostgreSQL,
    SQLServer,
    Oracle,
    SQLite,
}

/// Accepted spellings, matched case-insensitively.
const NAME_PATTERNS: &[(&str, DatabaseType)] = &[
    ("h2", DatabaseType::H2),
    ("mysql", DatabaseType::MySQL),
    ("postgresql", DatabaseType::PostgreSQL),
    ("postgres", DatabaseType::PostgreSQL),
    ("pg", DatabaseType::PostgreSQL),
    ("sqlserver", DatabaseType::SQLServer),
    ("mssql", DatabaseType::SQLServer),
    ("oracle", DatabaseType::Oracle),
    ("sqlite", DatabaseType::SQLite),
    ("sqlite3", DatabaseType::SQLite),
];

impl DatabaseType {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::H2,
        Self::MySQL,
        Self::PostgreSQL,
        Self::SQLServer,
        Self::Oracle,
        Self::SQLite,
    ];

    /// Canonical display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H2 => "H2",
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLServer => "SQLServer",
            Self::Oracle => "Oracle",
            Self::SQLite => "SQLite",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a dialect name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown database type: '{0}'")]
pub struct DatabaseTypeError(pub String);

impl FromStr for DatabaseType {
    type Err = DatabaseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        NAME_PATTERNS
            .iter()
            .find(|(pattern, _)| *pattern == lower)
            .map(|(_, db_type)| *db_type)
            .ok_or_else(|| DatabaseTypeError(s.to_string()))
    }
}

impl TryFrom<String> for DatabaseType {
    type Error = DatabaseTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DatabaseType> for String {
    fn from(value: DatabaseType) -> Self {
        value.as_str().to_string()
    }
}
