//! Authority definition: per-dialect init/clean SQL statement lists.

use std::collections::BTreeSet;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::database_type::DatabaseType;

/// One block of authority statements shared by one or more dialects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SqlSet {
    /// Dialects this block applies to.
    ///
    /// Accepts a list (`[MySQL, H2]`) or a comma separated string
    /// (`"MySQL,H2"`).
    #[serde(rename = "db-types", deserialize_with = "deserialize_database_types")]
    pub database_types: Vec<DatabaseType>,
    /// Setup statements, in execution order.
    #[serde(rename = "init-sqls", default)]
    pub init_sqls: Vec<String>,
    /// Teardown statements, in execution order.
    #[serde(rename = "clean-sqls", default)]
    pub clean_sqls: Vec<String>,
}

impl SqlSet {
    /// Whether this block applies to `database_type`.
    pub fn applies_to(&self, database_type: DatabaseType) -> bool {
        self.database_types.contains(&database_type)
    }
}

/// Declarative authority document in memory.
///
/// Lookups for a dialect the document never mentions yield an empty list.
/// When several blocks name the same dialect their statements are
/// concatenated in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorityDefinition {
    #[serde(rename = "sql-sets")]
    sql_sets: Vec<SqlSet>,
}

impl AuthorityDefinition {
    /// Build a definition from already-assembled blocks.
    pub fn new(sql_sets: Vec<SqlSet>) -> Self {
        Self { sql_sets }
    }

    /// All blocks, in document order.
    pub fn sql_sets(&self) -> &[SqlSet] {
        &self.sql_sets
    }

    /// Resolved setup statements for `database_type`.
    pub fn init_sqls(&self, database_type: DatabaseType) -> Vec<&str> {
        self.resolve(database_type, |set| &set.init_sqls)
    }

    /// Resolved teardown statements for `database_type`.
    pub fn clean_sqls(&self, database_type: DatabaseType) -> Vec<&str> {
        self.resolve(database_type, |set| &set.clean_sqls)
    }

    /// Dialects mentioned anywhere in the document.
    pub fn dialects(&self) -> BTreeSet<DatabaseType> {
        self.sql_sets
            .iter()
            .flat_map(|set| set.database_types.iter().copied())
            .collect()
    }

    fn resolve<'a>(
        &'a self,
        database_type: DatabaseType,
        select: impl Fn(&'a SqlSet) -> &'a Vec<String>,
    ) -> Vec<&'a str> {
        self.sql_sets
            .iter()
            .filter(|set| set.applies_to(database_type))
            .flat_map(|set| select(set).iter().map(String::as_str))
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DatabaseTypeList {
    List(Vec<String>),
    Joined(String),
}

fn deserialize_database_types<'de, D>(deserializer: D) -> Result<Vec<DatabaseType>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = match DatabaseTypeList::deserialize(deserializer)? {
        DatabaseTypeList::List(names) => names,
        DatabaseTypeList::Joined(joined) => joined.split(',').map(str::to_string).collect(),
    };

    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<DatabaseType>().map_err(de::Error::custom))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AuthorityDefinition {
        AuthorityDefinition::new(vec![
            SqlSet {
                database_types: vec![DatabaseType::MySQL, DatabaseType::H2],
                init_sqls: vec!["CREATE USER a".into(), "GRANT ALL TO a".into()],
                clean_sqls: vec!["DROP USER a".into()],
            },
            SqlSet {
                database_types: vec![DatabaseType::MySQL],
                init_sqls: vec!["CREATE USER b".into()],
                clean_sqls: vec![],
            },
        ])
    }

    #[test]
    fn test_resolve_concatenates_in_document_order() {
        let definition = sample();
        assert_eq!(
            definition.init_sqls(DatabaseType::MySQL),
            vec!["CREATE USER a", "GRANT ALL TO a", "CREATE USER b"]
        );
        assert_eq!(
            definition.init_sqls(DatabaseType::H2),
            vec!["CREATE USER a", "GRANT ALL TO a"]
        );
        assert_eq!(definition.clean_sqls(DatabaseType::MySQL), vec!["DROP USER a"]);
    }

    #[test]
    fn test_absent_dialect_resolves_empty() {
        let definition = sample();
        assert!(definition.init_sqls(DatabaseType::Oracle).is_empty());
        assert!(definition.clean_sqls(DatabaseType::Oracle).is_empty());
        assert!(AuthorityDefinition::default().init_sqls(DatabaseType::H2).is_empty());
    }

    #[test]
    fn test_dialects() {
        let dialects: Vec<_> = sample().dialects().into_iter().collect();
        assert_eq!(dialects, vec![DatabaseType::H2, DatabaseType::MySQL]);
    }

    #[test]
    fn test_db_types_accepts_joined_string() {
        let yaml = r#"
sql-sets:
  - db-types: "MySQL, PostgreSQL"
    init-sqls: [CREATE ROLE r]
"#;
        let definition: AuthorityDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            definition.sql_sets()[0].database_types,
            vec![DatabaseType::MySQL, DatabaseType::PostgreSQL]
        );
        assert!(definition.sql_sets()[0].clean_sqls.is_empty());
    }

    #[test]
    fn test_unknown_db_type_is_rejected() {
        let yaml = r#"
sql-sets:
  - db-types: [MySQL, Informix]
"#;
        let err = serde_yaml::from_str::<AuthorityDefinition>(yaml).unwrap_err();
        assert!(err.to_string().contains("Informix"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let yaml = r#"
sql-sets:
  - db-types: [H2]
    setup-sqls: [CREATE USER a]
"#;
        assert!(serde_yaml::from_str::<AuthorityDefinition>(yaml).is_err());
    }

    #[test]
    fn test_missing_db_types_is_rejected() {
        let json = r#"{"sql-sets": [{"init-sqls": ["CREATE USER a"]}]}"#;
        assert!(serde_json::from_str::<AuthorityDefinition>(json).is_err());
    }
}
