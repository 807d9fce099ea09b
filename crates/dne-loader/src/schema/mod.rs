//! Schema metadata for the loaded tables.
//!
//! These types provide a store-agnostic description of each target table and
//! a frozen registry mapping table names to descriptors. The registry is
//! built once at startup and stays immutable for the lifetime of a writer,
//! avoiding runtime string-keyed dispatch against mutable catalog state.

mod dne;

use crate::error::{LoaderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column data type, mapped onto SQLite storage classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Integer column.
    Integer,
    /// Text column.
    Text,
}

impl ColumnType {
    /// The SQL type name used in DDL.
    pub fn sql_name(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
        }
    }
}

/// Column metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,

    /// Data type.
    pub data_type: ColumnType,

    /// Whether the column allows NULL.
    pub is_nullable: bool,
}

impl Column {
    /// A nullable integer column.
    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: ColumnType::Integer,
            is_nullable: true,
        }
    }

    /// A nullable text column.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: ColumnType::Text,
            is_nullable: true,
        }
    }

    /// Mark the column NOT NULL.
    pub fn required(mut self) -> Self {
        self.is_nullable = false;
        self
    }
}

/// Foreign key metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Referencing column name.
    pub column: String,

    /// Referenced table name.
    pub ref_table: String,

    /// Referenced column name.
    pub ref_column: String,
}

impl ForeignKey {
    /// Create a foreign key relation.
    pub fn new(
        column: impl Into<String>,
        ref_table: impl Into<String>,
        ref_column: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            ref_table: ref_table.into(),
            ref_column: ref_column.into(),
        }
    }
}

/// Table metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Table name.
    pub name: String,

    /// Column definitions, in insertion order.
    pub columns: Vec<Column>,

    /// Primary key column names.
    pub primary_key: Vec<String>,

    /// Foreign key constraints.
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableDescriptor {
    /// Create a descriptor with no primary key or foreign keys.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            primary_key: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Set the primary key columns.
    pub fn with_primary_key(mut self, columns: &[&str]) -> Self {
        self.primary_key = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add a foreign key constraint.
    pub fn with_foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Column names in definition order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// The first foreign key that references this table itself, if any.
    ///
    /// Its presence means rows must be topologically ordered before
    /// insertion so parents land before their children.
    pub fn self_referencing_fk(&self) -> Option<&ForeignKey> {
        self.foreign_keys.iter().find(|fk| fk.ref_table == self.name)
    }

    /// The `CREATE TABLE IF NOT EXISTS` statement for this descriptor.
    pub fn create_sql(&self) -> String {
        let mut parts: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                if c.is_nullable {
                    format!("{} {}", c.name, c.data_type.sql_name())
                } else {
                    format!("{} {} NOT NULL", c.name, c.data_type.sql_name())
                }
            })
            .collect();

        if !self.primary_key.is_empty() {
            parts.push(format!("PRIMARY KEY ({})", self.primary_key.join(", ")));
        }

        for fk in &self.foreign_keys {
            parts.push(format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                fk.column, fk.ref_table, fk.ref_column
            ));
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.name,
            parts.join(", ")
        )
    }
}

/// Frozen registry of table descriptors, keyed by name.
///
/// Explicitly constructed and passed to the writer rather than living in
/// global state; enumeration preserves registration order so callers get a
/// dependency-safe table sequence.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: HashMap<String, TableDescriptor>,
    order: Vec<String>,
}

impl TableRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. Replaces any previous descriptor of the same name.
    pub fn register(&mut self, descriptor: TableDescriptor) {
        if !self.tables.contains_key(&descriptor.name) {
            self.order.push(descriptor.name.clone());
        }
        self.tables.insert(descriptor.name.clone(), descriptor);
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Result<&TableDescriptor> {
        self.tables
            .get(name)
            .ok_or_else(|| LoaderError::TableNotFound(name.to_string()))
    }

    /// Check if a table is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// All registered table names, in registration order.
    pub fn table_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }
}

/// Name of the persisted audit table.
pub const AUDIT_TABLE: &str = "log_dne_update";

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_table() -> TableDescriptor {
        TableDescriptor::new(
            "log_localidade",
            vec![
                Column::integer("loc_nu").required(),
                Column::text("ufe_sg").required(),
                Column::integer("loc_nu_sub"),
            ],
        )
        .with_primary_key(&["loc_nu"])
        .with_foreign_key(ForeignKey::new("ufe_sg", "log_faixa_uf", "ufe_sg"))
        .with_foreign_key(ForeignKey::new("loc_nu_sub", "log_localidade", "loc_nu"))
    }

    #[test]
    fn test_self_referencing_fk_first_match() {
        let table = make_test_table();
        let fk = table.self_referencing_fk().unwrap();
        assert_eq!(fk.column, "loc_nu_sub");
        assert_eq!(fk.ref_column, "loc_nu");
    }

    #[test]
    fn test_no_self_reference() {
        let table = TableDescriptor::new("log_bairro", vec![Column::integer("bai_nu")])
            .with_foreign_key(ForeignKey::new("loc_nu", "log_localidade", "loc_nu"));
        assert!(table.self_referencing_fk().is_none());
    }

    #[test]
    fn test_create_sql() {
        let table = make_test_table();
        assert_eq!(
            table.create_sql(),
            "CREATE TABLE IF NOT EXISTS log_localidade (\
             loc_nu INTEGER NOT NULL, ufe_sg TEXT NOT NULL, loc_nu_sub INTEGER, \
             PRIMARY KEY (loc_nu), \
             FOREIGN KEY (ufe_sg) REFERENCES log_faixa_uf (ufe_sg), \
             FOREIGN KEY (loc_nu_sub) REFERENCES log_localidade (loc_nu))"
        );
    }

    #[test]
    fn test_column_index() {
        let table = make_test_table();
        assert_eq!(table.column_index("loc_nu"), Some(0));
        assert_eq!(table.column_index("loc_nu_sub"), Some(2));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_registry_lookup_and_order() {
        let mut registry = TableRegistry::new();
        registry.register(TableDescriptor::new("b", vec![Column::text("x")]));
        registry.register(TableDescriptor::new("a", vec![Column::text("y")]));

        assert!(registry.get("b").is_ok());
        assert!(matches!(
            registry.get("ghost"),
            Err(LoaderError::TableNotFound(_))
        ));
        assert_eq!(registry.table_names(), vec!["b", "a"]);
    }

    #[test]
    fn test_dne_registry_contents() {
        let registry = TableRegistry::dne();
        assert!(registry.contains("log_localidade"));
        assert!(registry.contains(AUDIT_TABLE));

        // The locality table carries the one self-reference in the dataset.
        let localidade = registry.get("log_localidade").unwrap();
        let fk = localidade.self_referencing_fk().unwrap();
        assert_eq!(fk.column, "loc_nu_sub");

        // Registration order is dependency-safe for creation.
        let names = registry.table_names();
        let pos = |n: &str| names.iter().position(|t| *t == n).unwrap();
        assert!(pos("log_faixa_uf") < pos("log_localidade"));
        assert!(pos("log_localidade") < pos("log_bairro"));
        assert!(pos("log_bairro") < pos("log_logradouro"));
    }
}
