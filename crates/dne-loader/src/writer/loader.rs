//! Bounded-batch row insertion.

use crate::error::{LoaderError, Result};
use crate::writer::{topo, LoadSession};
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use tracing::{debug, info};

/// A single row cell.
///
/// Rows are positionally aligned with the table's column list; the first
/// cell doubles as the row's identifying key when the table self-references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Integer value.
    Integer(i64),
    /// Text value.
    Text(String),
}

impl Value {
    /// Whether this cell is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            Value::Integer(v) => ToSqlOutput::Borrowed(ValueRef::Integer(*v)),
            Value::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
        })
    }
}

impl LoadSession<'_> {
    /// Populate a table from a sequence of rows, in bounded bulk batches.
    ///
    /// If the table carries a self-referencing foreign key, the whole
    /// sequence is materialized and topologically reordered so parent rows
    /// are inserted before the rows that point at them; otherwise input
    /// order is preserved exactly. Returns the number of rows inserted.
    ///
    /// A row whose value count differs from the table's column count fails
    /// the whole population: a partial load would leave the registry's
    /// referential structure corrupt.
    pub fn populate_table<I>(&self, table_name: &str, rows: I) -> Result<u64>
    where
        I: IntoIterator<Item = Vec<Value>>,
    {
        info!("Populating table {}", table_name);
        let table = self.registry.get(table_name)?;
        let expected = table.columns.len();
        let insert_columns = table.column_names().join(", ");

        let inserted = match table.self_referencing_fk() {
            Some(fk) => {
                let parent_index = table.column_index(&fk.column).ok_or_else(|| {
                    LoaderError::Config(format!(
                        "foreign key column {} missing from table {}",
                        fk.column, table_name
                    ))
                })?;

                // The sequence is iterated more than once, so collect it,
                // checking arity up front.
                let mut collected = Vec::new();
                for (i, row) in rows.into_iter().enumerate() {
                    if row.len() != expected {
                        return Err(LoaderError::row_format(
                            table_name,
                            i + 1,
                            expected,
                            row.len(),
                        ));
                    }
                    collected.push(row);
                }

                let sorted = topo::sort_self_referencing(collected, parent_index, table_name)?;
                self.insert_rows(table_name, &insert_columns, expected, sorted.into_iter())?
            }
            None => self.insert_rows(table_name, &insert_columns, expected, rows.into_iter())?,
        };

        info!("Inserted {} rows into table \"{}\"", inserted, table_name);
        Ok(inserted)
    }

    /// Stream rows into the bounded buffer, flushing on capacity and once
    /// more for any remainder. Never issues an empty insert.
    fn insert_rows<I>(
        &self,
        table_name: &str,
        insert_columns: &str,
        arity: usize,
        rows: I,
    ) -> Result<u64>
    where
        I: Iterator<Item = Vec<Value>>,
    {
        let mut buffer: Vec<Vec<Value>> = Vec::with_capacity(self.insert_buffer_size);
        let mut inserted: u64 = 0;

        for (i, row) in rows.enumerate() {
            if row.len() != arity {
                return Err(LoaderError::row_format(table_name, i + 1, arity, row.len()));
            }
            buffer.push(row);

            if buffer.len() >= self.insert_buffer_size {
                inserted += self.flush(table_name, insert_columns, arity, &mut buffer)?;
            }
        }

        if !buffer.is_empty() {
            inserted += self.flush(table_name, insert_columns, arity, &mut buffer)?;
        }

        Ok(inserted)
    }

    /// Execute one multi-row insert for the buffered rows and clear the buffer.
    fn flush(
        &self,
        table_name: &str,
        insert_columns: &str,
        arity: usize,
        buffer: &mut Vec<Vec<Value>>,
    ) -> Result<u64> {
        let row_placeholder = format!("({})", vec!["?"; arity].join(", "));
        let sql = format!(
            "INSERT INTO {} ({}) VALUES {}",
            table_name,
            insert_columns,
            vec![row_placeholder; buffer.len()].join(", ")
        );

        self.tx
            .execute(&sql, rusqlite::params_from_iter(buffer.iter().flatten()))?;

        let flushed = buffer.len() as u64;
        debug!("Flushed {} rows into table {}", flushed, table_name);
        buffer.clear();
        Ok(flushed)
    }
}
