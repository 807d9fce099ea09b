//! Table lifecycle operations: create, clean, drop.

use crate::error::Result;
use crate::writer::LoadSession;
use tracing::info;

impl LoadSession<'_> {
    /// Create the named tables, in the order given.
    ///
    /// The caller supplies a dependency-safe order (referenced tables
    /// first); no reordering happens here. Creation is idempotent.
    pub fn create_tables<S: AsRef<str>>(&self, tables: &[S]) -> Result<()> {
        let listing = tables
            .iter()
            .map(|t| format!("- {}", t.as_ref()))
            .collect::<Vec<_>>()
            .join("\n");
        info!("Creating tables:\n{}", listing);

        for name in tables {
            let table = self.registry.get(name.as_ref())?;
            self.tx.execute(&table.create_sql(), [])?;
        }
        Ok(())
    }

    /// Delete all rows from the named tables.
    ///
    /// Tables are processed in reverse of the given order so dependents are
    /// emptied before the tables they reference. Each delete is a single
    /// bulk statement, issued only when the table holds rows.
    pub fn clean_tables<S: AsRef<str>>(&self, tables: &[S]) -> Result<()> {
        info!("Cleaning tables");

        for name in tables.iter().rev() {
            let table = self.registry.get(name.as_ref())?;

            let num_rows: i64 = self.tx.query_row(
                &format!("SELECT COUNT(*) FROM {}", table.name),
                [],
                |row| row.get(0),
            )?;

            if num_rows > 0 {
                info!("Deleting {} rows from table {}", num_rows, table.name);
                self.tx.execute(&format!("DELETE FROM {}", table.name), [])?;
            }
        }
        Ok(())
    }

    /// Drop the named tables, in reverse of the given order.
    ///
    /// A table missing from the database is not an error. An empty list is
    /// a no-op with no log output.
    pub fn drop_tables<S: AsRef<str>>(&self, tables: &[S]) -> Result<()> {
        if tables.is_empty() {
            return Ok(());
        }

        info!("Dropping tables");

        for name in tables.iter().rev() {
            let table = self.registry.get(name.as_ref())?;
            info!("Dropping table {}", table.name);
            self.tx
                .execute(&format!("DROP TABLE IF EXISTS {}", table.name), [])?;
        }
        Ok(())
    }
}
