//! Audit trail of load sessions.

use crate::error::Result;
use crate::schema::AUDIT_TABLE;
use chrono::Local;
use rusqlite::{params, Transaction};
use tracing::info;

use crate::writer::LoadSession;

impl LoadSession<'_> {
    /// Record this session's captured log output in the audit table.
    ///
    /// Inserts one row with the current local timestamp (second precision)
    /// and the full newline-joined log text accumulated so far. Call this
    /// after all loads in the session have succeeded; the sink keeps
    /// accumulating afterwards and is discarded with the session.
    pub fn register_update(&self) -> Result<()> {
        info!("Recording DNE database update");

        let logs = self.sink.contents();
        let update_date = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        self.tx.execute(
            &format!(
                "INSERT INTO {} (update_date, logs) VALUES (?, ?)",
                AUDIT_TABLE
            ),
            params![update_date, logs],
        )?;

        info!("Update successfully recorded");
        Ok(())
    }

    /// Run the downstream unified-CEP derivation step.
    ///
    /// The step is opaque to the writer: it receives the open transaction
    /// and reports only success or failure. Typically invoked after every
    /// postal table has been populated.
    pub fn derive_unified<F>(&self, step: F) -> Result<()>
    where
        F: FnOnce(&Transaction<'_>) -> Result<()>,
    {
        info!("Populating unified CEP table");
        step(&self.tx)
    }
}
