//! The transactional database writer.
//!
//! [`DneWriter`] owns the connection and the table registry. All work
//! happens inside a [`DneWriter::session`] scope: one transaction, one
//! fresh log sink attached for its duration, commit on success and rollback
//! on any error. The scope is the unit of atomicity; every lifecycle,
//! populate and audit operation issued inside it shares the one open
//! transaction.

mod audit;
mod lifecycle;
mod loader;
mod topo;

pub use loader::Value;

use crate::capture::LogSink;
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::schema::TableRegistry;
use rusqlite::{Connection, Transaction};
use tracing::info;

/// Transactional writer for the DNE schema.
pub struct DneWriter {
    conn: Connection,
    registry: TableRegistry,
    insert_buffer_size: usize,
}

impl DneWriter {
    /// Open a writer against the configured database, with the built-in
    /// eDNE table registry.
    pub fn open(config: &LoaderConfig) -> Result<Self> {
        let conn = Connection::open(&config.database.path)?;
        Self::new(conn, TableRegistry::dne(), config.load.insert_buffer_size)
    }

    /// Open a writer against the configured database with a caller-supplied
    /// registry.
    pub fn open_with_registry(config: &LoaderConfig, registry: TableRegistry) -> Result<Self> {
        let conn = Connection::open(&config.database.path)?;
        Self::new(conn, registry, config.load.insert_buffer_size)
    }

    /// Open a writer against an in-memory database.
    pub fn open_in_memory(registry: TableRegistry) -> Result<Self> {
        Self::new(Connection::open_in_memory()?, registry, 1000)
    }

    fn new(conn: Connection, registry: TableRegistry, insert_buffer_size: usize) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self {
            conn,
            registry,
            insert_buffer_size,
        })
    }

    /// Override the number of rows buffered per bulk insert.
    pub fn with_insert_buffer_size(mut self, size: usize) -> Self {
        self.insert_buffer_size = size;
        self
    }

    /// The table registry this writer resolves names against.
    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    /// Run `f` inside a load session.
    ///
    /// A fresh [`LogSink`] is constructed and attached for the duration of
    /// the call, so diagnostics emitted anywhere on this thread are captured
    /// and never leak into a later session. A transaction is opened before
    /// the body runs and committed only if the body returns `Ok`; on any
    /// error the transaction rolls back and the error propagates to the
    /// caller. Sink detachment and transaction release happen on every exit
    /// path.
    pub fn session<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&LoadSession<'_>) -> Result<T>,
    {
        let sink = LogSink::new();
        let _guard = sink.attach();

        info!("Connecting to database...");
        let tx = self.conn.transaction()?;
        let session = LoadSession {
            tx,
            registry: &self.registry,
            sink,
            insert_buffer_size: self.insert_buffer_size,
        };

        match f(&session) {
            Ok(value) => {
                let LoadSession { tx, .. } = session;
                tx.commit()?;
                Ok(value)
            }
            // Dropping the session rolls the transaction back.
            Err(err) => Err(err),
        }
    }
}

/// One open load session: a transaction plus the sink capturing its logs.
pub struct LoadSession<'conn> {
    pub(crate) tx: Transaction<'conn>,
    pub(crate) registry: &'conn TableRegistry,
    pub(crate) sink: LogSink,
    pub(crate) insert_buffer_size: usize,
}

impl LoadSession<'_> {
    /// The sink capturing this session's diagnostics.
    pub fn sink(&self) -> &LogSink {
        &self.sink
    }
}
