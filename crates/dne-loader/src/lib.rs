//! # dne-loader
//!
//! Transactional bulk loader for the Brazilian eDNE postal-code registry.
//!
//! The library loads the Correios reference dataset into a relational
//! schema with:
//!
//! - **Bounded bulk inserts** (1000 rows per statement by default)
//! - **Topological row ordering** for self-referencing tables, so parent
//!   localities are inserted before their sub-localities
//! - **Session-scoped transactions** with commit-on-success and
//!   rollback-on-failure
//! - **A persisted audit trail** capturing every diagnostic line emitted
//!   during a load session
//!
//! ## Example
//!
//! ```rust,no_run
//! use dne_loader::{DneWriter, LoaderConfig, Value};
//!
//! fn main() -> dne_loader::Result<()> {
//!     let config = LoaderConfig::load("loader.yaml")?;
//!     let mut writer = DneWriter::open(&config)?;
//!
//!     writer.session(|session| {
//!         session.create_tables(&["log_faixa_uf", "log_localidade"])?;
//!         session.populate_table(
//!             "log_faixa_uf",
//!             vec![vec![Value::from("SP"), "01000000".into(), "19999999".into()]],
//!         )?;
//!         session.register_update()
//!     })
//! }
//! ```

pub mod capture;
pub mod config;
pub mod error;
pub mod schema;
pub mod writer;

// Re-exports for convenient access
pub use capture::LogSink;
pub use config::{DatabaseConfig, LoadConfig, LoaderConfig};
pub use error::{LoaderError, Result};
pub use schema::{Column, ColumnType, ForeignKey, TableDescriptor, TableRegistry, AUDIT_TABLE};
pub use writer::{DneWriter, LoadSession, Value};
