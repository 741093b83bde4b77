//! # Query Executor
//!
//! Read-only execution against the dataset store.
//!
//! The store is a SQLite database seeded once at startup. Connections are
//! scoped per request: a handler acquires a [`StoreSession`] at request
//! start and drops it on every exit path. Each statement runs under a
//! watchdog that interrupts the engine once the statement timeout elapses,
//! so a runaway learner join cannot pin a worker.

pub mod errors;
pub mod result;

pub use errors::{ExecError, ExecResult};
pub use result::{ResultSet, Row, ScalarValue};

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use rusqlite::{Connection, InterruptHandle, OpenFlags};

/// Handle to the read-only dataset store
#[derive(Debug, Clone)]
pub struct DatasetStore {
    path: PathBuf,
    statement_timeout: Duration,
}

impl DatasetStore {
    /// Create a store handle for a seeded database file
    pub fn open(path: impl Into<PathBuf>, statement_timeout: Duration) -> Self {
        Self {
            path: path.into(),
            statement_timeout,
        }
    }

    /// Returns the database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire a read-only session for one request
    pub fn session(&self) -> ExecResult<StoreSession> {
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(StoreSession {
            conn,
            statement_timeout: self.statement_timeout,
        })
    }
}

/// A per-request read-only connection
pub struct StoreSession {
    conn: Connection,
    statement_timeout: Duration,
}

impl StoreSession {
    /// Execute a read query and normalize the result.
    ///
    /// Column order is engine-reported; each row becomes a column->value
    /// map with native scalar types preserved.
    pub fn execute_read(&self, sql: &str) -> ExecResult<ResultSet> {
        let _watchdog = Watchdog::arm(self.conn.get_interrupt_handle(), self.statement_timeout);

        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let decl_types: Vec<Option<String>> = stmt
            .columns()
            .iter()
            .map(|col| col.decl_type().map(str::to_string))
            .collect();

        let mut engine_rows = stmt.query([])?;
        let mut rows = Vec::new();
        while let Some(engine_row) = engine_rows.next()? {
            let mut row = Row::new();
            for (i, name) in columns.iter().enumerate() {
                let value: rusqlite::types::Value = engine_row.get(i)?;
                row.insert(
                    name.clone(),
                    ScalarValue::from_engine(value, decl_types[i].as_deref()),
                );
            }
            rows.push(row);
        }

        Ok(ResultSet { columns, rows })
    }
}

/// Statement timeout guard. Arms a timer thread that interrupts the
/// connection when the timeout elapses; dropping the guard disarms it.
struct Watchdog {
    disarm: mpsc::Sender<()>,
}

impl Watchdog {
    fn arm(handle: InterruptHandle, timeout: Duration) -> Self {
        let (disarm, armed) = mpsc::channel();
        thread::spawn(move || {
            if matches!(armed.recv_timeout(timeout), Err(RecvTimeoutError::Timeout)) {
                handle.interrupt();
            }
        });
        Self { disarm }
    }
}

impl Drop for Watchdog {
    fn drop(&mut self) {
        let _ = self.disarm.send(());
    }
}
