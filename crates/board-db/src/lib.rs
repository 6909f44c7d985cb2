pub mod memory;
pub mod migrations;
pub mod models;
pub mod queries;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use board_types::Message;

pub use memory::MemoryStore;

/// Filename that SQLite treats as a private, transient database.
pub const IN_MEMORY: &str = ":memory:";

/// Persistence capability used by the HTTP layer.
///
/// `save` assigns an id when the message has none, otherwise it inserts or
/// replaces the row with that id. `delete_by_id` reports whether a row was
/// removed; deleting a missing id is not an error.
pub trait MessageStore: Send + Sync + 'static {
    fn find_all(&self) -> Result<Vec<Message>>;
    fn save(&self, message: Message) -> Result<Message>;
    fn delete_by_id(&self, id: i64) -> Result<bool>;
}

/// SQLite-backed store. All access goes through a single connection.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if path == Path::new(IN_MEMORY) {
            return Self::open_in_memory();
        }

        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;

        migrations::run(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run(&conn)?;

        info!("In-memory database opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().map_err(|e| anyhow::anyhow!("DB lock poisoned: {}", e))?;
        f(&conn)
    }
}
