use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    // AUTOINCREMENT keeps ids of deleted messages from being handed out again.
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS messages (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            content     TEXT
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
