use anyhow::Result;
use rusqlite::Connection;
use tracing::debug;

use board_types::Message;

use crate::models::MessageRow;
use crate::{Database, MessageStore};

impl Database {
    pub fn list_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(query_messages)
    }

    /// Inserts a new row and returns the id SQLite assigned to it.
    pub fn insert_message(&self, content: Option<&str>) -> Result<i64> {
        self.with_conn(|conn| {
            let id = conn.query_row(
                "INSERT INTO messages (content) VALUES (?1) RETURNING id",
                [content],
                |row| row.get(0),
            )?;
            Ok(id)
        })
    }

    /// Writes `content` to the row with `id`, creating the row if needed.
    pub fn upsert_message(&self, id: i64, content: Option<&str>) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (id, content) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET content = excluded.content",
                rusqlite::params![id, content],
            )?;
            Ok(())
        })
    }

    /// Returns the number of rows removed (0 or 1).
    pub fn delete_message(&self, id: i64) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM messages WHERE id = ?1", [id])?))
    }
}

impl MessageStore for Database {
    fn find_all(&self) -> Result<Vec<Message>> {
        let rows = self.list_messages()?;
        Ok(rows.into_iter().map(Message::from).collect())
    }

    fn save(&self, message: Message) -> Result<Message> {
        let id = match message.id {
            Some(id) => {
                self.upsert_message(id, message.content.as_deref())?;
                id
            }
            None => self.insert_message(message.content.as_deref())?,
        };
        debug!("Saved message {}", id);

        Ok(Message {
            id: Some(id),
            content: message.content,
        })
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.delete_message(id)? > 0)
    }
}

fn query_messages(conn: &Connection) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare("SELECT id, content FROM messages ORDER BY id")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                content: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
