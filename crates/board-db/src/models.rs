use board_types::Message;

/// A row of the `messages` table.
pub struct MessageRow {
    pub id: i64,
    pub content: Option<String>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: Some(row.id),
            content: row.content,
        }
    }
}
