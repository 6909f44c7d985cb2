use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::Result;

use board_types::Message;

use crate::MessageStore;

/// Map-backed store for tests and throwaway runs. Lists in id order and
/// never reuses an id, matching the SQLite adapter.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Option<String>>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_inner<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Inner) -> T,
    {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))?;
        Ok(f(&mut inner))
    }
}

impl MessageStore for MemoryStore {
    fn find_all(&self) -> Result<Vec<Message>> {
        self.with_inner(|inner| {
            inner
                .rows
                .iter()
                .map(|(id, content)| Message {
                    id: Some(*id),
                    content: content.clone(),
                })
                .collect()
        })
    }

    fn save(&self, message: Message) -> Result<Message> {
        self.with_inner(|inner| -> Result<Message> {
            let id = match message.id {
                Some(id) => id,
                None => inner
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| anyhow::anyhow!("Message id space exhausted"))?,
            };
            inner.last_id = inner.last_id.max(id);
            inner.rows.insert(id, message.content.clone());

            Ok(Message {
                id: Some(id),
                content: message.content,
            })
        })?
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        self.with_inner(|inner| inner.rows.remove(&id).is_some())
    }
}
