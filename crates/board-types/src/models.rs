use serde::{Deserialize, Serialize};

/// A single board message.
///
/// `id` is assigned by the store on first save and is `None` until then.
/// Both fields are optional on the wire; missing fields deserialize to `None`
/// and `None` serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: Some(content.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_null() {
        let msg: Message = serde_json::from_str("{}").unwrap();
        assert_eq!(msg, Message::default());

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({ "id": null, "content": null }));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let msg: Message =
            serde_json::from_str(r#"{"content":"hi","author":"someone"}"#).unwrap();
        assert_eq!(msg, Message::new("hi"));
    }
}
