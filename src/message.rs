//! Messages and the message list
//!
//! The list keeps messages in the order they were given or appended. It
//! never sorts, filters or deduplicates.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A chat message as the backend returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Sequence number assigned by the backend
    pub id: u64,
    /// Author nickname
    #[serde(rename = "authorNick")]
    pub author: String,
    pub content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// RFC 3339, or an offset-less local date-time (Java `LocalDateTime`) read as UTC
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc())
        })
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

impl Message {
    pub fn new(
        id: u64,
        author: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            content: content.into(),
            created_at,
        }
    }
}

/// Display-ready row for one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub author: String,
    pub content: String,
    pub timestamp: String,
}

impl From<&Message> for MessageRow {
    fn from(message: &Message) -> Self {
        Self {
            author: message.author.clone(),
            content: message.content.clone(),
            timestamp: message.created_at.format("%d.%m.%Y %H:%M").to_string(),
        }
    }
}

/// Ordered collection of messages shown in the Messages view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageList {
    messages: Vec<Message>,
}

impl MessageList {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Built-in list shown before anything is fetched
    pub fn fixtures() -> Self {
        let earlier = DateTime::from_timestamp(1_658_138_400, 0).unwrap_or_default();
        let later = DateTime::from_timestamp(1_658_311_200, 0).unwrap_or_default();

        let mut messages = vec![Message::new(1, "Michal", "siema", earlier)];
        let greetings = [
            "Hej",
            "Co porabiasz?",
            "Co robisz?",
            "Jakie danie dzisiaj jadłeś?",
            "Chcesz pograć?",
            "Wyskoczysz z nami do parku?",
            "Ide do kina",
            "Jestem w sklepie",
        ];
        for (offset, text) in greetings.iter().enumerate() {
            messages.push(Message::new(offset as u64 + 2, "Michal", *text, later));
        }

        Self { messages }
    }

    /// Append at the end
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Swap in a freshly fetched list
    pub fn replace_all(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Lazily render rows in list order. Calling it again restarts from the top.
    pub fn rows(&self) -> impl Iterator<Item = MessageRow> + '_ {
        self.messages.iter().map(MessageRow::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_ascending_ids() {
        let list = MessageList::fixtures();
        assert_eq!(list.len(), 9);
        let ids: Vec<u64> = list.iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(list.iter().next().map(|m| m.content.as_str()), Some("siema"));
    }

    #[test]
    fn test_rows_idempotent_and_ordered() {
        let list = MessageList::fixtures();
        let first: Vec<MessageRow> = list.rows().collect();
        let second: Vec<MessageRow> = list.rows().collect();
        assert_eq!(first, second);

        let contents: Vec<&str> = list.iter().map(|m| m.content.as_str()).collect();
        let row_contents: Vec<&str> = first.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, row_contents);
    }

    #[test]
    fn test_rows_keep_input_order_even_when_unsorted() {
        let now = Utc::now();
        let list = MessageList::new(vec![
            Message::new(5, "b", "second id first", now),
            Message::new(2, "a", "first id second", now),
        ]);
        let rows: Vec<MessageRow> = list.rows().collect();
        assert_eq!(rows[0].content, "second id first");
        assert_eq!(rows[1].content, "first id second");
    }

    #[test]
    fn test_push_appends_without_touching_existing() {
        let mut list = MessageList::fixtures();
        let before: Vec<Message> = list.iter().cloned().collect();

        list.push(Message::new(10, "Kuba", "siema", Utc::now()));

        assert_eq!(list.len(), before.len() + 1);
        assert_eq!(list.last().map(|m| m.content.as_str()), Some("siema"));
        assert!(list.iter().zip(before.iter()).all(|(a, b)| a == b));
    }

    #[test]
    fn test_row_timestamp_format() {
        let list = MessageList::fixtures();
        let row = list.rows().next().unwrap();
        assert_eq!(row.author, "Michal");
        assert_eq!(row.timestamp, "18.07.2022 10:00");
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"id":3,"authorNick":"Kuba","content":"siema","createdAt":"2022-07-18T10:00:00Z"}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.author, "Kuba");
        assert_eq!(message.id, 3);

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["authorNick"], "Kuba");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_wire_format_without_offset() {
        let json = r#"{"id":3,"authorNick":"Kuba","content":"siema","createdAt":"2022-07-18T10:00:00.123456"}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.created_at.timestamp(), 1_658_138_400);
        assert_eq!(MessageRow::from(&message).timestamp, "18.07.2022 10:00");

        let whole_seconds = r#"{"id":4,"authorNick":"Kuba","content":"hej","createdAt":"2022-07-18T10:00:00"}"#;
        assert!(serde_json::from_str::<Message>(whole_seconds).is_ok());

        let garbage = r#"{"id":5,"authorNick":"Kuba","content":"hej","createdAt":"yesterday"}"#;
        assert!(serde_json::from_str::<Message>(garbage).is_err());
    }
}
