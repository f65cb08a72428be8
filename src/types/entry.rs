use serde_derive::{Deserialize, Serialize};

/// A single parsed line from a chat log.
///
/// Entries are created in bulk by the chat parser, in file order, and are
/// never mutated afterwards; loading new text replaces the whole list.
///
/// # Fields
/// - `channel`: Numeric channel identifier from the log (e.g. `0`, `2`, `5`,
///   `6`, `9`). Non-numeric input defaults to `0`. Unrecognized values are a
///   display concern, not a parse error.
/// - `sender`: The name that produced the line, stored **verbatim** even when
///   it fails the player validity filter (raw display still shows it; only
///   aggregate stats exclude it). May be empty.
/// - `recipient`: Optional addressee, present only for whisper-style lines.
/// - `message`: The remaining free text of the line, already stripped of the
///   leading channel/sender/recipient fields.
/// - `sequence_index`: 0-based position of this entry among **all** non-empty
///   input lines, including lines later dropped as malformed. Indices can
///   therefore have gaps; within the entry list they are strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub channel: u32,
    pub sender: String,
    pub recipient: Option<String>,
    pub message: String,
    pub sequence_index: usize,
}

impl LogEntry {
    /// True when the line was addressed to `name` (whisper-style).
    pub fn is_addressed_to(&self, name: &str) -> bool {
        self.recipient.as_deref() == Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_public_line() {
        let entry: LogEntry = LogEntry::default();
        assert_eq!(entry.channel, 0);
        assert!(entry.sender.is_empty());
        assert!(entry.recipient.is_none());
        assert!(entry.message.is_empty());
        assert_eq!(entry.sequence_index, 0);
    }

    #[test]
    fn is_addressed_to_checks_recipient_only() {
        let entry = LogEntry {
            channel: 9,
            sender: "Alice".to_string(),
            recipient: Some("Bob".to_string()),
            message: "psst".to_string(),
            sequence_index: 3,
        };
        assert!(entry.is_addressed_to("Bob"));
        assert!(!entry.is_addressed_to("Alice"));
        assert!(!LogEntry::default().is_addressed_to("Bob"));
    }
}
