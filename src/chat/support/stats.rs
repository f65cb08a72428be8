//! Player validity filtering and per-message stat extraction.
//!
//! Everything here mutates the [`ChatLog`] being built, in the same pass
//! that produces the entries. A name that never passes the validity filter
//! never gets a stat record, even when it keeps appearing as a sender.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::chatlog::{ChatLog, PlayerKey};

/// Names containing any of these (case-insensitively) are system artifacts, not players.
const SYSTEM_KEYWORDS: [&str; 6] = ["server", "system", "admin", "bot", "console", "unknown"];

// Example: "Bob(5) killed by Alice"
static KILL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\((\d+)\) killed by (\w+)").expect("regex compiles"));

// Example: "83.3 % accuracy"; an integer percentage intentionally does not match
static ACCURACY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+) % accuracy").expect("regex compiles"));

/// Single source of truth for player validation.
///
/// A candidate name is a "real" player unless it is empty, carries a system
/// keyword, is a generic pronoun, or starts with a system symbol/bracket.
pub(crate) fn is_valid_player(name: &str) -> bool {
    reject_reason(name).is_none()
}

/// Names the rule that rejects `name`, or `None` when the name is valid.
/// Used for debug diagnostics only.
pub(crate) fn reject_reason(name: &str) -> Option<&'static str> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Some("empty after trim");
    }

    let lower: String = trimmed.to_lowercase();
    if SYSTEM_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Some("system keyword");
    }
    if lower == "you" || lower == "me" {
        return Some("generic pronoun");
    }
    if trimmed.starts_with('*') || trimmed.starts_with('<') || trimmed.starts_with('>') {
        return Some("system symbol");
    }
    // Literal lowercase prefixes, checked before any case folding
    if trimmed.starts_with("[system") || trimmed.starts_with("[server") {
        return Some("system bracket");
    }
    None
}

/// Registers one entry's sender/recipient and extracts kill/death/accuracy
/// figures from its message.
///
/// # Behavior
/// - A valid sender gets a stat record on first sight and `message_count += 1`.
/// - A valid recipient gets a stat record if absent, but no count increment.
/// - The kill pattern credits `kills` to the killer and `deaths` to the
///   victim, each **only** when that stat record already exists; unknown
///   names are silently skipped.
/// - The accuracy pattern overwrites the sender's `accuracy`, only when the
///   sender's stat record exists.
pub(crate) fn record(log: &mut ChatLog, sender: &str, recipient: Option<&str>, message: &str) {
    if is_valid_player(sender) {
        let key: PlayerKey = log.add_player_if_absent(sender);
        log.players[key].message_count += 1;
    } else if !sender.is_empty() {
        log::debug!(
            "rejected sender \"{}\" ({})",
            sender,
            reject_reason(sender).unwrap_or("unknown reason")
        );
    }

    if let Some(recipient) = recipient
        && is_valid_player(recipient)
    {
        // Recipient appearances create the record but never count as messages
        log.add_player_if_absent(recipient);
    }

    if message.contains("killed by")
        && let Some(caps) = KILL.captures(message)
    {
        let victim: &str = &caps[1];
        let killer: &str = &caps[3];
        if let Some(key) = log.get_player_key_by_name(killer) {
            log.players[key].kills += 1;
        }
        if let Some(key) = log.get_player_key_by_name(victim) {
            log.players[key].deaths += 1;
        }
    }

    if message.contains("% accuracy")
        && let Some(caps) = ACCURACY.captures(message)
        && let Some(key) = log.get_player_key_by_name(sender)
        && let Ok(value) = caps[1].parse::<f64>()
    {
        log.players[key].accuracy = Some(value);
    }
}
