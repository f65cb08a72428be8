use serde_derive::{Deserialize, Serialize};

/// Aggregate counters derived from all entries sent by one player.
///
/// One `PlayerStat` exists per unique valid name within a single parse pass;
/// the whole set is recomputed from scratch whenever new text is loaded.
///
/// Invariant: `message_count` equals the number of entries whose sender is
/// exactly `name`, restricted to senders that passed the validity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    /// Player name as it appeared in the log (unique key within one pass).
    pub name: String,
    /// Entries where this player is the sender. Recipient appearances do not count.
    pub message_count: u64,
    /// Kills credited via the `name(n) killed by killer` message pattern.
    pub kills: u64,
    /// Deaths recorded via the same pattern, victim side.
    pub deaths: u64,
    /// Last-seen percentage from an accuracy report, if any. Later reports overwrite earlier ones.
    pub accuracy: Option<f64>,
}

impl PlayerStat {
    /// Creates a zeroed stat record for `name`.
    pub fn new(name: &str) -> Self {
        PlayerStat {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Clears this `PlayerStat` to defaults.
    pub fn clear(&mut self) {
        self.name.clear();
        self.message_count = 0;
        self.kills = 0;
        self.deaths = 0;
        self.accuracy = None;
    }
}
