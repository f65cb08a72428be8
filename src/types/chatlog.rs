//! ChatLog model (SlotMap-backed).
//!
//! This module defines the in-memory **chat log** produced by the parser.
//! Entries live in a plain `Vec` in file order; players use a **SlotMap**
//! arena with **stable keys** ([`PlayerKey`]). Public iteration follows the
//! **order vector** via `iter_players()`, and `sort_players_by_message_count()`
//! ranks the leaderboard (stable, so first-seen order breaks ties).
//!
//! **Lookups** are O(1) and keyed by the **exact** name as it appeared in
//! the log: "Alice" and "ALICE" are two different players with two separate
//! stat records, and every per-message credit goes to the exact spelling.

use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;
use std::fmt;

use crate::types::{entry::LogEntry, player::PlayerStat};

// --- Stable keys (SlotMap) ---
new_key_type! { pub struct PlayerKey; }

/// In-memory representation of a parsed chat log.
///
/// A `ChatLog` is created by the chat parser and then consumed by downstream
/// UIs/tools. It stores entries in file order, the arena of player stats
/// (SlotMap with stable keys), an order vector controlling iteration order,
/// and a normalized name lookup for efficient queries.
///
/// The whole structure is an immutable snapshot from the consumer's point of
/// view: loading new text builds a fresh `ChatLog` rather than patching one
/// in place.
#[derive(Default, Clone, Debug)]
pub struct ChatLog {
    /// All parsed entries in file order.
    pub entries: Vec<LogEntry>,

    // --- Main storage (stable-key map) ---
    pub players: SlotMap<PlayerKey, PlayerStat>,

    // --- Order "view" ---
    pub players_order: Vec<PlayerKey>,

    /// Count of non-empty lines dropped as malformed (fewer than 3 tab fields).
    /// Diagnostic only; dropped lines are not an error.
    pub skipped_lines: usize,

    // --- Lookup (exact names) ---
    pub(crate) player_key_by_name: HashMap<String, PlayerKey>, // name (verbatim) → PlayerKey
}

impl ChatLog {
    /// Adds a player stat record if not already present and returns the
    /// corresponding `PlayerKey`.
    ///
    /// Names match **exactly**: spellings differing only in case are
    /// different players. New records start zeroed.
    pub fn add_player_if_absent(&mut self, name: &str) -> PlayerKey {
        if let Some(k) = self.get_player_key_by_name(name) {
            return k;
        }
        let key: PlayerKey = self.players.insert(PlayerStat::new(name));
        self.players_order.push(key);
        self.player_key_by_name.insert(name.to_string(), key);
        key
    }

    /// Returns the stable key for `name`, if a stat record exists (exact match).
    pub fn get_player_key_by_name(&self, name: &str) -> Option<PlayerKey> {
        self.player_key_by_name.get(name).copied()
    }

    /// Returns the stat record for `name`, if present (exact match).
    pub fn get_player_by_name(&self, name: &str) -> Option<&PlayerStat> {
        self.players.get(self.get_player_key_by_name(name)?)
    }

    /// Iterates player stats following `players_order`.
    pub fn iter_players(&self) -> impl Iterator<Item = (PlayerKey, &PlayerStat)> {
        self.players_order
            .iter()
            .filter_map(|&k| self.players.get(k).map(|p| (k, p)))
    }

    /// Reorders `players_order` by descending `message_count`.
    ///
    /// The sort is stable, so players with equal counts keep their
    /// first-seen relative order.
    pub fn sort_players_by_message_count(&mut self) {
        let players = &self.players;
        self.players_order
            .sort_by_key(|&k| std::cmp::Reverse(players.get(k).map_or(0, |p| p.message_count)));
    }

    /// Derives the "winner" label for this log.
    ///
    /// # Behavior
    /// - No entries at all → [`Winner::NoData`].
    /// - The last entry's message contains `"Victory"` → [`Winner::Victory`],
    ///   regardless of message counts.
    /// - Otherwise the player with the highest `message_count` wins; ties go
    ///   to the first-seen player. No stats at all → [`Winner::MatchComplete`].
    pub fn winner(&self) -> Winner {
        let Some(last) = self.entries.last() else {
            return Winner::NoData;
        };
        if last.message.contains("Victory") {
            return Winner::Victory;
        }

        // Strict > keeps the earliest player on ties, independent of sort state
        let mut best: Option<&PlayerStat> = None;
        for (_, stat) in self.iter_players() {
            match best {
                Some(b) if stat.message_count <= b.message_count => {}
                _ => best = Some(stat),
            }
        }
        match best {
            Some(stat) => Winner::MostActive(stat.name.clone()),
            None => Winner::MatchComplete,
        }
    }

    /// Resets the log to its default (empty) state.
    pub fn clear(&mut self) {
        self.entries = Vec::default();
        self.players = SlotMap::default();
        self.players_order = Vec::default();
        self.skipped_lines = 0;
        self.player_key_by_name = HashMap::default();
    }
}

/// Outcome of [`ChatLog::winner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    /// The log holds no entries.
    NoData,
    /// The last message announced a victory.
    Victory,
    /// The most active player by message count (ties: first seen).
    MostActive(String),
    /// Entries exist but no valid player ever got a stat record.
    MatchComplete,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::NoData => write!(f, "No data available"),
            Winner::Victory => write!(f, "Victory Achieved!"),
            Winner::MostActive(name) => write!(f, "{}", name),
            Winner::MatchComplete => write!(f, "Match Complete"),
        }
    }
}
