//! # gamelog_tools
//!
//! Rust utilities for parsing and replaying **Infantry** chat logs.
//!
//! ## Highlights
//! - **Chat parser**: load tab-delimited chat logs from text or file into a [`ChatLog`].
//! - **Redaction first**: IPs, MACs, emails, Windows paths and invite links are
//!   replaced with placeholder tokens before any line ever reaches the entry list.
//! - **Stable keys**: players use SlotMap keys that remain valid across reordering.
//! - **Ordered iteration**: `ChatLog::iter_players()` respects the order vector;
//!   `sort_players_by_message_count()` ranks the leaderboard.
//! - **Fast lookups**: `get_player_by_name` by exact name, as spelled in the log.
//! - **Playback**: `playback::filter::by_players` and the clock-injected
//!   [`Playback`] sequencer for animated reveal of entries.
//!

#[cfg(feature = "chat")]
pub mod chat;
#[cfg(feature = "playback")]
pub mod playback;
#[doc(hidden)]
pub mod types;

// Top-level re-exports (appear under Crate Items → Structs)
#[doc(inline)]
pub use crate::types::{entry::LogEntry, errors::LogParseError, player::PlayerStat};

#[cfg(feature = "chat")]
#[doc(inline)]
pub use crate::types::chatlog::{ChatLog, PlayerKey, Winner};

#[cfg(feature = "playback")]
#[doc(inline)]
pub use crate::playback::sequence::{Clock, Playback, SystemClock};
