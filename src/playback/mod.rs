//! # playback
//!
//! Replay helpers for a parsed chat log: player-based filtering of the entry
//! sequence (`playback::filter`) and the timed reveal sequencer
//! (`playback::sequence`). Both operate on immutable entry snapshots; a
//! re-parse replaces the data wholesale, never in place.

pub mod filter;
pub mod sequence;
