use std::fs::File;
use std::io::Read;

use encoding_rs::WINDOWS_1252;

use crate::chat::support;
use crate::types::{chatlog::ChatLog, errors::LogParseError};

/// Parses raw chat-log text and builds a [`ChatLog`].
///
/// The function first redacts sensitive substrings over the **whole** text
/// (see the redaction list below), then splits on `\n` (a trailing `\r` per
/// line is tolerated), skips blank lines, and parses each remaining line.
/// Every parsed line produces one `LogEntry`; player statistics are derived
/// in the same pass. This operation is pure: no I/O, no side effects beyond
/// the returned value.
///
/// # Line format
/// Fields are separated by literal tab characters:
/// - `channel \t sender \t message` (3 fields), or
/// - `channel \t sender \t recipient \t message...` (4+ fields).
///
/// With 4+ fields the third is only treated as a recipient when it is at
/// most 20 characters long and contains no space; otherwise it is part of
/// the message. This heuristic is inherently ambiguous for short, space-free
/// message heads and is kept as-is for compatibility with existing logs.
///
/// # Redaction
/// Applied before any splitting, in order: IPv4, IPv6, MAC address, email
/// address, Windows drive-letter path, Discord invite link. Each match
/// becomes a placeholder token, so no such substring can reach the entry
/// list. Best-effort pattern matching; false negatives are accepted.
///
/// # Behavior & Invariants
/// - Lines with fewer than 3 tab fields are dropped (debug-logged and
///   counted in `skipped_lines`), never an error.
/// - A channel that is not entirely numeric defaults to `0`; a mixed token
///   like `5abc` is not salvaged to its digit prefix.
/// - `sequence_index` is the loop index over all non-empty lines, including
///   dropped ones, so indices can have gaps but are strictly increasing
///   across the entry list.
/// - Players are sorted by descending `message_count` before returning;
///   ties keep first-seen order.
/// - Empty input yields an empty log (winner reports no data).
///
/// # Complexity
/// - Time: O(N) over the input length (redaction passes plus one line scan).
/// - Space: O(N) for the entries plus O(P) for unique valid players.
pub fn from_text(text: &str) -> ChatLog {
    let cleaned: String = support::sanitize::redact(text);

    let mut log: ChatLog = ChatLog::default();
    let mut index: usize = 0;

    for raw in cleaned.split('\n') {
        let line: &str = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }
        support::line::parse(line, index, &mut log);
        index += 1;
    }

    log.sort_players_by_message_count();
    log::debug!(
        "parsed {} entries, {} players, {} lines skipped",
        log.entries.len(),
        log.players.len(),
        log.skipped_lines
    );
    log
}

/// Reads a chat-log file from disk and builds a [`ChatLog`].
///
/// The file is decoded as Windows-1252 (game clients on Windows routinely
/// emit 1252-encoded logs; decoding is lossy and never aborts the parse) and
/// the resulting text is handed to [`from_text`].
///
/// # Parameters
/// - `path`: Path to the log file. Must end with `.log` or `.txt`.
///
/// # Returns
/// - `Ok(ChatLog)` on success.
/// - `Err(LogParseError)` detailing why the file could not be opened or read.
///
/// # Errors
/// Returns an `Err(LogParseError)` if:
/// - The path does not end in `.log` or `.txt`.
/// - The file cannot be opened.
/// - There are I/O errors while reading.
pub fn from_file(path: &str) -> Result<ChatLog, LogParseError> {
    // check if provided file has a known log extension
    if !path.ends_with(".log") && !path.ends_with(".txt") {
        return Err(LogParseError::InvalidExtension {
            path: path.to_string(),
        });
    }

    let mut file: File = File::open(path).map_err(|source| LogParseError::OpenFile {
        path: path.to_string(),
        source,
    })?;

    let mut bytes: Vec<u8> = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| LogParseError::Read {
            path: path.to_string(),
            source,
        })?;

    let (text, _, _) = WINDOWS_1252.decode(&bytes);
    Ok(from_text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::chatlog::Winner;

    // ------------------------
    // Fixtures
    // ------------------------

    fn well_formed_block() -> String {
        [
            "0\tAlice\thello everyone",
            "2\tBob\thi Alice",
            "0\tAlice\tanyone up for a private?",
            "9\tBob\tAlice\tpsst",
            "0\tCarol\tGreetings",
        ]
        .join("\n")
    }

    // ------------------------
    // Parsing
    // ------------------------

    #[test]
    fn empty_input_yields_empty_log() {
        let log: ChatLog = from_text("");
        assert!(log.entries.is_empty());
        assert!(log.players.is_empty());
        assert_eq!(log.winner(), Winner::NoData);
    }

    #[test]
    fn entry_count_and_ordering_match_input() {
        let log: ChatLog = from_text(&well_formed_block());
        assert_eq!(log.entries.len(), 5);
        for pair in log.entries.windows(2) {
            assert!(pair[0].sequence_index < pair[1].sequence_index);
        }
    }

    #[test]
    fn crlf_and_blank_lines_are_tolerated() {
        let log: ChatLog = from_text("0\tAlice\thello\r\n\r\n\n2\tBob\thi\r\n");
        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].message, "hello");
        assert_eq!(log.entries[1].message, "hi");
    }

    #[test]
    fn malformed_lines_are_dropped_without_error() {
        let mut text: String = well_formed_block();
        for _ in 0..3 {
            text.push_str("\nno tabs here");
            text.push_str("\nonly\tone");
        }
        let log: ChatLog = from_text(&text);
        assert_eq!(log.entries.len(), 5);
        assert_eq!(log.skipped_lines, 6);
    }

    #[test]
    fn stats_are_sorted_by_message_count_desc() {
        let log: ChatLog = from_text(&well_formed_block());
        let counts: Vec<u64> = log.iter_players().map(|(_, p)| p.message_count).collect();
        let mut sorted: Vec<u64> = counts.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(counts, sorted);
        // Alice leads with two sent messages
        let (_, top) = log.iter_players().next().expect("players exist");
        assert_eq!(top.name, "Alice");
        assert_eq!(top.message_count, 2);
    }

    #[test]
    fn message_count_matches_sender_occurrences() {
        let log: ChatLog = from_text(&well_formed_block());
        for (_, stat) in log.iter_players() {
            let sent: u64 = log
                .entries
                .iter()
                .filter(|e| e.sender == stat.name)
                .count() as u64;
            assert_eq!(stat.message_count, sent, "invariant broken for {}", stat.name);
        }
    }

    #[test]
    fn message_count_invariant_holds_for_mixed_case_senders() {
        // "Alice" and "ALICE" are two different players with one message each
        let log: ChatLog = from_text("0\tAlice\thi\n0\tALICE\tyo");
        assert_eq!(log.players.len(), 2);
        for (_, stat) in log.iter_players() {
            let sent: u64 = log
                .entries
                .iter()
                .filter(|e| e.sender == stat.name)
                .count() as u64;
            assert_eq!(stat.message_count, sent, "invariant broken for {}", stat.name);
            assert_eq!(stat.message_count, 1);
        }
    }

    #[test]
    fn filtered_sender_keeps_entry_but_gets_no_stat() {
        let log: ChatLog = from_text("0\tSystemBot\thello");
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].sender, "SystemBot");
        assert!(log.get_player_by_name("SystemBot").is_none());
    }

    #[test]
    fn kill_and_death_are_credited_across_lines() {
        let text = [
            "0\tAlice\twarming up",
            "0\tBob\tready",
            "0\tAlice\tBob(5) killed by Alice",
        ]
        .join("\n");
        let log: ChatLog = from_text(&text);
        assert_eq!(log.get_player_by_name("Alice").unwrap().kills, 1);
        assert_eq!(log.get_player_by_name("Bob").unwrap().deaths, 1);
    }

    #[test]
    fn redaction_happens_before_entries_exist() {
        let text = "0\tAlice\tconnect 192.168.1.1 aa:bb:cc:dd:ee:ff user@example.com";
        let log: ChatLog = from_text(text);
        let message: &str = &log.entries[0].message;
        assert!(!message.contains("192.168.1.1"));
        assert!(!message.contains("aa:bb:cc:dd:ee:ff"));
        assert!(!message.contains("user@example.com"));
    }

    #[test]
    fn victory_in_last_message_decides_winner() {
        let mut text: String = well_formed_block();
        text.push_str("\n0\tCarol\tTitan Victory!");
        let log: ChatLog = from_text(&text);
        assert_eq!(log.winner(), Winner::Victory);
    }

    // ------------------------
    // File entry point
    // ------------------------

    #[test]
    fn rejects_unknown_extension() {
        let err = from_file("match.csv").expect_err("extension must be rejected");
        assert!(matches!(err, LogParseError::InvalidExtension { .. }));
    }

    #[test]
    fn missing_file_maps_to_open_error() {
        let err = from_file("definitely-not-here.log").expect_err("file is absent");
        assert!(matches!(err, LogParseError::OpenFile { .. }));
    }

    #[test]
    fn reads_windows_1252_bytes() {
        use std::io::Write;

        let dir = std::env::temp_dir();
        let path = dir.join("gamelog_tools_1252.log");
        {
            let mut f = File::create(&path).expect("temp file");
            // 0xE9 is 'é' in Windows-1252, invalid as standalone UTF-8
            f.write_all(b"0\tRen\xe9e\tbonjour\n").expect("write");
        }
        let log: ChatLog = from_file(path.to_str().expect("utf-8 path")).expect("parses");
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].sender, "Renée");
        let _ = std::fs::remove_file(&path);
    }
}
