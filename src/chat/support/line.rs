use crate::chat::support::stats;
use crate::types::{chatlog::ChatLog, entry::LogEntry};

// Example:
// 0<TAB>Melantho<TAB>anyone up for a private?
// 5<TAB>Melantho<TAB>Colossal<TAB>nice caps
pub(crate) fn parse(line: &str, index: usize, log: &mut ChatLog) {
    // split line by literal tab characters
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 3 {
        log::debug!(
            "skipped malformed line {} ({} parts): {:?}",
            index,
            parts.len(),
            line.chars().take(50).collect::<String>()
        );
        log.skipped_lines += 1;
        return;
    }

    // channel must be entirely numeric; anything else falls back to the
    // default channel (no digit-prefix salvage: "5abc" is 0, not 5)
    let channel: u32 = parts[0].trim().parse().unwrap_or(0);
    let sender: String = parts[1].trim().to_string();

    // Handle different formats:
    // Format 1: channel \t sender \t message (3 parts)
    // Format 2: channel \t sender \t recipient \t message (4+ parts)
    let (recipient, message): (Option<String>, String) = if parts.len() == 3 {
        (None, parts[2].to_string())
    } else {
        let candidate: &str = parts[2].trim();
        if candidate.len() > 20 || candidate.contains(' ') {
            // too long or spaced: part of the message, not an addressee
            (None, parts[2..].join("\t"))
        } else {
            let recipient: Option<String> =
                (!candidate.is_empty()).then(|| candidate.to_string());
            (recipient, parts[3..].join("\t"))
        }
    };

    stats::record(log, &sender, recipient.as_deref(), &message);

    log.entries.push(LogEntry {
        channel,
        sender,
        recipient,
        message,
        sequence_index: index,
    });
}
