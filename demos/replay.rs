use std::time::Duration;

use gamelog_tools::chat::parse;
use gamelog_tools::playback::{filter, sequence};
use gamelog_tools::{ChatLog, Clock, Playback};

fn main() {
    env_logger::init();

    let log_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "match.log".to_string());

    match parse::from_file(&log_path) {
        Ok(log) => {
            println!("Entries: {}", log.entries.len());
            println!("Skipped lines: {}", log.skipped_lines);
            println!("Winner: {}", log.winner());
            println!();

            println!("Leaderboard:");
            for (_, stat) in log.iter_players() {
                println!(
                    "\t{}: {} messages, {} kills, {} deaths{}",
                    stat.name,
                    stat.message_count,
                    stat.kills,
                    stat.deaths,
                    match stat.accuracy {
                        Some(acc) => format!(", {:.1} % accuracy", acc),
                        None => String::new(),
                    }
                );
            }
            println!();

            replay(&log);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

// Reveal the whole log, one entry every 200 ms
fn replay(log: &ChatLog) {
    let entries = filter::by_players(&log.entries, &[]);
    let mut playback = Playback::new(entries.len(), Duration::from_millis(200));
    playback.start();

    let mut clock = sequence::SystemClock;
    while let Some(delay) = playback.next_delay() {
        clock.sleep(delay);
        playback.tick();

        let revealed = &entries[playback.cursor() - 1];
        match &revealed.recipient {
            Some(recipient) => println!(
                "[{}] {} -> {}: {}",
                revealed.channel, revealed.sender, recipient, revealed.message
            ),
            None => println!(
                "[{}] {}: {}",
                revealed.channel, revealed.sender, revealed.message
            ),
        }
    }
}
