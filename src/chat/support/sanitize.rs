//! Redaction of sensitive substrings.
//!
//! Runs over the whole raw text **before** any line splitting, so no raw
//! IP/MAC/email/path/invite-link substring can reach the entry list or the
//! rendered output. Pattern-based and best-effort: a false negative slips
//! through, a false positive only costs a placeholder token.

use regex::Regex;
use std::sync::LazyLock;

// Patterns are applied in this order; each hit becomes its placeholder token.
// Placeholders contain no digits, '@', ':' or '\', so a second pass is a no-op.
static IPV4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").expect("regex compiles"));
static IPV6: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b").expect("regex compiles")
});
static MAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[0-9a-fA-F]{2}[:-]){5}[0-9a-fA-F]{2}\b").expect("regex compiles")
});
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("regex compiles")
});
static WIN_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[C-Z]:\\[^\\:*?"<>|]*\\[^\\:*?"<>|]*"#).expect("regex compiles")
});
static DISCORD_INVITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://discord\.gg/[a-zA-Z0-9]+").expect("regex compiles"));

/// Replaces sensitive-looking substrings with placeholder tokens.
///
/// Applied redactions, in order: IPv4, IPv6, MAC address, email address,
/// Windows drive-letter path, Discord invite link. Idempotent: redacting
/// already-redacted text changes nothing.
pub(crate) fn redact(text: &str) -> String {
    let text: String = IPV4.replace_all(text, "[IP_REDACTED]").into_owned();
    let text: String = IPV6.replace_all(&text, "[IPV6_REDACTED]").into_owned();
    let text: String = MAC.replace_all(&text, "[MAC_REDACTED]").into_owned();
    let text: String = EMAIL.replace_all(&text, "[EMAIL_REDACTED]").into_owned();
    let text: String = WIN_PATH.replace_all(&text, "[PATH_REDACTED]").into_owned();
    DISCORD_INVITE
        .replace_all(&text, "[DISCORD_LINK_REDACTED]")
        .into_owned()
}
