use regex::Regex;

use super::entry::ConversationEntry;

const REPLY_PREFIX: &str = "Re: ";

/// Remove every leading "Re:" marker, in any letter case, along with the
/// whitespace around them.
pub fn strip_reply_prefixes(subject: &str) -> &str {
    lazy_static::lazy_static! {
        static ref LEADING_RE: Regex = Regex::new(r"(?i)^\s*(?:re:\s*)+").unwrap();
    }

    match LEADING_RE.find(subject) {
        Some(prefix) => &subject[prefix.end()..],
        None => subject.trim_start(),
    }
}

/// Subject for the next message in a thread.
///
/// Replies to the latest entry's subject with exactly one "Re: ". An empty
/// thread has nothing to reply to, so `fallback_subject` is returned as is.
pub fn derive_reply_subject(ordered_entries: &[ConversationEntry], fallback_subject: &str) -> String {
    match ordered_entries.last() {
        Some(last) => format!("{}{}", REPLY_PREFIX, strip_reply_prefixes(&last.subject)),
        None => fallback_subject.to_string(),
    }
}
