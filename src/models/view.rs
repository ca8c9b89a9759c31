use serde::Serialize;
use std::fmt;

use crate::thread::{ConversationEntry, MessageKind, ThreadState};

/// The thread as the dashboard renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadView {
    pub ordered_entries: Vec<ConversationEntry>,
    pub reply_anchor_message_id: Option<String>,
    pub has_unreplied_inbound: bool,
    pub unreplied_count: usize,
    pub reply_subject: String,
}

impl ThreadView {
    pub fn new(state: ThreadState, fallback_subject: &str) -> Self {
        let unreplied_count = state.unreplied_inbound().len();
        let reply_subject = state.reply_subject(fallback_subject);

        Self {
            ordered_entries: state.ordered_entries,
            reply_anchor_message_id: state.reply_anchor_message_id,
            has_unreplied_inbound: state.has_unreplied_inbound,
            unreplied_count,
            reply_subject,
        }
    }
}

impl fmt::Display for ThreadView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ordered_entries.is_empty() {
            writeln!(f, "No history found.")?;
        }

        for entry in &self.ordered_entries {
            let (arrow, party) = match entry.kind {
                MessageKind::Sent => ("->", "You"),
                MessageKind::Received => ("<-", entry.sender_email.as_deref().unwrap_or("")),
            };
            write!(
                f,
                "{} {} {:<24} {}",
                arrow,
                entry.timestamp.format("%Y-%m-%d %H:%M UTC"),
                party,
                entry.subject
            )?;
            if !entry.attachment_names.is_empty() {
                write!(f, " [{}]", entry.attachment_names.join(", "))?;
            }
            writeln!(f)?;
        }

        match &self.reply_anchor_message_id {
            Some(anchor) => writeln!(f, "Reply anchor: {}", anchor)?,
            None => writeln!(f, "Reply anchor: none (new thread)")?,
        }
        writeln!(f, "Reply subject: {}", self.reply_subject)?;
        write!(f, "Unreplied replies: {}", self.unreplied_count)
    }
}
