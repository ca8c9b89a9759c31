// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Merges a contact's sent and received histories into one conversation.

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use super::entry::{ConversationEntry, ReceivedMessage, SentMessage};
use super::error::DataIntegrityError;
use super::reply::OutboundReply;
use super::subject::derive_reply_subject;

/// The derived view of one contact's conversation. Rebuilt on every call to
/// [`reconcile`], never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadState {
    pub ordered_entries: Vec<ConversationEntry>,
    pub reply_anchor_message_id: Option<String>,
    pub has_unreplied_inbound: bool,
}

/// Merge both histories into a chronological thread.
///
/// Entries are ordered by timestamp; a sent and a received entry with the
/// same timestamp keep the sent one first. The reply anchor is the
/// Message-ID of the latest entry that has one. Fails without a partial
/// result if any timestamp is malformed.
pub fn reconcile(
    sent: &[SentMessage],
    received: &[ReceivedMessage],
) -> Result<ThreadState, DataIntegrityError> {
    let mut entries = Vec::with_capacity(sent.len() + received.len());
    for message in sent {
        entries.push(ConversationEntry::from_sent(message)?);
    }
    for message in received {
        entries.push(ConversationEntry::from_received(message)?);
    }

    // sort_by is stable, so equal (timestamp, kind) pairs keep input order
    entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.kind.cmp(&b.kind)));

    let reply_anchor_message_id = entries
        .iter()
        .rev()
        .find_map(|entry| entry.message_id.clone());
    let has_unreplied_inbound = unreplied(&entries).next().is_some();

    debug!(
        "Reconciled thread: {} sent, {} received, anchor {}, unreplied inbound: {}",
        sent.len(),
        received.len(),
        if reply_anchor_message_id.is_some() { "present" } else { "absent" },
        has_unreplied_inbound
    );

    Ok(ThreadState {
        ordered_entries: entries,
        reply_anchor_message_id,
        has_unreplied_inbound,
    })
}

fn last_sent_at(entries: &[ConversationEntry]) -> Option<DateTime<Utc>> {
    entries
        .iter()
        .rev()
        .find(|entry| entry.is_sent())
        .map(|entry| entry.timestamp)
}

// Received entries newer than the latest outbound message. With nothing
// sent yet every reply counts.
fn unreplied(entries: &[ConversationEntry]) -> impl Iterator<Item = &ConversationEntry> {
    let last_sent = last_sent_at(entries);
    entries.iter().filter(move |entry| {
        entry.is_received() && last_sent.map_or(true, |sent_at| entry.timestamp > sent_at)
    })
}

impl ThreadState {
    pub fn is_empty(&self) -> bool {
        self.ordered_entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ordered_entries.len()
    }

    pub fn last_entry(&self) -> Option<&ConversationEntry> {
        self.ordered_entries.last()
    }

    /// Replies that arrived after the latest outbound message, oldest first.
    /// The dashboard shows one badge per entry.
    pub fn unreplied_inbound(&self) -> Vec<&ConversationEntry> {
        unreplied(&self.ordered_entries).collect()
    }

    pub fn reply_subject(&self, fallback_subject: &str) -> String {
        derive_reply_subject(&self.ordered_entries, fallback_subject)
    }

    /// Compose the next outbound message for this thread.
    pub fn draft_reply(
        &self,
        to: impl Into<String>,
        body: impl Into<String>,
        fallback_subject: &str,
    ) -> OutboundReply {
        OutboundReply::new(
            to,
            self.reply_subject(fallback_subject),
            body,
            self.reply_anchor_message_id.clone(),
        )
    }
}
