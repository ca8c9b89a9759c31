// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Message records and the merged conversation entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::DataIntegrityError;
use super::timestamp::parse_timestamp;

/// Direction of a message relative to the outreach team.
///
/// The declaration order doubles as the tie-break order when two entries
/// share a timestamp: `Sent` sorts before `Received`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Sent,
    Received,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Sent => "sent",
            MessageKind::Received => "received",
        }
    }

    /// Name of the timestamp field for this kind of record.
    pub fn timestamp_field(&self) -> &'static str {
        match self {
            MessageKind::Sent => "sentAt",
            MessageKind::Received => "receivedAt",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound pitch email as recorded by the send collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub id: String,
    pub sent_at: String,
    pub subject: String,
    pub body: String,
    pub message_id: Option<String>,
    pub attachment_names: Vec<String>,
}

/// An inbound reply as recorded by the reply poller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub id: String,
    pub received_at: String,
    pub subject: String,
    pub body: String,
    pub sender_email: String,
    pub message_id: Option<String>,
}

/// One row of the merged conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntry {
    pub kind: MessageKind,
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub subject: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_email: Option<String>,
    pub message_id: Option<String>,
    pub attachment_names: Vec<String>,
}

impl ConversationEntry {
    pub fn from_sent(message: &SentMessage) -> Result<Self, DataIntegrityError> {
        let timestamp = resolve_timestamp(MessageKind::Sent, &message.id, &message.sent_at)?;

        Ok(Self {
            kind: MessageKind::Sent,
            id: message.id.clone(),
            timestamp,
            subject: message.subject.clone(),
            body: message.body.clone(),
            sender_email: None,
            message_id: present_message_id(message.message_id.as_deref()),
            attachment_names: message.attachment_names.clone(),
        })
    }

    pub fn from_received(message: &ReceivedMessage) -> Result<Self, DataIntegrityError> {
        let timestamp = resolve_timestamp(MessageKind::Received, &message.id, &message.received_at)?;

        Ok(Self {
            kind: MessageKind::Received,
            id: message.id.clone(),
            timestamp,
            subject: message.subject.clone(),
            body: message.body.clone(),
            sender_email: Some(message.sender_email.clone()),
            message_id: present_message_id(message.message_id.as_deref()),
            attachment_names: Vec::new(),
        })
    }

    pub fn is_sent(&self) -> bool {
        self.kind == MessageKind::Sent
    }

    pub fn is_received(&self) -> bool {
        self.kind == MessageKind::Received
    }
}

fn resolve_timestamp(kind: MessageKind, id: &str, raw: &str) -> Result<DateTime<Utc>, DataIntegrityError> {
    parse_timestamp(raw).ok_or_else(|| DataIntegrityError::malformed_timestamp(kind, id, raw))
}

// A blank Message-ID cannot be referenced by In-Reply-To.
fn present_message_id(message_id: Option<&str>) -> Option<String> {
    message_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
