// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contact history as served by the backend.
//!
//! The backend has shipped both snake_case and camelCase field names, integer
//! and string ids, and attachment names as either a list or a single
//! comma-separated string. The Java backend embeds messages without any id
//! at all; those take their position in the list. All of that is absorbed
//! here so the thread core only ever sees [`SentMessage`] and
//! [`ReceivedMessage`].

use serde::{Deserialize, Deserializer};

use crate::thread::{self, DataIntegrityError, ReceivedMessage, SentMessage, ThreadState};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(text) => text,
            WireId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireAttachmentNames {
    List(Vec<String>),
    Joined(String),
}

impl WireAttachmentNames {
    pub fn into_names(self) -> Vec<String> {
        let names: Vec<String> = match self {
            WireAttachmentNames::List(names) => names,
            WireAttachmentNames::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };
        names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSentMessage {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default, alias = "sent_at")]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, alias = "message_id")]
    pub message_id: Option<String>,
    #[serde(default, alias = "attachment_names")]
    pub attachment_names: Option<WireAttachmentNames>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireReceivedMessage {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default, alias = "received_at")]
    pub received_at: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, alias = "sender_email", alias = "fromEmail")]
    pub sender_email: Option<String>,
    #[serde(default, alias = "message_id")]
    pub message_id: Option<String>,
}

fn record_id(id: Option<WireId>, index: usize) -> String {
    id.map(String::from).unwrap_or_else(|| index.to_string())
}

// A missing timestamp becomes an empty string so reconciliation reports it
// instead of the record vanishing here.
impl WireSentMessage {
    /// Normalize into the core type. `index` is the record's position in its
    /// list and stands in for a missing id.
    pub fn into_message(self, index: usize) -> SentMessage {
        SentMessage {
            id: record_id(self.id, index),
            sent_at: self.sent_at.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            message_id: self.message_id,
            attachment_names: self
                .attachment_names
                .map(WireAttachmentNames::into_names)
                .unwrap_or_default(),
        }
    }
}

impl WireReceivedMessage {
    pub fn into_message(self, index: usize) -> ReceivedMessage {
        ReceivedMessage {
            id: record_id(self.id, index),
            received_at: self.received_at.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            sender_email: self.sender_email.unwrap_or_default(),
            message_id: self.message_id,
        }
    }
}

/// Everything the dashboard knows about one contact's conversation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactHistory {
    #[serde(default, alias = "contact_id", alias = "id")]
    pub contact_id: Option<WireId>,
    /// The contact's own address, used as the default reply recipient.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "sent_emails", alias = "sentEmails", deserialize_with = "null_as_empty")]
    pub sent: Vec<WireSentMessage>,
    #[serde(default, alias = "replies", deserialize_with = "null_as_empty")]
    pub received: Vec<WireReceivedMessage>,
}

impl ContactHistory {
    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, wire)| wire.into_message(index))
            .collect()
    }

    pub fn received_messages(&self) -> Vec<ReceivedMessage> {
        self.received
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, wire)| wire.into_message(index))
            .collect()
    }

    pub fn reconcile(&self) -> Result<ThreadState, DataIntegrityError> {
        thread::reconcile(&self.sent_messages(), &self.received_messages())
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|email| !email.is_empty())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
