// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The hand-off to the send collaborator: subject, body, recipient and the
//! threading headers derived from the reply anchor.

use lettre::message::{header::ContentType, Mailbox};
use lettre::Message;
use serde::Serialize;

use crate::error::PitcherError;

/// Threading headers for an outbound message. Both are set to the reply
/// anchor, or both are absent and the message starts a new thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyHeaders {
    pub in_reply_to: Option<String>,
    pub references: Option<String>,
}

impl ReplyHeaders {
    pub fn from_anchor(anchor: Option<&str>) -> Self {
        match anchor.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => Self {
                in_reply_to: Some(id.to_string()),
                references: Some(id.to_string()),
            },
            None => Self::default(),
        }
    }

    pub fn is_threaded(&self) -> bool {
        self.in_reply_to.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundReply {
    pub to: String,
    pub subject: String,
    pub body: String,
    #[serde(flatten)]
    pub headers: ReplyHeaders,
}

impl OutboundReply {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        anchor: Option<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            headers: ReplyHeaders::from_anchor(anchor.as_deref()),
        }
    }

    pub fn recipient_mailbox(&self) -> Result<Mailbox, PitcherError> {
        Ok(self.to.parse()?)
    }

    /// Build the RFC 5322 message handed to the SMTP transport.
    pub fn to_message(&self, from: &str) -> Result<Message, PitcherError> {
        let from_mailbox: Mailbox = from.parse()?;
        let to_mailbox = self.recipient_mailbox()?;

        let mut builder = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(self.subject.as_str());

        if let Some(in_reply_to) = &self.headers.in_reply_to {
            builder = builder.in_reply_to(in_reply_to.clone());
        }
        if let Some(references) = &self.headers.references {
            builder = builder.references(references.clone());
        }

        let message = builder
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone())?;
        Ok(message)
    }
}
