//! Thread reconciliation for a contact's outreach history.
//!
//! The functions here are pure: they read the two histories they are given
//! and return a fresh [`ThreadState`]. Callers re-run [`reconcile`] whenever
//! either history changes.

pub mod entry;
pub mod error;
pub mod reconciler;
pub mod reply;
pub mod subject;
pub mod timestamp;

pub use entry::{ConversationEntry, MessageKind, ReceivedMessage, SentMessage};
pub use error::DataIntegrityError;
pub use reconciler::{reconcile, ThreadState};
pub use reply::{OutboundReply, ReplyHeaders};
pub use subject::{derive_reply_subject, strip_reply_prefixes};
pub use timestamp::parse_timestamp;
