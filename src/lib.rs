//! Library core for placement-pitcher.

// --- Modules ---
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod thread;

pub mod prelude {
    // Config
    pub use crate::config::Settings;

    // Errors
    pub use crate::error::PitcherError;
    pub use crate::thread::DataIntegrityError;

    // Thread reconciliation
    pub use crate::models::{ContactHistory, ThreadView};
    pub use crate::thread::{
        derive_reply_subject, reconcile, ConversationEntry, MessageKind, OutboundReply,
        ReceivedMessage, ReplyHeaders, SentMessage, ThreadState,
    };

    // Common Libs
    pub use log::{debug, error, info, trace, warn};
}
