pub mod contact;
pub mod view;

pub use contact::{ContactHistory, WireAttachmentNames, WireId, WireReceivedMessage, WireSentMessage};
pub use view::ThreadView;
