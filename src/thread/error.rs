use log::warn;
use thiserror::Error;

use super::entry::MessageKind;

/// A stored message carries a timestamp that cannot be read as an instant.
///
/// Reconciliation refuses to guess: dropping the record would silently move
/// the "last message" used for reply threading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Data integrity error: {kind} message '{id}' has malformed {field} timestamp {value:?}")]
pub struct DataIntegrityError {
    pub kind: MessageKind,
    pub id: String,
    pub field: &'static str,
    pub value: String,
}

impl DataIntegrityError {
    pub fn malformed_timestamp(kind: MessageKind, id: &str, value: &str) -> Self {
        warn!("Rejecting {} message {} with malformed timestamp {:?}", kind, id, value);
        Self {
            kind,
            id: id.to_string(),
            field: kind.timestamp_field(),
            value: value.to_string(),
        }
    }
}
