use serde::{Deserialize, Serialize};

use crate::types::{CheckKind, MessageKey};

/// a single rejection produced by one check
///
/// Checks are pure and only describe rejections as events; the validator
/// folds the concatenated event list into the loan afterwards, so the
/// message ordering always matches the fixed check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionEvent {
    pub check: CheckKind,
    pub message_key: MessageKey,
}

impl RejectionEvent {
    pub fn new(check: CheckKind, message_key: MessageKey) -> Self {
        Self { check, message_key }
    }
}
