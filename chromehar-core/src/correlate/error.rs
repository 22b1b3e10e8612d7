use crate::event::{EventMethod, RequestId};
use thiserror::Error;

/// Protocol ordering violations found while correlating.
#[derive(Debug, Error, PartialEq)]
pub enum CorrelationError {
    #[error("entry already exists for request \"{request_id}\" (position {position})")]
    DuplicateRequest {
        request_id: RequestId,
        position: usize,
    },

    #[error("redirect for request \"{request_id}\" has no initial request (position {position})")]
    OrphanRedirect {
        request_id: RequestId,
        position: usize,
    },

    #[error("missing entry for request \"{request_id}\" on {method} (position {position})")]
    UnknownRequest {
        method: EventMethod,
        request_id: RequestId,
        position: usize,
    },

    #[error("already processed {method} for request \"{request_id}\" (position {position})")]
    DuplicateEvent {
        method: EventMethod,
        request_id: RequestId,
        position: usize,
    },

    #[error("already processed {method} (position {position})")]
    DuplicatePageEvent { method: EventMethod, position: usize },
}

impl CorrelationError {
    pub fn request_id(&self) -> Option<&RequestId> {
        match self {
            Self::DuplicateRequest { request_id, .. }
            | Self::OrphanRedirect { request_id, .. }
            | Self::UnknownRequest { request_id, .. }
            | Self::DuplicateEvent { request_id, .. } => Some(request_id),
            Self::DuplicatePageEvent { .. } => None,
        }
    }
}
