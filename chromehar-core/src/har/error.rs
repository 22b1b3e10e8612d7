use crate::event::RequestId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("failed to parse url \"{url}\" for request \"{request_id}\": {source}")]
    InvalidUrl {
        request_id: RequestId,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to parse redirect url \"{url}\" for request \"{request_id}\": {source}")]
    InvalidRedirectUrl {
        request_id: RequestId,
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl EntryError {
    pub fn request_id(&self) -> &RequestId {
        match self {
            Self::InvalidUrl { request_id, .. } | Self::InvalidRedirectUrl { request_id, .. } => {
                request_id
            }
        }
    }
}
