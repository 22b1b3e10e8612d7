use crate::correlate::CorrelationError;
use crate::envelope::EnvelopeError;
use crate::event::DecodeError;
use crate::har::EntryError;
use thiserror::Error;

/// Everything that can abort a HAR build.
///
/// None of these are retryable: the input is a finished capture, so the same
/// input fails the same way every time.
#[derive(Debug, Error)]
pub enum HarError {
    #[error("failed to create chrome log entries: {source}")]
    Envelope {
        #[from]
        source: EnvelopeError,
    },

    #[error("failed to decode events: {source}")]
    Decode {
        #[from]
        source: DecodeError,
    },

    #[error("failed to correlate events: {source}")]
    Correlation {
        #[from]
        source: CorrelationError,
    },

    #[error("failed to create HAR entries: {source}")]
    Entry {
        #[from]
        source: EntryError,
    },
}
