//! End-to-end HAR construction.
//!
//! ```text
//! raw records
//! decode_events
//! SequencedEvent
//! RequestCorrelator / correlate_page
//! build_entry
//! assemble_report
//! Har
//! ```

use crate::HarError;
use crate::config::{EntryErrorPolicy, HarConfig};
use crate::correlate::{RequestCorrelator, correlate_page};
use crate::envelope::{RawEvent, decode_log};
use crate::event::decode_events;
use crate::har::{Creator, Har, assemble_report, build_entry, build_page};

pub fn build_har(raw: &[RawEvent], config: &HarConfig) -> Result<Har, HarError> {
    let events = decode_events(raw)?;

    let page = correlate_page(&events)?;
    let requests = RequestCorrelator::correlate(&events)?;
    let request_count = requests.len();

    let completed = requests.into_completed();
    let mut entries = Vec::with_capacity(completed.len());
    for request in &completed {
        match build_entry(request) {
            Ok(entry) => entries.push(entry),
            Err(e) if config.entries.on_error == EntryErrorPolicy::Skip => {
                tracing::warn!(
                    request_id = %e.request_id(),
                    error = %e,
                    "skipping HAR entry"
                );
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!(
        events = events.len(),
        requests = request_count,
        completed = completed.len(),
        entries = entries.len(),
        "built HAR"
    );

    let page = build_page(&page, &config.page.id);
    Ok(assemble_report(
        page,
        entries,
        Creator::from(&config.creator),
    ))
}

/// Builds a HAR straight from a performance log document.
pub fn from_log_str(input: &str, config: &HarConfig) -> Result<Har, HarError> {
    let raw = decode_log(input)?;
    build_har(&raw, config)
}
