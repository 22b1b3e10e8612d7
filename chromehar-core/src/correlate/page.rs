use crate::correlate::CorrelationError;
use crate::event::{Event, EventMethod, PageTimestamp, RequestWillBeSent, SequencedEvent};

/// Page-level facts of a capture. One per scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageAggregate<'a> {
    first_request: Option<&'a RequestWillBeSent>,
    dom_content_event_fired: Option<&'a PageTimestamp>,
    load_event_fired: Option<&'a PageTimestamp>,
}

impl<'a> PageAggregate<'a> {
    pub fn first_request(&self) -> Option<&'a RequestWillBeSent> {
        self.first_request
    }

    /// Originating document of the first request seen.
    pub fn document_url(&self) -> Option<&'a str> {
        self.first_request.map(|r| r.document_url.as_str())
    }

    pub fn on_content_load(&self) -> Option<f64> {
        self.dom_content_event_fired.map(|e| e.timestamp)
    }

    pub fn on_load(&self) -> Option<f64> {
        self.load_event_fired.map(|e| e.timestamp)
    }
}

pub fn correlate_page(events: &[SequencedEvent]) -> Result<PageAggregate<'_>, CorrelationError> {
    let mut page = PageAggregate::default();

    for event in events {
        match &event.event {
            Event::RequestWillBeSent(e) => {
                page.first_request.get_or_insert(e);
            }
            Event::DomContentEventFired(e) => record_once(
                &mut page.dom_content_event_fired,
                e,
                EventMethod::DomContentEventFired,
                event.position,
            )?,
            Event::LoadEventFired(e) => record_once(
                &mut page.load_event_fired,
                e,
                EventMethod::LoadEventFired,
                event.position,
            )?,
            _ => {}
        }
    }

    Ok(page)
}

fn record_once<'a>(
    slot: &mut Option<&'a PageTimestamp>,
    event: &'a PageTimestamp,
    method: EventMethod,
    position: usize,
) -> Result<(), CorrelationError> {
    if slot.is_some() {
        return Err(CorrelationError::DuplicatePageEvent { method, position });
    }
    *slot = Some(event);
    Ok(())
}
