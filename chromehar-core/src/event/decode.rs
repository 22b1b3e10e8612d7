use crate::envelope::RawEvent;
use crate::event::method::EventMethod;
use crate::event::types::{
    DataReceived, LoadingFinished, PageTimestamp, RequestId, RequestWillBeSent, ResponseReceived,
};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    RequestWillBeSent(RequestWillBeSent),
    ResponseReceived(ResponseReceived),
    DataReceived(DataReceived),
    LoadingFinished(LoadingFinished),
    DomContentEventFired(PageTimestamp),
    LoadEventFired(PageTimestamp),
}

impl Event {
    pub fn method(&self) -> EventMethod {
        match self {
            Self::RequestWillBeSent(_) => EventMethod::RequestWillBeSent,
            Self::ResponseReceived(_) => EventMethod::ResponseReceived,
            Self::DataReceived(_) => EventMethod::DataReceived,
            Self::LoadingFinished(_) => EventMethod::LoadingFinished,
            Self::DomContentEventFired(_) => EventMethod::DomContentEventFired,
            Self::LoadEventFired(_) => EventMethod::LoadEventFired,
        }
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        match self {
            Self::RequestWillBeSent(e) => Some(&e.request_id),
            Self::ResponseReceived(e) => Some(&e.request_id),
            Self::DataReceived(e) => Some(&e.request_id),
            Self::LoadingFinished(e) => Some(&e.request_id),
            Self::DomContentEventFired(_) | Self::LoadEventFired(_) => None,
        }
    }
}

/// A decoded event and its position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencedEvent {
    pub position: usize,
    pub event: Event,
}

#[derive(Debug, Error)]
#[error("failed to unmarshal {method} data at position {position}{}: {source}", for_request(.request_id))]
pub struct DecodeError {
    pub method: EventMethod,
    pub request_id: Option<String>,
    pub position: usize,
    #[source]
    pub source: serde_json::Error,
}

fn for_request(request_id: &Option<String>) -> String {
    match request_id {
        Some(id) => format!(" for request \"{id}\""),
        None => String::new(),
    }
}

/// Decodes one raw event.
///
/// Returns `Ok(None)` for methods that play no part in network reconstruction.
pub fn decode_event(raw: &RawEvent) -> Result<Option<SequencedEvent>, DecodeError> {
    let Some(method) = EventMethod::from_name(&raw.method) else {
        return Ok(None);
    };

    let event = match method {
        EventMethod::RequestWillBeSent => Event::RequestWillBeSent(parse(method, raw)?),
        EventMethod::ResponseReceived => Event::ResponseReceived(parse(method, raw)?),
        EventMethod::DataReceived => Event::DataReceived(parse(method, raw)?),
        EventMethod::LoadingFinished => Event::LoadingFinished(parse(method, raw)?),
        EventMethod::DomContentEventFired => Event::DomContentEventFired(parse(method, raw)?),
        EventMethod::LoadEventFired => Event::LoadEventFired(parse(method, raw)?),
    };

    tracing::trace!(method = %method, position = raw.position, "decoded event");

    Ok(Some(SequencedEvent {
        position: raw.position,
        event,
    }))
}

/// Decodes every known event, dropping the rest. Fails on the first bad payload.
pub fn decode_events(raw: &[RawEvent]) -> Result<Vec<SequencedEvent>, DecodeError> {
    let mut events = Vec::with_capacity(raw.len());
    for r in raw {
        if let Some(event) = decode_event(r)? {
            events.push(event);
        }
    }

    tracing::debug!(
        raw = raw.len(),
        decoded = events.len(),
        "decoded network and page events"
    );

    Ok(events)
}

fn parse<'a, T: Deserialize<'a>>(method: EventMethod, raw: &'a RawEvent) -> Result<T, DecodeError> {
    T::deserialize(&raw.params).map_err(|source| DecodeError {
        method,
        request_id: raw
            .params
            .get("requestId")
            .and_then(Value::as_str)
            .map(str::to_string),
        position: raw.position,
        source,
    })
}
