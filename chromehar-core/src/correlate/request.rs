use crate::correlate::CorrelationError;
use crate::event::{
    DataReceived, Event, EventMethod, LoadingFinished, RequestId, RequestWillBeSent,
    ResponseReceived, SequencedEvent,
};
use std::collections::HashMap;

/// Everything seen so far for one request id.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestAggregate<'a> {
    position: usize,
    initial: &'a RequestWillBeSent,
    redirect: Option<&'a RequestWillBeSent>,
    response: Option<&'a ResponseReceived>,
    data_chunks: Vec<&'a DataReceived>,
    finished: Option<&'a LoadingFinished>,
}

impl<'a> RequestAggregate<'a> {
    fn new(position: usize, initial: &'a RequestWillBeSent) -> Self {
        Self {
            position,
            initial,
            redirect: None,
            response: None,
            data_chunks: Vec::new(),
            finished: None,
        }
    }

    pub fn request_id(&self) -> &'a RequestId {
        &self.initial.request_id
    }

    /// Position of the initiation event in the input.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn initial(&self) -> &'a RequestWillBeSent {
        self.initial
    }

    pub fn redirect(&self) -> Option<&'a RequestWillBeSent> {
        self.redirect
    }

    pub fn response(&self) -> Option<&'a ResponseReceived> {
        self.response
    }

    pub fn data_chunks(&self) -> &[&'a DataReceived] {
        &self.data_chunks
    }

    pub fn finished(&self) -> Option<&'a LoadingFinished> {
        self.finished
    }

    /// A request is complete once its loading-finished event arrived.
    pub fn is_complete(&self) -> bool {
        self.finished.is_some()
    }

    pub fn into_completed(self) -> Option<CompletedRequest<'a>> {
        let finished = self.finished?;
        Some(CompletedRequest {
            initial: self.initial,
            redirect: self.redirect,
            response: self.response,
            data_chunks: self.data_chunks,
            finished,
        })
    }
}

/// A request that reached `Network.loadingFinished`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedRequest<'a> {
    pub initial: &'a RequestWillBeSent,
    pub redirect: Option<&'a RequestWillBeSent>,
    /// May be absent for loads that produce no response event.
    pub response: Option<&'a ResponseReceived>,
    pub data_chunks: Vec<&'a DataReceived>,
    pub finished: &'a LoadingFinished,
}

impl CompletedRequest<'_> {
    pub fn request_id(&self) -> &RequestId {
        &self.initial.request_id
    }
}

/// Builds one [`RequestAggregate`] per request id, in initiation order.
#[derive(Debug, Default)]
pub struct RequestCorrelator<'a> {
    aggregates: Vec<RequestAggregate<'a>>,
    index: HashMap<&'a RequestId, usize>,
}

impl<'a> RequestCorrelator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a full scan over `events`.
    pub fn correlate(events: &'a [SequencedEvent]) -> Result<Self, CorrelationError> {
        let mut correlator = Self::new();
        for event in events {
            correlator.push(event)?;
        }
        Ok(correlator)
    }

    pub fn push(&mut self, event: &'a SequencedEvent) -> Result<(), CorrelationError> {
        let position = event.position;

        match &event.event {
            Event::RequestWillBeSent(e) if e.is_redirect() => {
                let Some(&i) = self.index.get(&e.request_id) else {
                    return Err(CorrelationError::OrphanRedirect {
                        request_id: e.request_id.clone(),
                        position,
                    });
                };
                // Only the most recent hop is kept; `initial` stays the first request.
                self.aggregates[i].redirect = Some(e);
            }
            Event::RequestWillBeSent(e) => {
                if self.index.contains_key(&e.request_id) {
                    return Err(CorrelationError::DuplicateRequest {
                        request_id: e.request_id.clone(),
                        position,
                    });
                }
                self.index.insert(&e.request_id, self.aggregates.len());
                self.aggregates.push(RequestAggregate::new(position, e));
            }
            Event::ResponseReceived(e) => {
                let aggregate =
                    self.existing(EventMethod::ResponseReceived, &e.request_id, position)?;
                if aggregate.response.is_some() {
                    return Err(CorrelationError::DuplicateEvent {
                        method: EventMethod::ResponseReceived,
                        request_id: e.request_id.clone(),
                        position,
                    });
                }
                aggregate.response = Some(e);
            }
            Event::DataReceived(e) => {
                self.existing(EventMethod::DataReceived, &e.request_id, position)?
                    .data_chunks
                    .push(e);
            }
            Event::LoadingFinished(e) => {
                let aggregate =
                    self.existing(EventMethod::LoadingFinished, &e.request_id, position)?;
                if aggregate.finished.is_some() {
                    return Err(CorrelationError::DuplicateEvent {
                        method: EventMethod::LoadingFinished,
                        request_id: e.request_id.clone(),
                        position,
                    });
                }
                aggregate.finished = Some(e);
            }
            Event::DomContentEventFired(_) | Event::LoadEventFired(_) => {}
        }

        Ok(())
    }

    fn existing(
        &mut self,
        method: EventMethod,
        request_id: &RequestId,
        position: usize,
    ) -> Result<&mut RequestAggregate<'a>, CorrelationError> {
        match self.index.get(request_id) {
            Some(&i) => Ok(&mut self.aggregates[i]),
            None => Err(CorrelationError::UnknownRequest {
                method,
                request_id: request_id.clone(),
                position,
            }),
        }
    }

    pub fn get(&self, request_id: &RequestId) -> Option<&RequestAggregate<'a>> {
        self.index.get(request_id).map(|&i| &self.aggregates[i])
    }

    pub fn aggregates(&self) -> &[RequestAggregate<'a>] {
        &self.aggregates
    }

    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    /// Completed requests in initiation order. Incomplete ones are dropped.
    pub fn into_completed(self) -> Vec<CompletedRequest<'a>> {
        self.aggregates
            .into_iter()
            .filter_map(|aggregate| {
                let request_id = aggregate.request_id();
                let position = aggregate.position();
                let completed = aggregate.into_completed();
                if completed.is_none() {
                    tracing::debug!(
                        request_id = %request_id,
                        position,
                        "dropping request that never finished loading"
                    );
                }
                completed
            })
            .collect()
    }
}
