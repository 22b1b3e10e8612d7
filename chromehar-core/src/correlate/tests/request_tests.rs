use crate::correlate::{CorrelationError, RequestCorrelator};
use crate::event::{EventMethod, RequestId};
use crate::test_helpers::Capture;
use pretty_assertions::assert_eq;

fn ids(completed: &[crate::correlate::CompletedRequest<'_>]) -> Vec<String> {
    completed
        .iter()
        .map(|c| c.request_id().to_string())
        .collect()
}

//-----------------------------------------------------------------------------
// Grouping
//-----------------------------------------------------------------------------
#[test]
fn groups_interleaved_events_by_request_id() {
    // Arrange
    let events = Capture::new()
        .request("1", "http://x/a", 0.0)
        .request("2", "http://x/b", 0.01)
        .response("2", 404, 0.05)
        .response("1", 200, 0.1)
        .data("1", 60, 50, 0.12)
        .data("2", 10, 10, 0.13)
        .data("1", 40, 40, 0.14)
        .finished("1", 90, 0.2)
        .events();

    // Act
    let correlator = RequestCorrelator::correlate(&events).unwrap();

    // Assert
    assert_eq!(correlator.len(), 2);

    let first = correlator.get(&RequestId::from("1")).unwrap();
    assert_eq!(first.initial().request.url, "http://x/a");
    assert_eq!(first.response().unwrap().response.status, 200);
    let lengths: Vec<i64> = first.data_chunks().iter().map(|d| d.data_length).collect();
    assert_eq!(lengths, vec![60, 40]);
    assert!(first.is_complete());

    let second = correlator.get(&RequestId::from("2")).unwrap();
    assert_eq!(second.response().unwrap().response.status, 404);
    assert_eq!(second.data_chunks().len(), 1);
    assert!(!second.is_complete());
}

#[test]
fn page_events_do_not_touch_requests() {
    let events = Capture::new()
        .dom_content(1.0)
        .request("1", "http://x/a", 0.0)
        .load(2.0)
        .events();

    let correlator = RequestCorrelator::correlate(&events).unwrap();

    assert_eq!(correlator.len(), 1);
    assert!(correlator.get(&RequestId::from("1")).unwrap().response().is_none());
}

//-----------------------------------------------------------------------------
// Redirects
//-----------------------------------------------------------------------------
#[test]
fn redirect_fills_redirect_slot_and_keeps_first_request() {
    let events = Capture::new()
        .request("1", "http://x/a", 0.0)
        .redirect("1", "http://x/b", 0.1)
        .redirect("1", "http://x/c", 0.2)
        .events();

    let correlator = RequestCorrelator::correlate(&events).unwrap();

    let aggregate = correlator.get(&RequestId::from("1")).unwrap();
    assert_eq!(correlator.len(), 1);
    assert_eq!(aggregate.initial().request.url, "http://x/a");
    assert_eq!(aggregate.position(), 0);
    assert_eq!(aggregate.redirect().unwrap().request.url, "http://x/c");
}

#[test]
fn redirect_without_initial_request_fails() {
    let events = Capture::new()
        .request("1", "http://x/a", 0.0)
        .redirect("9", "http://x/b", 0.1)
        .events();

    let err = RequestCorrelator::correlate(&events).unwrap_err();

    assert_eq!(
        err,
        CorrelationError::OrphanRedirect {
            request_id: RequestId::from("9"),
            position: 1,
        }
    );
    assert_eq!(err.request_id(), Some(&RequestId::from("9")));
}

//-----------------------------------------------------------------------------
// Protocol violations
//-----------------------------------------------------------------------------
#[test]
fn reused_request_id_without_redirect_fails() {
    let events = Capture::new()
        .request("1", "http://x/a", 0.0)
        .request("1", "http://x/b", 0.1)
        .events();

    let err = RequestCorrelator::correlate(&events).unwrap_err();

    assert_eq!(
        err,
        CorrelationError::DuplicateRequest {
            request_id: RequestId::from("1"),
            position: 1,
        }
    );
}

#[test]
fn response_for_unknown_request_fails() {
    let events = Capture::new().response("5", 200, 0.1).events();

    let err = RequestCorrelator::correlate(&events).unwrap_err();

    assert_eq!(
        err,
        CorrelationError::UnknownRequest {
            method: EventMethod::ResponseReceived,
            request_id: RequestId::from("5"),
            position: 0,
        }
    );
}

#[test]
fn data_for_unknown_request_fails() {
    let events = Capture::new()
        .request("1", "http://x/a", 0.0)
        .data("2", 10, 10, 0.1)
        .events();

    let err = RequestCorrelator::correlate(&events).unwrap_err();

    assert!(
        matches!(
            err,
            CorrelationError::UnknownRequest {
                method: EventMethod::DataReceived,
                position: 1,
                ..
            }
        ),
        "got {err:?}"
    );
}

#[test]
fn finished_for_unknown_request_fails() {
    let events = Capture::new().finished("3", 0, 0.1).events();

    let err = RequestCorrelator::correlate(&events).unwrap_err();

    assert_eq!(err.request_id(), Some(&RequestId::from("3")));
    assert!(err.to_string().contains("Network.loadingFinished"), "{err}");
}

#[test]
fn second_response_is_rejected() {
    let events = Capture::new()
        .request("1", "http://x/a", 0.0)
        .response("1", 200, 0.1)
        .response("1", 500, 0.2)
        .events();

    let err = RequestCorrelator::correlate(&events).unwrap_err();

    assert_eq!(
        err,
        CorrelationError::DuplicateEvent {
            method: EventMethod::ResponseReceived,
            request_id: RequestId::from("1"),
            position: 2,
        }
    );
}

#[test]
fn second_loading_finished_is_rejected() {
    let events = Capture::new()
        .request("1", "http://x/a", 0.0)
        .finished("1", 10, 0.1)
        .finished("1", 10, 0.2)
        .events();

    let err = RequestCorrelator::correlate(&events).unwrap_err();

    assert_eq!(
        err,
        CorrelationError::DuplicateEvent {
            method: EventMethod::LoadingFinished,
            request_id: RequestId::from("1"),
            position: 2,
        }
    );
}

//-----------------------------------------------------------------------------
// Completion
//-----------------------------------------------------------------------------
#[test]
fn unfinished_requests_are_dropped() {
    let events = Capture::new()
        .request("1", "http://x/a", 0.0)
        .request("2", "http://x/b", 0.0)
        .response("2", 200, 0.1)
        .data("2", 10, 10, 0.15)
        .finished("1", 0, 0.2)
        .events();

    let completed = RequestCorrelator::correlate(&events)
        .unwrap()
        .into_completed();

    assert_eq!(ids(&completed), vec!["1"]);
}

#[test]
fn completed_requests_keep_initiation_order() {
    let events = Capture::new()
        .request("3", "http://x/c", 0.0)
        .request("1", "http://x/a", 0.0)
        .request("2", "http://x/b", 0.0)
        .finished("2", 0, 0.1)
        .finished("1", 0, 0.2)
        .finished("3", 0, 0.3)
        .events();

    let completed = RequestCorrelator::correlate(&events)
        .unwrap()
        .into_completed();

    assert_eq!(ids(&completed), vec!["3", "1", "2"]);
}

#[test]
fn finished_request_without_response_is_still_complete() {
    let events = Capture::new()
        .request("1", "http://x/a", 0.0)
        .finished("1", 0, 0.0)
        .events();

    let completed = RequestCorrelator::correlate(&events)
        .unwrap()
        .into_completed();

    assert_eq!(completed.len(), 1);
    assert!(completed[0].response.is_none());
    assert!(completed[0].data_chunks.is_empty());
}
