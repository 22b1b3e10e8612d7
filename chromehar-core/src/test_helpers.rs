use crate::envelope::RawEvent;
use crate::event::{SequencedEvent, decode_events};
use serde_json::{Value, json};

/// Wall time the helper requests were sent at, in seconds since the epoch.
pub const WALL_TIME: f64 = 1_700_000_000.0;

pub fn request_params(id: &str, url: &str, ts: f64) -> Value {
    json!({
        "requestId": id,
        "loaderId": "L1",
        "documentURL": "http://x/",
        "request": {
            "url": url,
            "method": "GET",
            "headers": {},
        },
        "timestamp": ts,
        "wallTime": WALL_TIME + ts,
        "type": "Document",
    })
}

pub fn response_params(id: &str, status: i64, ts: f64) -> Value {
    json!({
        "requestId": id,
        "loaderId": "L1",
        "timestamp": ts,
        "type": "Document",
        "response": {
            "url": "http://x/a",
            "status": status,
            "statusText": "OK",
            "headers": { "Content-Type": "text/html" },
            "mimeType": "text/html",
            "protocol": "http/1.1",
            "encodedDataLength": 44,
        },
    })
}

/// Builds a capture one event at a time, numbering positions in push order.
#[derive(Debug, Default)]
pub struct Capture {
    raw: Vec<RawEvent>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, method: &str, params: Value) -> Self {
        let position = self.raw.len();
        self.raw.push(RawEvent::new(position, method, params));
        self
    }

    pub fn request(self, id: &str, url: &str, ts: f64) -> Self {
        self.push("Network.requestWillBeSent", request_params(id, url, ts))
    }

    pub fn redirect(self, id: &str, url: &str, ts: f64) -> Self {
        let mut params = request_params(id, url, ts);
        params["redirectResponse"] = json!({
            "url": "http://x/a",
            "status": 302,
            "statusText": "Found",
            "headers": { "Location": url },
            "mimeType": "",
            "protocol": "http/1.1",
        });
        self.push("Network.requestWillBeSent", params)
    }

    pub fn response(self, id: &str, status: i64, ts: f64) -> Self {
        self.push("Network.responseReceived", response_params(id, status, ts))
    }

    pub fn data(self, id: &str, data_length: i64, encoded_data_length: i64, ts: f64) -> Self {
        self.push(
            "Network.dataReceived",
            json!({
                "requestId": id,
                "timestamp": ts,
                "dataLength": data_length,
                "encodedDataLength": encoded_data_length,
            }),
        )
    }

    pub fn finished(self, id: &str, encoded_data_length: i64, ts: f64) -> Self {
        self.push(
            "Network.loadingFinished",
            json!({
                "requestId": id,
                "timestamp": ts,
                "encodedDataLength": encoded_data_length,
            }),
        )
    }

    pub fn dom_content(self, ts: f64) -> Self {
        self.push("Page.domContentEventFired", json!({ "timestamp": ts }))
    }

    pub fn load(self, ts: f64) -> Self {
        self.push("Page.loadEventFired", json!({ "timestamp": ts }))
    }

    pub fn raw(&self) -> &[RawEvent] {
        &self.raw
    }

    /// The capture as a JSON array of bare DevTools messages.
    pub fn to_log(&self) -> String {
        let messages: Vec<Value> = self
            .raw
            .iter()
            .map(|r| json!({ "method": r.method, "params": r.params }))
            .collect();
        Value::Array(messages).to_string()
    }

    pub fn events(&self) -> Vec<SequencedEvent> {
        decode_events(&self.raw).expect("capture should decode")
    }
}
