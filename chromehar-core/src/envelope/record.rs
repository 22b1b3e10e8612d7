use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// One entry of a chromedriver `performance` log.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverLogEntry {
    /// JSON-encoded [`ChromeLogMessage`].
    pub message: String,
    #[serde(default)]
    pub timestamp: i64,
}

/// A DevTools protocol event as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CdpMessage {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// The document carried inside [`DriverLogEntry::message`].
#[derive(Debug, Clone, Deserialize)]
pub struct ChromeLogMessage {
    pub message: CdpMessage,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LogRecord {
    Driver(DriverLogEntry),
    Cdp(CdpMessage),
}

/// An event whose params have not been decoded yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    /// Index of the record in the input. Only used for relative ordering.
    pub position: usize,
    pub method: String,
    pub params: Value,
}

impl RawEvent {
    pub fn new(position: usize, method: impl Into<String>, params: Value) -> Self {
        Self {
            position,
            method: method.into(),
            params,
        }
    }
}

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("invalid log document: {source}")]
    Document {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid log record on line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to unmarshal log entry at timestamp {timestamp} (position {position}): {source}")]
    Message {
        position: usize,
        timestamp: i64,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses a log document: either a JSON array of records or one record per line.
pub fn parse_log(input: &str) -> Result<Vec<LogRecord>, EnvelopeError> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str(input).map_err(|source| EnvelopeError::Document { source });
    }

    let mut records = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record = serde_json::from_str(line)
            .map_err(|source| EnvelopeError::Line { line: i + 1, source })?;
        records.push(record);
    }

    Ok(records)
}

/// Unwraps each record into a [`RawEvent`], keeping input order.
pub fn decode_records(records: &[LogRecord]) -> Result<Vec<RawEvent>, EnvelopeError> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| decode_record(position, record))
        .collect()
}

fn decode_record(position: usize, record: &LogRecord) -> Result<RawEvent, EnvelopeError> {
    let message = match record {
        LogRecord::Driver(entry) => {
            let chrome: ChromeLogMessage =
                serde_json::from_str(&entry.message).map_err(|source| EnvelopeError::Message {
                    position,
                    timestamp: entry.timestamp,
                    source,
                })?;
            chrome.message
        }
        LogRecord::Cdp(message) => message.clone(),
    };

    Ok(RawEvent {
        position,
        method: message.method,
        params: message.params,
    })
}

pub fn decode_log(input: &str) -> Result<Vec<RawEvent>, EnvelopeError> {
    let records = parse_log(input)?;
    decode_records(&records)
}
