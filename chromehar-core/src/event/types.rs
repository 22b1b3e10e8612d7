//! Params of the DevTools events we decode.
//!
//! Field names follow the protocol (`requestId`, `documentURL`, ...). Only the
//! fields the HAR projection reads are modeled; everything else in the payload
//! is ignored.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId(s)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId(s.to_owned())
    }
}

/// Header name/value pairs in capture order.
///
/// The protocol sends headers as a JSON object. Multiple values for one
/// name arrive joined with `\n` in a single value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Values of every header whose name matches `name`, ignoring ASCII case.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Headers(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeadersVisitor;

        impl<'de> Visitor<'de> for HeadersVisitor {
            type Value = Headers;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str("a map of header names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Headers, A::Error> {
                let mut headers = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, Value>()? {
                    let value = match value {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    headers.push((name, value));
                }
                Ok(Headers(headers))
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}

/// Byte counts are protocol `number`s; Chrome sends integral values.
fn byte_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let n = f64::deserialize(deserializer)?;
    Ok(n.round() as i64)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub post_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub status_text: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub timing: Option<ResourceTiming>,
    #[serde(default, deserialize_with = "byte_count")]
    pub encoded_data_length: i64,
    #[serde(default, rename = "remoteIPAddress")]
    pub remote_ip_address: Option<String>,
    #[serde(default)]
    pub connection_id: Option<f64>,
}

/// Request sub-phase offsets in milliseconds from the start of the request.
///
/// Phases the browser did not time are reported as `-1`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceTiming {
    pub dns_start: f64,
    pub dns_end: f64,
    pub connect_start: f64,
    pub connect_end: f64,
    pub ssl_start: f64,
    pub ssl_end: f64,
    pub send_start: f64,
    pub send_end: f64,
    pub receive_headers_end: f64,
}

/// `Network.requestWillBeSent`.
///
/// When `redirect_response` is set this is a redirect continuation: the
/// browser reuses the request id for the next hop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestWillBeSent {
    pub request_id: RequestId,
    #[serde(default, rename = "documentURL")]
    pub document_url: String,
    pub request: Request,
    /// Monotonic seconds.
    pub timestamp: f64,
    /// Seconds since the UNIX epoch.
    #[serde(default)]
    pub wall_time: f64,
    #[serde(default)]
    pub redirect_response: Option<Response>,
}

impl RequestWillBeSent {
    pub fn is_redirect(&self) -> bool {
        self.redirect_response.is_some()
    }
}

/// `Network.responseReceived`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseReceived {
    pub request_id: RequestId,
    pub timestamp: f64,
    pub response: Response,
}

/// `Network.dataReceived`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataReceived {
    pub request_id: RequestId,
    pub timestamp: f64,
    #[serde(deserialize_with = "byte_count")]
    pub data_length: i64,
    #[serde(default, deserialize_with = "byte_count")]
    pub encoded_data_length: i64,
}

/// `Network.loadingFinished`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingFinished {
    pub request_id: RequestId,
    pub timestamp: f64,
    #[serde(deserialize_with = "byte_count")]
    pub encoded_data_length: i64,
}

/// `Page.domContentEventFired` and `Page.loadEventFired` share this shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageTimestamp {
    pub timestamp: f64,
}
