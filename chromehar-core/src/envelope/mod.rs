//! Driver log envelope decoding.
//!
//! chromedriver hands back its `performance` log as a list of entries whose
//! `message` field is itself a JSON document encoded as a string:
//!
//! ```text
//! {"level": "INFO", "timestamp": 1700000000123,
//!  "message": "{\"message\":{\"method\":\"Network.requestWillBeSent\",\"params\":{...}},\"webview\":\"...\"}"}
//! ```
//!
//! This module unwraps that envelope into [`RawEvent`]s: a method name, the
//! still-undecoded params, and the event's position in the input. Bare CDP
//! events (`{"method": ..., "params": ...}`) are accepted as well.

mod record;

pub use record::*;
