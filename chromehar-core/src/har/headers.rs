use crate::event::Headers;
use crate::har::Header;
use url::{Position, Url};

/// Length of the blank line that ends a header block.
const BLOCK_TERMINATOR: usize = "\r\n".len();

pub fn har_headers(headers: &Headers) -> Vec<Header> {
    headers
        .iter()
        .map(|(name, value)| Header {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// Path and query of `url`, as written on an HTTP/1.x request line.
pub fn request_target(url: &Url) -> &str {
    &url[Position::BeforePath..Position::AfterQuery]
}

/// Approximate wire size of a request header block.
///
/// The raw bytes are not part of the capture, so the block is rebuilt as
/// `METHOD target PROTOCOL\r\n`, one `Name: Value\r\n` per header and a blank line.
pub fn request_headers_size(method: &str, url: &Url, protocol: &str, headers: &Headers) -> i64 {
    let line = format!("{} {} {}\r\n", method, request_target(url), protocol);
    (line.len() + header_lines_size(headers) + BLOCK_TERMINATOR) as i64
}

/// Approximate wire size of a response header block; see [`request_headers_size`].
pub fn response_headers_size(
    protocol: &str,
    status: i64,
    status_text: &str,
    headers: &Headers,
) -> i64 {
    let line = format!("{} {} {}\r\n", protocol, status, status_text);
    (line.len() + header_lines_size(headers) + BLOCK_TERMINATOR) as i64
}

fn header_lines_size(headers: &Headers) -> usize {
    headers
        .iter()
        .map(|(name, value)| format!("{name}: {value}\r\n").len())
        .sum()
}
