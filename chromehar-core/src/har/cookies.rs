//! Cookie extraction from captured headers.
//!
//! `Cookie` request headers hold `name=value` pairs separated by `;`.
//! `Set-Cookie` response headers hold one cookie per line (the protocol joins
//! repeated headers with `\n`), each followed by its attributes.

use crate::event::Headers;
use crate::har::Cookie;
use chrono::{DateTime, Utc};
use http::header::{COOKIE, SET_COOKIE};

pub fn request_cookies(headers: &Headers) -> Vec<Cookie> {
    headers
        .get_all(COOKIE.as_str())
        .flat_map(parse_cookie_header)
        .collect()
}

pub fn response_cookies(headers: &Headers) -> Vec<Cookie> {
    headers
        .get_all(SET_COOKIE.as_str())
        .flat_map(str::lines)
        .filter_map(parse_set_cookie)
        .collect()
}

/// Parses a `Cookie` header value. A pair without `=` gets an empty value.
pub fn parse_cookie_header(value: &str) -> Vec<Cookie> {
    value
        .split(';')
        .filter_map(|pair| {
            let (name, value) = split_pair(pair);
            (!name.is_empty()).then(|| Cookie::new(name, value))
        })
        .collect()
}

/// Parses a single `Set-Cookie` line.
pub fn parse_set_cookie(line: &str) -> Option<Cookie> {
    let mut parts = line.split(';');
    let (name, value) = split_pair(parts.next()?);
    if name.is_empty() {
        return None;
    }

    let mut cookie = Cookie::new(name, value);
    for attribute in parts {
        let (key, value) = split_pair(attribute);
        match key.to_ascii_lowercase().as_str() {
            "path" => cookie.path = Some(value.to_string()),
            "domain" => cookie.domain = Some(value.to_string()),
            "expires" => cookie.expires = parse_expires(value),
            "httponly" => cookie.http_only = Some(true),
            "secure" => cookie.secure = Some(true),
            _ => {}
        }
    }

    Some(cookie)
}

fn split_pair(pair: &str) -> (&str, &str) {
    match pair.split_once('=') {
        Some((name, value)) => (name.trim(), value.trim()),
        None => (pair.trim(), ""),
    }
}

fn parse_expires(value: &str) -> Option<DateTime<Utc>> {
    httpdate::parse_http_date(value).ok().map(DateTime::<Utc>::from)
}
