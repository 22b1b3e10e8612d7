use crate::cli::{load_config, read_input};
use crate::har::{Entry, Har};
use crate::pipeline::from_log_str;
use anyhow::Context;
use owo_colors::OwoColorize;
use std::fmt::Write;
use std::io::{self, IsTerminal};
use std::path::Path;

pub fn summary(input: Option<&Path>, config: Option<&Path>) -> anyhow::Result<()> {
    let cfg = load_config(config)?;
    let log = read_input(input)?;

    let har = from_log_str(&log, &cfg).context("failed to create HAR")?;

    print!("{}", render_summary(&har, io::stdout().is_terminal()));
    Ok(())
}

/// Counts of entries per status class.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub success: usize,
    pub redirect: usize,
    pub client_error: usize,
    pub server_error: usize,
    pub other: usize,
}

impl StatusCounts {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            match entry.response.status {
                200..=299 => counts.success += 1,
                300..=399 => counts.redirect += 1,
                400..=499 => counts.client_error += 1,
                500..=599 => counts.server_error += 1,
                _ => counts.other += 1,
            }
        }
        counts
    }
}

pub fn render_summary(har: &Har, color: bool) -> String {
    let mut out = String::new();

    for page in &har.log.pages {
        let _ = writeln!(out, "page {} {}", page.id, page.title);
    }

    for entry in &har.log.entries {
        let status = entry.response.status;
        let status = if color {
            colorize_status(status)
        } else {
            status.to_string()
        };
        let _ = writeln!(
            out,
            "{:>3} {:<7} {:>9.1}ms {}",
            status, entry.request.method, entry.time, entry.request.url
        );
    }

    let c = StatusCounts::from_entries(&har.log.entries);
    let _ = writeln!(
        out,
        "entries: {} | 2xx={} 3xx={} 4xx={} 5xx={} other={}",
        har.log.entries.len(),
        c.success,
        c.redirect,
        c.client_error,
        c.server_error,
        c.other
    );

    out
}

fn colorize_status(status: i64) -> String {
    match status {
        200..=299 => status.green().to_string(),
        300..=399 => status.cyan().to_string(),
        400..=499 => status.yellow().to_string(),
        500..=599 => status.red().to_string(),
        _ => status.dimmed().to_string(),
    }
}
