use crate::cli::{load_config, read_input};
use crate::har::Har;
use crate::pipeline::from_log_str;
use anyhow::Context;
use std::fs;
use std::path::Path;

pub fn convert(
    input: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let cfg = load_config(config)?;
    let log = read_input(input)?;

    let har = from_log_str(&log, &cfg).context("failed to create HAR")?;
    let rendered = render_har(&har, compact)?;

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write HAR to {}", path.display()))?;
            tracing::info!(path = %path.display(), entries = har.log.entries.len(), "wrote HAR");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

pub fn render_har(har: &Har, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(har)
    } else {
        serde_json::to_string_pretty(har)
    }
}
