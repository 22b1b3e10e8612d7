use crate::config::HarConfig;
use anyhow::Context;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads the whole input document. `None` and `-` mean stdin.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .with_context(|| format!("failed to read performance log {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read performance log from stdin")?;
            Ok(buf)
        }
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<HarConfig> {
    match path {
        Some(p) => Ok(HarConfig::from_file(p)?),
        None => Ok(HarConfig::default()),
    }
}
