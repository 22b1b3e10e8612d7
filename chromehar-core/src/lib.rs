pub mod cli;
pub mod config;
pub mod correlate;
pub mod envelope;
pub mod error;
pub mod event;
pub mod har;
pub mod logging;
pub mod pipeline;

#[cfg(test)]
mod test_helpers;

pub use config::HarConfig;
pub use error::HarError;
pub use pipeline::{build_har, from_log_str};
