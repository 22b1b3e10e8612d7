//! HAR 1.2 document model and the projection of completed requests into it.

mod cookies;
mod entry;
mod error;
mod headers;
mod query;
mod report;
mod time;
mod timings;
mod types;

pub use cookies::*;
pub use entry::*;
pub use error::*;
pub use headers::*;
pub use query::*;
pub use report::*;
pub use time::*;
pub use timings::*;
pub use types::*;
