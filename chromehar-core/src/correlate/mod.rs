//! Grouping of per-request and per-page lifecycle events.
//!
//! Both correlators make a single pass over the same decoded sequence and
//! borrow the events they keep, so nothing is copied until the HAR entries
//! are built.

mod error;
mod page;
mod request;

pub use error::*;
pub use page::*;
pub use request::*;
