mod fixtures;
pub mod tracing;

pub use self::fixtures::{fixture_path, load_fixture};
pub use self::tracing::{CapturedEvent, capture_events};
