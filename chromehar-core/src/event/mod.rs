mod decode;
mod method;
mod types;

pub use decode::*;
pub use method::*;
pub use types::*;
