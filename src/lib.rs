pub mod counting;
pub mod minmax;
pub mod utils;
pub mod values;

pub use minmax::{RangeError, find, find_all, find_or_empty, try_find};
pub use values::{ValueKind, Values};
