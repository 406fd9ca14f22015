mod dynamic;
mod engine;
mod options;
mod outcome;
mod position;

pub use dynamic::{inspect_value, truncate_value};
pub use engine::{Truncator, truncate};
pub use options::{DEFAULT_MARK, MIN_LENGTH, TruncateOptions};
pub use outcome::{Skip, Truncation};
pub use position::{ParsePositionError, Position};
