/// Single log entry command.
pub mod log;
/// JSON document rendering command.
pub mod render;

mod util;
