pub mod logging;
pub mod path;

pub use logging::init_logging;
pub use path::display_relative;
