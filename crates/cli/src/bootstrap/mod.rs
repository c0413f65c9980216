pub mod clock;
pub mod config;
pub mod logging;

pub use clock::spawn_clock_ticker;
pub use config::load_config;
pub use logging::init_logging;
