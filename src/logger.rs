//! Console Logger
//!
//! Routes the `log` facade to the browser devtools console.

use log::LevelFilter;

/// Install the console logger at `level`. `Off` installs nothing.
/// Safe to call more than once.
pub fn init(level: LevelFilter) {
    match level.to_level() {
        Some(level) => {
            if console_log::init_with_level(level).is_err() {
                log::debug!("console logger already installed");
            }
        }
        None => log::set_max_level(LevelFilter::Off),
    }
}
