//! Opens a window and draws a pulsing quad until it is closed.

use glow_primer::config::AppConfig;
use glow_primer::logging::init_logging;

fn main() {
    let config = AppConfig::default();
    init_logging(config.logging.clone());

    if let Err(e) = glow_primer::app::run(config) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}
