mod commands;
mod menu;
mod progress_bar;
mod session;

use std::io;

use env_logger::Env;
use fsinv_common::{AppConfig, InventoryError};
use fsinv_scanner::Inventory;

pub use commands::render_chart;
pub use menu::Choice;
pub use progress_bar::BarProgress;
pub use session::Session;

/// Interactive entry point: configuration from the environment, menu on
/// stdin/stdout, progress bars on stderr.
pub fn run() -> Result<(), InventoryError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = AppConfig::from_env()?;
    log::debug!(
        "global root {}, {} workers, queue {}",
        config.global_root.display(),
        config.worker_count(),
        config.queue_capacity
    );

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), Inventory::new(config));
    session.run()
}
