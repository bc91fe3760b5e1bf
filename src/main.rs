use std::sync::Arc;

use crate::{abs::App, config::AppConfig, error::AppError};

mod abs;
mod config;
mod error;
mod frame;
mod logging;
mod render;

fn run(config: &AppConfig) -> Result<u64, AppError> {
    let app = App::new(&config.window)?;
    let gl = Arc::clone(&app.gl);
    frame::run_session(&gl, app, config)
}

fn main() {
    let config = AppConfig::from_env();
    logging::init_logging(config.log_level);

    match run(&config) {
        Ok(frames) => log::info!("Rendered {} frames, exiting", frames),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
