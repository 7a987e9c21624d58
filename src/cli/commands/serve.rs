use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::window::CheckinWindow;
use crate::errors::AppResult;
use crate::store::CheckinStore;
use crate::web::{self, AppState};

/// Handle the `serve` command: resolve window and address (CLI flags win
/// over the config file), then run the server until interrupted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { addr, window } = cmd {
        let window = match window {
            Some(raw) => CheckinWindow::parse(raw)?,
            None => cfg.window()?,
        };
        let addr = addr.clone().unwrap_or_else(|| cfg.bind_addr.clone());

        let state = AppState {
            store: CheckinStore::new(cfg.store_path()),
            window,
            clock: Box::new(SystemClock),
        };
        web::serve(state, &addr)?;
    }
    Ok(())
}
