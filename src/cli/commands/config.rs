use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Effective configuration:\n");
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            print!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if path.exists() {
                messages::success(format!("Config file found: {}", path.display()));
            } else {
                messages::warning(format!(
                    "No config file at {} (built-in defaults apply)",
                    path.display()
                ));
            }

            match cfg.window() {
                Ok(window) => messages::success(format!("Check-in window: {}", window)),
                Err(err) => messages::error(format!("Window invalid: {}", err)),
            }

            println!("🗄️  Check-in log: {}", cfg.store_path().display());
        }

        if !*print_config && !*check {
            messages::info("Nothing to do. Use --print or --check.");
        }
    }

    Ok(())
}
