use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty check-in log
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rcheckin…");

    let cfg = Config::init_all(cli.file.clone(), cli.test)?;

    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Check-in log: {}", cfg.store_path().display());
    println!("🎉 rcheckin is ready. Start the page with `rcheckin serve`.");

    Ok(())
}
