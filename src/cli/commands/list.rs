use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::CheckinStore;
use crate::utils::table::Table;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { count } = cmd {
        let store = CheckinStore::new(cfg.store_path());
        let records = store.load_all()?;

        if *count {
            println!("{}", records.len());
            return Ok(());
        }

        if records.is_empty() {
            println!("No check-ins recorded in {}.", store.path().display());
            return Ok(());
        }

        println!("📜 Check-in log ({} record(s)):\n", records.len());

        let mut table = Table::new(["Name", "ID", "Time", "Latitude", "Longitude"]);
        for record in &records {
            table.add_row(vec![
                record.name.clone(),
                record.id_number.clone(),
                record.timestamp.clone(),
                record.latitude.clone(),
                record.longitude.clone(),
            ]);
        }

        let rendered = table.render();
        let mut lines = rendered.lines();
        if let Some(head) = lines.next() {
            println!("{}", Colour::Cyan.bold().paint(head));
        }
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}
