pub mod record;

pub use record::CheckinRecord;
