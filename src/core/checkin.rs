//! High-level business logic for one check-in submission:
//! validate, persist, and produce the text the page displays.

use crate::core::clock::Clock;
use crate::core::window::CheckinWindow;
use crate::errors::AppResult;
use crate::models::record::CheckinRecord;
use crate::store::CheckinStore;
use regex::Regex;
use std::sync::OnceLock;

pub const ERR_ID_FORMAT: &str = "ID number must be exactly 6 digits.";
pub const ERR_NAME_BLANK: &str = "Name cannot be blank.";

/// Raw form fields as they arrive from the page. `None` coordinates mean
/// the field was absent from the request body.
#[derive(Debug, Clone, Default)]
pub struct CheckinSubmission {
    pub name: String,
    pub id_number: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// What one submission produced. Exactly one of the two texts reaches
/// the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinOutcome {
    /// Record persisted; carries the confirmation message.
    Accepted {
        record: CheckinRecord,
        message: String,
    },
    /// Validation failed; nothing was written.
    Rejected { error: String },
}

/// ASCII digits only. `\d` would also accept Unicode digits.
fn id_pattern() -> &'static Regex {
    static ID_PATTERN: OnceLock<Regex> = OnceLock::new();
    ID_PATTERN.get_or_init(|| Regex::new(r"^[0-9]{6}$").unwrap())
}

/// High-level business logic for a check-in submission.
pub struct CheckinLogic;

impl CheckinLogic {
    /// Run the validation pipeline in its fixed order (ID format, then
    /// name, then window), append on success and report the outcome.
    ///
    /// Validation failures are regular outcomes; only storage failures
    /// come back as errors, and in that case nothing was persisted.
    pub fn apply(
        store: &CheckinStore,
        window: &CheckinWindow,
        clock: &dyn Clock,
        submission: &CheckinSubmission,
    ) -> AppResult<CheckinOutcome> {
        let name = submission.name.trim();
        let id_number = submission.id_number.trim();

        if !id_pattern().is_match(id_number) {
            return Ok(CheckinOutcome::Rejected {
                error: ERR_ID_FORMAT.to_string(),
            });
        }

        if name.is_empty() {
            return Ok(CheckinOutcome::Rejected {
                error: ERR_NAME_BLANK.to_string(),
            });
        }

        // One clock sample per submission: the window test, the stored
        // timestamp and the confirmation message all see the same instant.
        let now = clock.now();
        if !window.contains(now.time()) {
            return Ok(CheckinOutcome::Rejected {
                error: window.rejection_message(),
            });
        }

        let record = CheckinRecord::new(
            name,
            id_number,
            now,
            submission.latitude.as_deref(),
            submission.longitude.as_deref(),
        );
        store.append(&record)?;

        let message = format!("{}, you are checked in at {}.", name, now.format("%H:%M:%S"));
        Ok(CheckinOutcome::Accepted { record, message })
    }
}
