use lead_notify::NotificationOutcome;

use serde::Serialize;

/// Response body for POST /api/lead
///
/// `ok` covers persistence only. Delivery state rides alongside as a flag
/// plus an error string; `telegram_error` is null unless delivery was
/// attempted and failed.
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub ok: bool,
    pub id: String,
    pub sent_to_telegram: bool,
    pub telegram_error: Option<String>,
}

impl LeadResponse {
    pub fn from_outcome(id: String, outcome: &NotificationOutcome) -> Self {
        Self {
            ok: true,
            id,
            sent_to_telegram: outcome.was_sent(),
            telegram_error: outcome.failure().map(str::to_string),
        }
    }
}
