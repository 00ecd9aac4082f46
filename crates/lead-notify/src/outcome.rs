/// What happened to the alert for one submission.
///
/// Relay problems never fail the request, so the handler needs to tell
/// "never attempted" apart from "attempted and failed" when assembling
/// the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// The alert reached the Telegram API with a 2xx response.
    Sent,
    /// No relay is configured; delivery was never attempted.
    Skipped,
    /// Delivery was attempted and failed.
    Failed { reason: String },
}

impl NotificationOutcome {
    pub fn was_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}
