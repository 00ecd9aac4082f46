mod error;
mod message;
mod outcome;
mod telegram;


pub use error::{NotifyError, NotifyErrorResult};
pub use message::format_lead_message;
pub use outcome::NotificationOutcome;
pub use telegram::{NotifierConfig, TELEGRAM_API_BASE, TelegramNotifier};
