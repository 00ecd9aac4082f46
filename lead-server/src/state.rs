use lead_config::Config;
use lead_db::DocumentStore;
use lead_notify::TelegramNotifier;

/// Shared application state
///
/// Both external clients are optional: the server boots without a database
/// or Telegram credentials and each endpoint degrades on its own terms.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<DocumentStore>,
    pub notifier: Option<TelegramNotifier>,
    pub config: Config,
}
