use crate::{NotifyError, NotifyErrorResult, format_lead_message};

use lead_core::Lead;

use std::time::Duration;

use log::debug;
use serde::Serialize;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Settings for the Telegram HTTP client.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Base URL of the Bot API, overridable for tests.
    pub api_base: String,
    /// Timeout applied to each sendMessage call.
    pub timeout: Duration,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            api_base: String::from(TELEGRAM_API_BASE),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: String,
}

/// Pushes lead alerts to a Telegram chat via the Bot API.
///
/// One shared reqwest client per notifier; safe to clone and use across
/// concurrent requests. Delivery is one-shot, no retry.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    bot_token: String,
    chat_id: String,
    api_base: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> NotifyErrorResult<Self> {
        Self::with_config(bot_token, chat_id, NotifierConfig::default())
    }

    pub fn with_config(
        bot_token: String,
        chat_id: String,
        config: NotifierConfig,
    ) -> NotifyErrorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NotifyError::client(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            bot_token,
            chat_id,
            api_base: config.api_base,
        })
    }

    /// Send the formatted alert for one lead to the configured chat.
    pub async fn send_lead_alert(&self, lead: &Lead) -> NotifyErrorResult<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.bot_token);
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text: format_lead_message(lead),
        };

        let response = self.client.post(&url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::status(status.as_u16(), body));
        }

        debug!("Telegram alert delivered for lead \"{}\"", lead.name);
        Ok(())
    }
}
