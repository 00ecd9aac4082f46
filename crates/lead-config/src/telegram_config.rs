/// Telegram relay credentials.
#[derive(Debug, Clone, Default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl TelegramConfig {
    /// The relay needs both values; anything less leaves it disabled.
    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }

    /// True when exactly one of the two values is set.
    pub fn is_partially_configured(&self) -> bool {
        self.bot_token.is_some() != self.chat_id.is_some()
    }

    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.bot_token.as_deref(), self.chat_id.as_deref()) {
            (Some(bot_token), Some(chat_id)) => Some((bot_token, chat_id)),
            _ => None,
        }
    }
}
