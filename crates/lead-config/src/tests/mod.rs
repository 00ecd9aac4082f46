
use std::env;

const CONFIG_VARS: [&str; 8] = [
    "HOST",
    "PORT",
    "DATABASE_URL",
    "DATABASE_NAME",
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_CHAT_ID",
    "LOG_LEVEL",
    "LOG_COLORED",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self { key, original }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let original = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(value) => unsafe { env::set_var(self.key, value) },
            None => unsafe { env::remove_var(self.key) },
        }
    }
}

/// Clears every variable Config reads, so a test starts from a known state.
pub(crate) fn clear_config_env() -> Vec<EnvGuard> {
    CONFIG_VARS.into_iter().map(EnvGuard::remove).collect()
}
