/// Document store connection settings.
///
/// Both values come from the environment and either may be absent. Without a
/// URL the server still starts and reports the store as unconfigured through
/// the diagnostic endpoint.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}
