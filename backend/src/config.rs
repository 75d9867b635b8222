use tracing::warn;

pub const DEFAULT_CORS_ORIGIN_PREFIX: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub cors_origin_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            cors_origin_prefix: DEFAULT_CORS_ORIGIN_PREFIX.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads settings through `lookup` (the shuttle secret store in
    /// production). Missing or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match lookup("CORS_ORIGIN_PREFIX").filter(|prefix| !prefix.trim().is_empty()) {
            Some(prefix) => config.cors_origin_prefix = prefix.trim().to_string(),
            None => warn!(
                "CORS_ORIGIN_PREFIX not set - allowing origins starting with {}",
                DEFAULT_CORS_ORIGIN_PREFIX
            ),
        }

        config
    }
}
