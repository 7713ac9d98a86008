use std::time::Duration;

/// Environment variable selecting the processing service's base address.
pub const API_BASE_ENV: &str = "PDFMAGIC_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Where the processing service lives. The only externally configurable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self {
                base_url: DEFAULT_API_BASE.to_string(),
            };
        }
        Self {
            base_url: trimmed.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the base address through `lookup`; absent or empty falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_BASE_ENV) {
            Some(value) => Self::new(value),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}{endpoint}`; endpoints start with `/`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    pub service: ServiceConfig,
    /// Applies to connection setup only; requests themselves have no deadline.
    pub connect_timeout: Duration,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl SubmitSettings {
    pub fn with_service(service: ServiceConfig) -> Self {
        Self {
            service,
            ..Self::default()
        }
    }
}
