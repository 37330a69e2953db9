// src/config.rs
use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_SKILL_COUNT: usize = 10;
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Runtime configuration for the analyzer. The listen address and port stay
/// with Rocket's own figment (ROCKET_ADDRESS / ROCKET_PORT).
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub skill_count: usize,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub dev_mode: bool,
}

impl AnalyzerConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            skill_count: DEFAULT_SKILL_COUNT,
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            dev_mode: false,
        }
    }

    /// Load configuration from the process environment. Only the API
    /// credential is mandatory.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY environment variable not set")?;

        let mut config = Self::new(&api_key);

        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = model;
        }

        if let Ok(base_url) = std::env::var("GEMINI_API_BASE_URL") {
            config.api_base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(count) = std::env::var("SKILL_COUNT") {
            config.skill_count = count
                .parse::<usize>()
                .context("SKILL_COUNT must be a positive number")?;
        }

        if let Ok(timeout) = std::env::var("COMPLETION_TIMEOUT_SECS") {
            config.timeout_secs = timeout
                .parse::<u64>()
                .context("COMPLETION_TIMEOUT_SECS must be a number of seconds")?;
        }

        config.dev_mode = std::env::var("DEV_MODE")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(config)
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_api_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_skill_count(mut self, count: usize) -> Self {
        self.skill_count = count;
        self
    }

    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }
}
