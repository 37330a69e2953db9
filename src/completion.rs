// src/completion.rs
//! Client for the external generative-language service.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::AnalyzerConfig;
use crate::error::AnalyzeError;

/// The seam between the pipeline and the completion service. Handlers hold
/// this as a trait object so tests can substitute a stub.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send the prompt, return the model's raw text output.
    async fn complete(&self, prompt: &str) -> Result<String, AnalyzeError>;
}

pub struct GeminiClient {
    client: Client,
    api_base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

// Low temperature to keep repeated analyses stable. The service stays
// non-deterministic, this only leans on it.
#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiClient {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, AnalyzeError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url, self.model
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        info!("Calling completion service model: {}", self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AnalyzeError::Completion(format!("request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AnalyzeError::Completion(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            error!("Completion service error {}: {}", status, response_text);
            return Err(AnalyzeError::Completion(format!(
                "service returned status {}",
                status
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| AnalyzeError::Completion(format!("unexpected response shape: {}", e)))?;

        let output: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect();

        if output.trim().is_empty() {
            return Err(AnalyzeError::Completion(
                "service returned no text".to_string(),
            ));
        }

        Ok(output)
    }
}
