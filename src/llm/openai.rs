//! Blocking client for OpenAI-compatible `/chat/completions` endpoints

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{CompletionClient, CompletionError, Message};
use crate::config::{Config, LlmConfig};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiClient {
    config: LlmConfig,
    env_file: PathBuf,
    agent: ureq::Agent,
}

impl OpenAiClient {
    /// Client reading its API key from the environment or `<autoagent dir>/.env`
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(config.clone(), Config::autoagent_dir().join(".env"))
    }

    pub fn new(config: LlmConfig, env_file: PathBuf) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();

        Self {
            config,
            env_file,
            agent,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.api_base.trim_end_matches('/'))
    }

    fn api_key(&self) -> Result<String, CompletionError> {
        let env_var = &self.config.api_key_env;

        if let Ok(key) = std::env::var(env_var)
            && !key.trim().is_empty()
        {
            return Ok(key);
        }

        if let Some(key) = read_env_file(&self.env_file, env_var)? {
            return Ok(key);
        }

        Err(CompletionError::MissingApiKey {
            env_var: env_var.clone(),
            env_file: self.env_file.display().to_string(),
        })
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_base", &self.config.api_base)
            .field("env_file", &self.env_file)
            .finish()
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, messages: &[Message], model: &str) -> Result<String, CompletionError> {
        let api_key = self.api_key()?;
        let url = self.endpoint();

        log::info!("Requesting completion from {} with model {}", url, model);

        let request = ChatRequest {
            model,
            messages,
            temperature: self.config.temperature,
        };
        let request_body = serde_json::to_string(&request)?;

        let mut response = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .send(request_body.as_bytes())?;

        let response_body = response.body_mut().read_to_string()?;
        parse_response(&response_body)
    }
}

fn parse_response(body: &str) -> Result<String, CompletionError> {
    let response: ChatResponse = serde_json::from_str(body)?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(CompletionError::EmptyResponse)
}

/// Look up `key` in a dotenv-style file
fn read_env_file(path: &Path, key: &str) -> Result<Option<String>, CompletionError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once('=')
            && name.trim() == key
        {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            return Ok(Some(value.to_string()));
        }
    }

    Ok(None)
}
