use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use reelvec_core::{Error, Result, TextEncoder, Vector};

/// Configuration for the embedding service client.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Base URL of the embedding service, e.g. `http://localhost:11434`.
    pub host: String,
    /// Embedding model identifier, e.g. `nomic-embed-text`.
    pub model: String,
    /// Per-request timeout. A slow service fails the whole build or query
    /// rather than hanging indefinitely.
    pub timeout: Duration,
    /// Attempts per text before the batch is failed.
    pub max_retries: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:11434".to_string(),
            model: "nomic-embed-text".to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }
}

/// Blocking embeddings client for Ollama-compatible endpoints.
///
/// Embeds one prompt per request, in input order. Output rows are
/// unit-normalized and dimension-checked against the first row of the batch.
#[derive(Debug, Clone)]
pub struct OllamaEncoder {
    client: Client,
    endpoint: String,
    model: String,
    max_retries: usize,
}

impl OllamaEncoder {
    pub fn new(config: EncoderConfig) -> Result<Self> {
        if config.model.trim().is_empty() {
            return Err(Error::Encoding("missing embedding model name".to_string()));
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Encoding(format!("failed to build HTTP client: {e}")))?;
        let endpoint = format!("{}/api/embeddings", config.host.trim_end_matches('/'));
        Ok(Self {
            client,
            endpoint,
            model: config.model,
            max_retries: config.max_retries.max(1),
        })
    }

    /// Request the raw embedding for one text, retrying transient failures.
    fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        let mut attempt = 0usize;
        loop {
            let request = EmbeddingRequest {
                model: &self.model,
                prompt: text,
            };
            let response = self.client.post(&self.endpoint).json(&request).send();
            match response {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        let parsed: EmbeddingResponse = resp.json().map_err(|e| {
                            encoding_error(text, format!("failed to parse response: {e}"))
                        })?;
                        if parsed.embedding.is_empty() {
                            return Err(encoding_error(text, "service returned empty embedding"));
                        }
                        return Ok(parsed.embedding);
                    }

                    let body = resp
                        .text()
                        .unwrap_or_else(|_| "<body unavailable>".to_string());
                    if should_retry(status) && attempt + 1 < self.max_retries {
                        attempt += 1;
                        debug!(attempt, %status, "retrying embedding request");
                        thread::sleep(retry_backoff(attempt));
                        continue;
                    }
                    return Err(encoding_error(text, format!("HTTP {status}: {body}")));
                }
                Err(err) => {
                    if is_retryable_error(&err) && attempt + 1 < self.max_retries {
                        attempt += 1;
                        debug!(attempt, error = %err, "retrying embedding request");
                        thread::sleep(retry_backoff(attempt));
                        continue;
                    }
                    return Err(encoding_error(text, err.to_string()));
                }
            }
        }
    }
}

impl TextEncoder for OllamaEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vector>> {
        if texts.is_empty() {
            return Err(Error::Encoding(
                "encode called with an empty batch".to_string(),
            ));
        }

        let mut vectors = Vec::with_capacity(texts.len());
        let mut dim = 0usize;
        for text in texts {
            let row = self.embed_one(text)?;
            if dim == 0 {
                dim = row.len();
            } else if row.len() != dim {
                return Err(encoding_error(
                    text,
                    format!("dimension {} differs from batch dimension {dim}", row.len()),
                ));
            }

            let mut vector = Vector::new(row);
            if vector.norm() <= f32::EPSILON {
                return Err(encoding_error(text, "zero-norm embedding"));
            }
            vector.normalize();
            vectors.push(vector);
        }
        Ok(vectors)
    }
}

fn encoding_error(text: &str, reason: impl std::fmt::Display) -> Error {
    Error::Encoding(format!("embedding {:?} failed: {reason}", truncate(text, 80)))
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn should_retry(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn is_retryable_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() || err.is_decode()
}

fn retry_backoff(attempt: usize) -> Duration {
    let capped = attempt.min(5) as u32;
    Duration::from_millis(250 * (1 << capped))
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}
