//! Narrative audit summaries.
//!
//! A compact [`SummaryPayload`] (counts plus a capped sample of missing and
//! extra items) is embedded in a fixed auditor prompt and sent to a text
//! generation endpoint. The reply is returned verbatim. Missing credentials
//! and failed calls resolve to fixed messages instead of errors, so a summary
//! never blocks the rest of the audit.
//!
//! # Example
//!
//! ```no_run
//! use audit_summary::{SummarySettings, generate_report};
//!
//! let settings = SummarySettings::from_env();
//! let text = generate_report(&settings, &[]);
//! println!("{text}");
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod payload;

pub use client::{GeminiClient, TextGenerator};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_MODEL, SummarySettings};
pub use error::{Result, SummaryError};
pub use payload::{SAMPLE_LIMIT, SummaryPayload, build_prompt};

use audit_model::Asset;

/// Shown when no API key is configured.
pub const MISSING_KEY_MESSAGE: &str = "缺少 API 密钥，无法生成 AI 报告。";

/// Shown when the call fails.
pub const FAILURE_MESSAGE: &str = "由于错误，无法生成 AI 报告。";

/// Shown when the model answers with no text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "无法生成分析结果。";

/// Generates the summary with the configured endpoint.
///
/// Returns [`MISSING_KEY_MESSAGE`] without any network access when no API
/// key is set.
pub fn generate_report(settings: &SummarySettings, assets: &[Asset]) -> String {
    if !settings.has_api_key() {
        tracing::warn!("summary skipped: no API key configured");
        return MISSING_KEY_MESSAGE.to_string();
    }
    match GeminiClient::new(settings) {
        Ok(client) => generate_report_with(&client, assets),
        Err(error) => {
            tracing::error!(%error, "summary client could not be created");
            FAILURE_MESSAGE.to_string()
        }
    }
}

/// Generates the summary with any [`TextGenerator`].
pub fn generate_report_with(generator: &dyn TextGenerator, assets: &[Asset]) -> String {
    let payload = SummaryPayload::from_assets(assets);
    let prompt = match build_prompt(&payload) {
        Ok(prompt) => prompt,
        Err(error) => {
            tracing::error!(%error, "summary prompt could not be built");
            return FAILURE_MESSAGE.to_string();
        }
    };
    match generator.generate(&prompt) {
        Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_MESSAGE.to_string(),
        Ok(text) => text,
        Err(error) => {
            tracing::error!(%error, "summary generation failed");
            FAILURE_MESSAGE.to_string()
        }
    }
}
