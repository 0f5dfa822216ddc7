//! Render options, parsed from TOML.
//!
//! Every key is optional; empty text yields `RenderConfig::default()`.
//! Unknown keys are accepted by serde and logged as a warning so typos do
//! not go unnoticed.
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid TOML in render config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Render config too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration
// ============================================================================

/// Options shared by the format renderers.
///
/// All fields use `#[serde(default)]` so any subset of keys can be given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix XML documents with `<?xml version="1.0" encoding="utf-8"?>`.
    pub xml_declaration: bool,

    /// `<generator>` text for RSS channels whose feed names no generator.
    pub default_generator: String,

    /// URL written to the RSS `<docs>` element. Empty omits the element.
    pub rss_docs: String,

    /// Spaces per indent level in JSON Feed output. 0 writes compact JSON.
    pub json_indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            default_generator: "feedwright".to_string(),
            rss_docs: "https://www.rssboard.org/rss-specification".to_string(),
            json_indent: 4,
        }
    }
}

impl RenderConfig {
    /// Maximum accepted config text (64 KiB).
    const MAX_SIZE: usize = 65_536;

    const KNOWN_KEYS: [&'static str; 4] = [
        "xml_declaration",
        "default_generator",
        "rss_docs",
        "json_indent",
    ];

    /// Parse options from TOML text.
    ///
    /// - Empty or whitespace-only text → `Ok(RenderConfig::default())`
    /// - Invalid TOML or a wrongly typed value → `Err(ConfigError::Parse)`
    /// - Text over 64 KiB → `Err(ConfigError::TooLarge)`
    /// - Unknown keys → accepted, logged as warning
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        if content.len() > Self::MAX_SIZE {
            return Err(ConfigError::TooLarge(format!(
                "Render config is {} bytes (max {} bytes)",
                content.len(),
                Self::MAX_SIZE
            )));
        }

        if content.trim().is_empty() {
            tracing::debug!("Render config is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in render config, ignoring");
                }
            }
        }

        let config: RenderConfig = toml::from_str(content)?;
        tracing::info!(
            xml_declaration = config.xml_declaration,
            json_indent = config.json_indent,
            "Parsed render configuration"
        );
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
