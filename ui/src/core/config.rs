//! Dashboard configuration.
//!
//! Defaults live in `ui/dashboard.toml`, embedded at compile time. Every field
//! is optional in the file; omitted fields fall back to the built-in values.

use serde::Deserialize;

const EMBEDDED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dashboard.toml"));

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data: DataSources,
    pub images: ImageConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// Prefix joined with each document name. Relative to the page on web.
    pub base: String,
    pub dataset: String,
    pub insights: String,
    pub evaluations: String,
    /// Native builds read documents from this directory instead of the bundled resources.
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub base_url: String,
    /// Models whose image names use a two-digit prompt token (`prompt01`).
    pub zero_padded_models: Vec<String>,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            base: String::new(),
            dataset: "benchmark_final.json".to_string(),
            insights: "benchmark_insights.json".to_string(),
            evaluations: "evaluations_by_prompt.json".to_string(),
            data_dir: None,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: "https://gally.net/temp/20251107pelican-alternatives/svgs/".to_string(),
            zero_padded_models: vec![
                "google_gemini-3.0-pro".to_string(),
                "openai-gpt-5.1".to_string(),
                "openai-gpt-5.2-pro".to_string(),
            ],
        }
    }
}

impl DashboardConfig {
    /// The embedded configuration, or the defaults if it fails to parse.
    pub fn load() -> Self {
        match Self::from_toml_str(EMBEDDED) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("embedded dashboard.toml is invalid ({err}); using defaults");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

impl DataSources {
    pub fn location(&self, document: &str) -> String {
        format!("{}{document}", self.base)
    }
}
