//! Fetch-once loading of the three dashboard documents.
//!
//! The primary dataset is mandatory. The insights and evaluations documents
//! are optional: any failure to fetch or parse them is logged and the
//! dependent feature is simply unavailable.

use super::aggregate::Aggregator;
use super::config::{DashboardConfig, DataSources};
use super::error::LoadError;
use super::model::{BenchmarkDataset, EvaluationsDocument, InsightsDocument};

/// Everything the dashboard renders from, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub config: DashboardConfig,
    pub aggregator: Aggregator,
    pub insights: Option<InsightsDocument>,
}

impl DashboardData {
    /// Validate and combine raw document bodies.
    pub fn assemble(
        config: DashboardConfig,
        dataset: Result<String, LoadError>,
        insights: Result<String, LoadError>,
        evaluations: Result<String, LoadError>,
    ) -> Result<Self, LoadError> {
        let dataset_name = config.data.dataset.clone();
        let dataset = BenchmarkDataset::from_json(&dataset?).map_err(|source| LoadError::Invalid {
            document: dataset_name,
            source,
        })?;

        let insights = optional(&config.data.insights, insights, |raw| {
            InsightsDocument::from_json(raw)
        })
        .filter(|doc| !doc.is_empty());
        let evaluations = optional(&config.data.evaluations, evaluations, |raw| {
            EvaluationsDocument::from_json(raw)
        });

        let aggregator = Aggregator::new(dataset, evaluations);
        tracing::info!(
            models = aggregator.models().len(),
            prompts = aggregator.prompts().len(),
            judges = aggregator.judges().len(),
            judge_filter = aggregator.supports_judge_filter(),
            insights = insights.is_some(),
            "dashboard data loaded"
        );

        Ok(Self {
            config,
            aggregator,
            insights,
        })
    }
}

fn optional<T, E: std::fmt::Display>(
    document: &str,
    body: Result<String, LoadError>,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Option<T> {
    let raw = match body {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("optional document unavailable: {err}");
            return None;
        }
    };
    match parse(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("ignoring malformed {document}: {err}");
            None
        }
    }
}

/// Fetch all three documents concurrently and assemble them.
pub async fn load_dashboard(config: DashboardConfig) -> Result<DashboardData, LoadError> {
    let sources = &config.data;
    let (dataset, insights, evaluations) = futures::join!(
        fetch_document(sources, &sources.dataset),
        fetch_document(sources, &sources.insights),
        fetch_document(sources, &sources.evaluations),
    );
    DashboardData::assemble(config.clone(), dataset, insights, evaluations)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_document(sources: &DataSources, name: &str) -> Result<String, LoadError> {
    use gloo_net::http::Request;

    let location = sources.location(name);
    let fetch_error = |reason: String| LoadError::Fetch {
        document: name.to_string(),
        reason,
    };

    let response = Request::get(&location)
        .send()
        .await
        .map_err(|err| fetch_error(err.to_string()))?;
    if !response.ok() {
        return Err(LoadError::Status {
            document: name.to_string(),
            status: response.status(),
        });
    }
    response.text().await.map_err(|err| fetch_error(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_document(sources: &DataSources, name: &str) -> Result<String, LoadError> {
    let path = native_data_dir(sources).join(sources.location(name));
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| LoadError::Fetch {
            document: name.to_string(),
            reason: format!("{}: {err}", path.display()),
        })
}

/// Configured directory, else the per-user data dir, else the bundled
/// `assets/data` or `data` next to the executable, else `./data`.
#[cfg(not(target_arch = "wasm32"))]
fn native_data_dir(sources: &DataSources) -> std::path::PathBuf {
    use std::path::PathBuf;

    if let Some(dir) = &sources.data_dir {
        return PathBuf::from(dir);
    }

    let user_dir = directories::ProjectDirs::from("net", "SVGBench", "SVGBench")
        .map(|dirs| dirs.data_dir().join("data"));
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from));
    let bundled = exe_dir
        .into_iter()
        .flat_map(|dir| [dir.join("assets").join("data"), dir.join("data")]);

    user_dir
        .into_iter()
        .chain(bundled)
        .find(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "model_rankings": [
            {"model": "alpha", "rank": 1, "avg_total_score": 80.0},
            {"model": "beta", "rank": 2, "avg_total_score": 60.0}
        ],
        "prompt_model_scores": [
            {"prompt": 1, "prompt_text": "A pelican riding a bicycle", "alpha": 80.0, "beta": 60.0}
        ]
    }"#;

    fn missing(document: &str) -> Result<String, LoadError> {
        Err(LoadError::Status {
            document: document.to_string(),
            status: 404,
        })
    }

    #[test]
    fn optional_documents_degrade_silently() {
        let data = DashboardData::assemble(
            DashboardConfig::default(),
            Ok(DATASET.to_string()),
            Ok("{ not json".to_string()),
            missing("evaluations_by_prompt.json"),
        )
        .unwrap();
        assert!(data.insights.is_none());
        assert!(!data.aggregator.supports_judge_filter());
        assert_eq!(data.aggregator.models(), &["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn mandatory_failures_are_fatal() {
        let err = DashboardData::assemble(
            DashboardConfig::default(),
            missing("benchmark_final.json"),
            Ok("{}".to_string()),
            Ok("{}".to_string()),
        )
        .unwrap_err();
        assert_eq!(err.document(), "benchmark_final.json");

        let err = DashboardData::assemble(
            DashboardConfig::default(),
            Ok(r#"{"model_rankings": 3}"#.to_string()),
            missing("benchmark_insights.json"),
            missing("evaluations_by_prompt.json"),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Invalid { .. }));
    }

    #[test]
    fn empty_insights_count_as_unavailable() {
        let data = DashboardData::assemble(
            DashboardConfig::default(),
            Ok(DATASET.to_string()),
            Ok("{}".to_string()),
            missing("evaluations_by_prompt.json"),
        )
        .unwrap();
        assert!(data.insights.is_none());
    }
}
