//! End-to-end checks of the load → aggregate → state pipeline against the
//! fixture documents in `tests/fixtures`.
//!
//! The fixture reference data (`benchmark_final.json`) was produced by
//! averaging every judge, so re-aggregating with all judges active must land
//! on the same numbers up to the two-decimal rounding of the document.

use std::path::PathBuf;

use ui::core::config::DataSources;
use ui::core::insights::{generate_insights, Insight};
use ui::core::sort::RankingColumn;
use ui::core::template::evaluation_prompt;
use ui::core::{load_dashboard, DashboardConfig, DashboardData, DashboardState, LoadError, Notice};

const TOLERANCE: f64 = 0.01;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> Result<String, LoadError> {
    std::fs::read_to_string(fixtures_dir().join(name)).map_err(|err| LoadError::Fetch {
        document: name.to_string(),
        reason: err.to_string(),
    })
}

fn assemble(insights: &str) -> DashboardData {
    DashboardData::assemble(
        DashboardConfig::default(),
        fixture("benchmark_final.json"),
        fixture(insights),
        fixture("evaluations_by_prompt.json"),
    )
    .expect("fixture documents assemble")
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= TOLERANCE
}

#[test]
fn all_judges_reproduce_reference_rankings() {
    let data = assemble("benchmark_insights.json");
    let aggregator = &data.aggregator;
    assert!(aggregator.supports_judge_filter());
    assert_eq!(aggregator.judges(), &["judge-alpha", "judge-beta"]);

    let state = DashboardState::initial(aggregator).unwrap();
    let reference = aggregator.reference_view();
    let recomputed = state.view();

    assert_eq!(recomputed.models(), reference.models());
    for (ours, theirs) in recomputed.rankings.iter().zip(&reference.rankings) {
        assert_eq!(ours.rank, theirs.rank, "rank of {}", ours.model);
        assert!(
            close(ours.avg_total_score, theirs.avg_total_score),
            "{}: {} vs {}",
            ours.model,
            ours.avg_total_score,
            theirs.avg_total_score
        );
        assert_eq!(ours.prompts_evaluated, theirs.prompts_evaluated);
    }

    for row in &reference.prompt_rows {
        let ours = recomputed.prompt_row(row.prompt).unwrap();
        for (model, score) in &row.scores {
            assert!(close(ours.score(model).unwrap(), *score), "prompt {} / {model}", row.prompt);
        }
    }

    let detail = recomputed.detail("claude-sonnet-4", 1).unwrap();
    assert_eq!(detail.judge_count, 2);
    assert!(close(detail.total_score, 85.48));
}

#[test]
fn single_judge_uses_only_its_scores() {
    let data = assemble("benchmark_insights.json");
    let aggregator = &data.aggregator;
    let state = DashboardState::initial(aggregator)
        .unwrap()
        .toggle_judge(aggregator, "judge-alpha");

    assert_eq!(state.judges().active_judges(), vec!["judge-beta"]);
    let view = state.view();
    assert_eq!(view.judges, vec!["judge-beta".to_string()]);

    let totals: Vec<(&str, f64)> = view
        .rankings
        .iter()
        .map(|r| (r.model.as_str(), r.avg_total_score))
        .collect();
    assert_eq!(totals[0].0, "claude-sonnet-4");
    assert!(close(totals[0].1, 83.1));
    assert_eq!(totals[1].0, "gpt-4o");
    assert!(close(totals[1].1, 77.65));
    assert!(close(totals[2].1, 53.3));

    let beta_totals = [
        ("claude-sonnet-4", 1, 83.5),
        ("claude-sonnet-4", 2, 82.7),
        ("gpt-4o", 1, 67.7),
        ("gpt-4o", 2, 87.6),
        ("gemini-2-5-pro", 1, 50.9),
        ("gemini-2-5-pro", 2, 55.7),
    ];
    for (model, prompt, expected) in beta_totals {
        let detail = view.detail(model, prompt).unwrap();
        assert_eq!(detail.judge_count, 1, "{model} / prompt {prompt}");
        assert!(close(detail.total_score, expected), "{model} / prompt {prompt}");
    }

    // judge-beta alone prefers gpt-4o on the lighthouse prompt.
    let lighthouse = view.prompt_row(2).unwrap();
    assert!(lighthouse.score("gpt-4o").unwrap() > lighthouse.score("claude-sonnet-4").unwrap());
    assert_eq!(view.detail("gpt-4o", 2).unwrap().judge_count, 1);
}

#[test]
fn last_judge_stays_active_with_notice() {
    let data = assemble("benchmark_insights.json");
    let aggregator = &data.aggregator;
    let single = DashboardState::initial(aggregator)
        .unwrap()
        .toggle_judge(aggregator, "judge-alpha");
    let refused = single.toggle_judge(aggregator, "judge-beta");

    assert_eq!(refused.notice(), Some(Notice::LastJudge));
    assert_eq!(refused.view(), single.view());

    let restored = refused.reset_judges(aggregator);
    assert!(restored.judges().is_all_active());
    assert_eq!(restored.notice(), None);
}

#[test]
fn sorting_survives_judge_changes() {
    let data = assemble("benchmark_insights.json");
    let aggregator = &data.aggregator;
    let state = DashboardState::initial(aggregator)
        .unwrap()
        .sort_summary(RankingColumn::Total)
        .toggle_judge(aggregator, "judge-beta");

    let order: Vec<String> = state.summary_rows().into_iter().map(|r| r.model).collect();
    assert_eq!(order, ["gemini-2-5-pro", "gpt-4o", "claude-sonnet-4"]);
}

#[test]
fn insight_cards_follow_current_rankings() {
    let data = assemble("benchmark_insights.json");
    let state = DashboardState::initial(&data.aggregator).unwrap();
    let insights = generate_insights(&state.view().rankings);
    assert_eq!(insights.len(), 6);
    assert!(matches!(
        &insights[0],
        Insight::TopPerformer { model, .. } if model == "claude-sonnet-4"
    ));
    assert!(matches!(
        &insights[5],
        Insight::Recommendation { runners_up, .. } if runners_up.len() == 2
    ));
}

#[test]
fn malformed_insights_only_disable_findings() {
    let data = assemble("malformed_insights.json");
    assert!(data.insights.is_none());
    assert!(data.aggregator.supports_judge_filter());
    assert_eq!(DashboardState::initial(&data.aggregator).unwrap().summary_rows().len(), 3);

    let full = assemble("benchmark_insights.json");
    let insights = full.insights.unwrap();
    assert_eq!(insights.key_findings.len(), 2);
    assert_eq!(insights.prompt_breakdowns[0].winner, "claude-sonnet-4");
}

#[test]
fn missing_evaluations_fall_back_to_reference_view() {
    let data = DashboardData::assemble(
        DashboardConfig::default(),
        fixture("benchmark_final.json"),
        fixture("benchmark_insights.json"),
        fixture("no_such_file.json"),
    )
    .unwrap();
    assert!(!data.aggregator.supports_judge_filter());

    let state = DashboardState::initial(&data.aggregator).unwrap();
    assert_eq!(state.view(), &data.aggregator.reference_view());
    let toggled = state.toggle_judge(&data.aggregator, "judge-alpha");
    assert_eq!(toggled.view(), state.view());
}

#[test]
fn judge_instruction_embeds_the_prompt_text() {
    let data = assemble("benchmark_insights.json");
    let text = data.aggregator.prompt_text(2).unwrap();
    let instruction = evaluation_prompt(text);
    assert!(instruction.contains("\"A lighthouse on a rocky cliff at sunset\""));
    assert!(instruction.contains("(30% weight)"));
    assert_eq!(data.aggregator.prompt_text(9), None);
}

#[tokio::test]
async fn loads_documents_from_configured_directory() {
    let config = DashboardConfig {
        data: DataSources {
            data_dir: Some(fixtures_dir().display().to_string()),
            ..DataSources::default()
        },
        ..DashboardConfig::default()
    };
    let data = load_dashboard(config).await.unwrap();
    assert_eq!(data.aggregator.models().len(), 3);
    assert_eq!(data.aggregator.prompts().len(), 2);
    assert!(data.insights.is_some());
}

#[tokio::test]
async fn missing_dataset_is_fatal() {
    let config = DashboardConfig {
        data: DataSources {
            data_dir: Some(fixtures_dir().display().to_string()),
            dataset: "absent.json".to_string(),
            ..DataSources::default()
        },
        ..DashboardConfig::default()
    };
    let err = load_dashboard(config).await.unwrap_err();
    assert_eq!(err.document(), "absent.json");
}
