use dioxus::prelude::*;

use crate::core::images::placeholder_data_uri;
use crate::core::model::Criterion;
use crate::core::sort::RankingColumn;
use crate::t;

pub(crate) fn criterion_label(criterion: Criterion) -> String {
    match criterion {
        Criterion::PromptAdherence => t!("criterion-prompt-adherence"),
        Criterion::StructuralCorrectness => t!("criterion-structural-correctness"),
        Criterion::PhysicalPlausibility => t!("criterion-physical-plausibility"),
        Criterion::Completeness => t!("criterion-completeness"),
        Criterion::VisualCoherence => t!("criterion-visual-coherence"),
    }
}

pub(crate) fn ranking_column_label(column: RankingColumn) -> String {
    match column {
        RankingColumn::Rank => t!("column-rank"),
        RankingColumn::Model => t!("column-model"),
        RankingColumn::Total => t!("column-total"),
        RankingColumn::Criterion(criterion) => {
            format!("{} ({})", criterion_label(criterion), criterion.weight_label())
        }
        RankingColumn::PromptsEvaluated => t!("column-prompts"),
    }
}

/// Gold, silver and bronze for the podium.
pub(crate) fn rank_badge(rank: u32) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

/// Generated SVG linking to its full-size original; swaps to a placeholder if it fails to load.
#[component]
pub(crate) fn SvgThumbnail(src: String, alt: String, size: u32, fallback_label: String) -> Element {
    let mut failed = use_signal(|| false);
    let shown = if failed() {
        placeholder_data_uri(size, &fallback_label)
    } else {
        src.clone()
    };
    let failed_src = src.clone();

    rsx! {
        a {
            class: "thumbnail",
            href: "{src}",
            target: "_blank",
            rel: "noopener noreferrer",
            title: {t!("image-full-size")},
            img {
                class: "thumbnail__image",
                src: "{shown}",
                alt: "{alt}",
                loading: "lazy",
                style: "max-height: {size}px;",
                onerror: move |_| {
                    if !failed() {
                        tracing::warn!(src = %failed_src, "image failed to load; showing placeholder");
                        failed.set(true);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podium_badges_stop_at_third() {
        assert_eq!(rank_badge(1), Some("🥇"));
        assert_eq!(rank_badge(3), Some("🥉"));
        assert_eq!(rank_badge(4), None);
        assert_eq!(rank_badge(0), None);
    }

    #[test]
    fn criterion_columns_carry_weights() {
        crate::i18n::init();
        let label = ranking_column_label(RankingColumn::Criterion(Criterion::PromptAdherence));
        assert!(label.ends_with("(30%)"), "{label}");
    }
}
