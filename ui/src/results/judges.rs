use dioxus::prelude::*;

use crate::core::format::format_model_name;
use crate::core::Notice;
use crate::results::use_dashboard;
use crate::t;

/// Toggle which judges feed the aggregated scores.
#[component]
pub fn JudgeFilter() -> Element {
    let store = use_dashboard();
    let Some((data, state)) = store.ready() else {
        return rsx! {};
    };

    if !data.aggregator.supports_judge_filter() {
        return rsx! {
            section { class: "results-card judge-filter",
                div { class: "results-card__header", h2 { {t!("judges-title")} } }
                p { class: "results-card__placeholder", {t!("judges-unavailable")} }
            }
        };
    }

    let selection = state.judges().clone();
    let judges: Vec<(String, bool)> = selection
        .universe()
        .iter()
        .map(|judge| (judge.clone(), selection.is_active(judge)))
        .collect();
    let all_active = selection.is_all_active();
    let active = selection.active_count();
    let total = judges.len();
    let notice = state.notice();
    let all_class = chip_class(all_active);

    rsx! {
        section { class: "results-card judge-filter",
            div { class: "results-card__header",
                h2 { {t!("judges-title")} }
                span { class: "results-card__meta", {t!("judges-active", active = active, total = total)} }
            }

            div { class: "chip-row",
                button {
                    r#type: "button",
                    class: "{all_class}",
                    onclick: move |_| store.update(|state, aggregator| state.reset_judges(aggregator)),
                    {t!("judges-all")}
                }
                for (judge, is_active) in judges {
                    {
                        let toggle = judge.clone();
                        let class = chip_class(is_active);
                        rsx! {
                            button {
                                key: "{judge}",
                                r#type: "button",
                                class: "{class}",
                                aria_pressed: "{is_active}",
                                onclick: move |_| {
                                    let judge = toggle.clone();
                                    store.update(move |state, aggregator| state.toggle_judge(aggregator, &judge));
                                },
                                "{judge}"
                            }
                        }
                    }
                }
            }

            if notice == Some(Notice::LastJudge) {
                div { class: "notice notice--warning", role: "status",
                    span { {t!("judges-last-notice")} }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| store.update(|state, _| state.dismiss_notice()),
                        {t!("notice-dismiss")}
                    }
                }
            }
        }
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "chip chip--active"
    } else {
        "chip"
    }
}

/// Show or hide model columns of the per-prompt table.
#[component]
pub fn ModelVisibility() -> Element {
    let store = use_dashboard();
    let Some((_, state)) = store.ready() else {
        return rsx! {};
    };

    let models: Vec<(String, String, bool)> = state
        .view()
        .models()
        .into_iter()
        .map(|model| {
            let visible = state.is_model_visible(&model);
            let label = format_model_name(&model);
            (model, label, visible)
        })
        .collect();

    rsx! {
        section { class: "results-card model-visibility",
            div { class: "results-card__header",
                h2 { {t!("models-title")} }
            }
            div { class: "chip-row",
                for (model, label, visible) in models {
                    {
                        let toggle = model.clone();
                        rsx! {
                            label { key: "{model}", class: "chip chip--checkbox",
                                input {
                                    r#type: "checkbox",
                                    checked: visible,
                                    onchange: move |_| {
                                        let model = toggle.clone();
                                        store.update(move |state, _| state.toggle_model_visibility(&model));
                                    },
                                }
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
