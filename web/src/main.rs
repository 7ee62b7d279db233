use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::results::use_dashboard_provider;
use ui::views::{Dashboard, Findings, Prompts};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/findings")]
    Findings {},
    #[route("/prompts")]
    Prompts {},
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_findings(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Findings {}, "{label}" })
}
fn nav_prompts(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Prompts {}, "{label}" })
}

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger unavailable: {err}");
    }
    tracing::info!("starting SVGBench dashboard (web)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        findings: nav_findings,
        prompts: nav_prompts,
    });

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_dashboard_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
