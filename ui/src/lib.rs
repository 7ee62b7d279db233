//! Shared UI crate for the SVGBench dashboard. Data handling lives in `core`,
//! Dioxus components in `results`, routed pages in `views`.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod results;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme stylesheet, linked by the web launcher and inlined by desktop.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;

    #[test]
    fn theme_asset_resolves_to_stylesheet() {
        assert!(super::THEME_CSS.to_string().ends_with(".css"));
    }
}
