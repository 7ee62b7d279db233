mod summary;
pub use summary::SummaryTable;

mod prompt_table;
pub use prompt_table::{LoadFailureRow, PromptScoresTable};

mod detail;
pub use detail::PromptDetailModal;

mod judges;
pub use judges::{JudgeFilter, ModelVisibility};

mod insights;
pub use insights::InsightCards;

mod findings;
pub use findings::{KeyFindings, PromptBreakdowns};

mod utils;
pub(crate) use utils::*;

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::aggregate::Aggregator;
use crate::core::{load_dashboard, DashboardConfig, DashboardData, DashboardState};

/// Progress of the one-shot document load.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Rc<DashboardData>),
    Failed(String),
}

/// Shared handles to the loaded data and the interactive state.
#[derive(Clone, Copy)]
pub struct DashboardStore {
    pub load: Signal<LoadState>,
    pub state: Signal<Option<DashboardState>>,
    /// Prompt whose detail modal is open.
    pub selected_prompt: Signal<Option<u32>>,
}

impl DashboardStore {
    /// The loaded data and current state, once both are available.
    pub fn ready(&self) -> Option<(Rc<DashboardData>, DashboardState)> {
        let data = match &*self.load.read() {
            LoadState::Ready(data) => Rc::clone(data),
            _ => return None,
        };
        let state = (*self.state.read()).clone()?;
        Some((data, state))
    }

    /// Replace the state with the result of `transition`.
    pub fn update(mut self, transition: impl FnOnce(&DashboardState, &Aggregator) -> DashboardState) {
        let data = match &*self.load.peek() {
            LoadState::Ready(data) => Rc::clone(data),
            _ => return,
        };
        let next = (*self.state.peek())
            .as_ref()
            .map(|current| transition(current, &data.aggregator));
        if let Some(next) = next {
            self.state.set(Some(next));
        }
    }
}

/// Start loading the dashboard documents and provide the store to descendants.
pub fn use_dashboard_provider() -> DashboardStore {
    let mut load = use_signal(LoadState::default);
    let mut state = use_signal(|| None::<DashboardState>);
    let selected_prompt = use_signal(|| None::<u32>);

    use_future(move || async move {
        match load_dashboard(DashboardConfig::load()).await {
            Ok(data) => match DashboardState::initial(&data.aggregator) {
                Ok(initial) => {
                    state.set(Some(initial));
                    load.set(LoadState::Ready(Rc::new(data)));
                }
                Err(err) => load.set(LoadState::Failed(err.to_string())),
            },
            Err(err) => {
                tracing::error!("benchmark data unavailable: {err}");
                load.set(LoadState::Failed(err.to_string()));
            }
        }
    });

    use_context_provider(|| DashboardStore {
        load,
        state,
        selected_prompt,
    })
}

pub fn use_dashboard() -> DashboardStore {
    use_context::<DashboardStore>()
}
