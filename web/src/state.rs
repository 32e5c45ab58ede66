//! Planner state owned by the page coordinator.
//!
//! Children never mutate this directly; they read derived signals and emit
//! events that end up in [`PlannerState::begin_request`],
//! [`PlannerState::resolve`] or [`PlannerState::toggle_sidebar`].

use shared_types::{SuggestResponse, SuggestionEntry, WeatherSummary};

/// Issued for every outbound suggestion request. Only the most recently issued
/// ticket may change the state when its response arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// What happened when a response was handed back to the state.
#[derive(Debug, PartialEq)]
pub enum Resolution<E> {
    Applied,
    Failed(E),
    /// A newer request was issued after this one; nothing changed.
    Stale,
}

/// Which of the three panel views the current state selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelView {
    Loading,
    Welcome,
    Populated,
}

impl PanelView {
    pub fn select(loading: bool, has_weather: bool, has_suggestions: bool) -> Self {
        if loading {
            PanelView::Loading
        } else if !has_weather && !has_suggestions {
            PanelView::Welcome
        } else {
            PanelView::Populated
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlannerState {
    pub weather: Option<WeatherSummary>,
    pub suggestions: Vec<SuggestionEntry>,
    pub loading: bool,
    pub sidebar_open: bool,
    latest_ticket: u64,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            weather: None,
            suggestions: Vec::new(),
            loading: false,
            sidebar_open: true,
            latest_ticket: 0,
        }
    }
}

impl PlannerState {
    pub fn begin_request(&mut self) -> RequestTicket {
        self.latest_ticket += 1;
        self.loading = true;
        self.sidebar_open = true;
        RequestTicket(self.latest_ticket)
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Success replaces weather and suggestions together. Failure leaves them
    /// untouched. Either way `loading` is cleared last. Outcomes of superseded
    /// tickets are ignored entirely, `loading` included, since the newer
    /// request is still in flight.
    pub fn resolve<E>(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<SuggestResponse, E>,
    ) -> Resolution<E> {
        if ticket.0 != self.latest_ticket {
            return Resolution::Stale;
        }

        let resolution = match outcome {
            Ok(response) => {
                self.weather = response.weather;
                self.suggestions = response.suggestions;
                Resolution::Applied
            }
            Err(err) => Resolution::Failed(err),
        };
        self.loading = false;
        resolution
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn panel_view(&self) -> PanelView {
        PanelView::select(
            self.loading,
            self.weather.is_some(),
            !self.suggestions.is_empty(),
        )
    }
}
