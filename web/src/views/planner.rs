use leptos::{
    logging::{error, log, warn},
    prelude::*,
    task::spawn_local,
};
use shared_types::Coordinate;
use std::fmt::Display;

use crate::{
    components::SuggestionPanel,
    server::fetch_suggestions,
    state::{PlannerState, Resolution},
    views::map::map_surface::MapSurface,
};

pub const FAILURE_ALERT: &str =
    "Failed to fetch suggestions. Ensure the suggestion service is running.";

pub fn toggle_glyph(sidebar_open: bool) -> &'static str {
    if sidebar_open {
        "❮"
    } else {
        "❯"
    }
}

/// Logs how a request ended and raises `alert` once if it failed. Stale
/// responses are only logged.
pub fn report_resolution<E: Display>(
    resolution: &Resolution<E>,
    coordinate: Coordinate,
    mut alert: impl FnMut(&str),
) {
    match resolution {
        Resolution::Applied => {}
        Resolution::Failed(err) => {
            error!("Error fetching suggestions: {}", err);
            alert(FAILURE_ALERT);
        }
        Resolution::Stale => {
            warn!("Discarding response for superseded location {:?}", coordinate);
        }
    }
}

/// Owns the planner state and wires map clicks to suggestion requests.
#[component]
pub fn PlannerPage() -> impl IntoView {
    let state = RwSignal::new(PlannerState::default());

    let weather = Memo::new(move |_| state.with(|s| s.weather.clone()));
    let suggestions = Memo::new(move |_| state.with(|s| s.suggestions.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let sidebar_open = Memo::new(move |_| state.with(|s| s.sidebar_open));

    let select_location = move |latitude: f64, longitude: f64| {
        let coordinate = Coordinate::new(latitude, longitude);
        let ticket = state.write().begin_request();
        log!("Sending request to suggestion service: {:?}", coordinate);

        spawn_local(async move {
            let outcome = fetch_suggestions(coordinate).await;
            if let Ok(response) = &outcome {
                log!(
                    "Received {} suggestions for {:?}",
                    response.suggestions.len(),
                    coordinate
                );
            }

            let resolution = state.write().resolve(ticket, outcome);
            report_resolution(&resolution, coordinate, |message| {
                if let Err(err) = window().alert_with_message(message) {
                    error!("Could not show alert: {:?}", err);
                }
            });
        });
    };

    let toggle_sidebar = move |_ev: web_sys::MouseEvent| {
        state.update(PlannerState::toggle_sidebar);
    };

    view! {
        <div class="planner-container">
            <div class="planner-map">
                <MapSurface on_location_select=select_location />
            </div>

            <div class="planner-sidebar" class:collapsed={move || !sidebar_open.get()}>
                <SuggestionPanel weather=weather suggestions=suggestions loading=loading />
                <button class="sidebar-toggle" title="Toggle Sidebar" on:click=toggle_sidebar>
                    {move || toggle_glyph(sidebar_open.get())}
                </button>
            </div>

            <div class="planner-title">
                <h1>"Weather & Map Planner"</h1>
            </div>
        </div>
    }
}
