use leptos::prelude::*;
use shared_types::{SuggestionEntry, WeatherSummary};

use crate::{
    components::{
        loading::LoadingView,
        suggestion_card::{SuggestionCard, SuggestionCardModel},
        weather_card::WeatherCard,
    },
    state::PanelView,
};

pub fn suggestions_heading(count: usize) -> String {
    format!("Top {} Suggestions", count)
}

/// Sidebar contents. Holds no state of its own: everything is derived from
/// the three inputs.
#[component]
pub fn SuggestionPanel(
    #[prop(into)] weather: Signal<Option<WeatherSummary>>,
    #[prop(into)] suggestions: Signal<Vec<SuggestionEntry>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let body = move || {
        let selected = PanelView::select(
            loading.get(),
            weather.with(Option::is_some),
            suggestions.with(|s| !s.is_empty()),
        );

        match selected {
            PanelView::Loading => view! {
                <LoadingView message=Some("Loading suggestions...".to_string()) />
            }
            .into_any(),
            PanelView::Welcome => view! {
                <div class="suggestion-welcome">
                    <h2>"Welcome!"</h2>
                    <p>"Drop a pin on the map to get sightseeing suggestions."</p>
                </div>
            }
            .into_any(),
            PanelView::Populated => {
                let entries = suggestions.get();
                let cards = entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| SuggestionCardModel::new(index, entry))
                    .collect::<Vec<_>>();

                view! {
                    <div class="suggestion-panel">
                        {weather.get().map(|weather| view! { <WeatherCard weather=weather /> })}
                        <h3 class="suggestion-heading">{suggestions_heading(cards.len())}</h3>
                        {if cards.is_empty() {
                            view! {
                                <p class="suggestion-empty">"No spots found nearby."</p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="suggestion-list">
                                    {cards
                                        .into_iter()
                                        .map(|model| view! { <SuggestionCard model=model /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }}
                    </div>
                }
                .into_any()
            }
        }
    };

    view! { <div class="suggestion-sidebar">{body}</div> }
}


#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use shared_types::CrowdLevel;

    fn weather() -> WeatherSummary {
        WeatherSummary {
            condition_category: "Clouds".to_string(),
            description: "Overcast Clouds".to_string(),
            temperature_celsius: 21.4,
        }
    }

    fn spot(name: &str, crowd_level: CrowdLevel) -> SuggestionEntry {
        SuggestionEntry {
            id: name.to_lowercase(),
            name: name.to_string(),
            latitude: 35.0,
            longitude: 139.0,
            rating: 4.5,
            rating_count: 120,
            category_tags: vec!["park".to_string()],
            photo_reference: String::new(),
            crowd_level,
            weather_suitability: "Good for walking".to_string(),
            score: 0.9,
        }
    }

    fn render(weather: Option<WeatherSummary>, suggestions: Vec<SuggestionEntry>) -> String {
        let owner = Owner::new();
        owner.set();
        view! {
            <SuggestionPanel
                weather=Signal::stored(weather)
                suggestions=Signal::stored(suggestions)
                loading=Signal::stored(false)
            />
        }
        .to_html()
    }

    #[test]
    fn weather_without_spots_shows_empty_notice() {
        let html = render(Some(weather()), Vec::new());

        assert!(html.contains("Current Weather"));
        assert!(html.contains("21°C"));
        assert!(html.contains("overcast clouds"));
        assert!(html.contains("Top 0 Suggestions"));
        assert!(html.contains("No spots found nearby."));
        assert!(!html.contains("suggestion-card"));
    }

    #[test]
    fn cards_render_in_service_order() {
        let html = render(
            Some(weather()),
            vec![
                spot("Park", CrowdLevel::Low),
                spot("Temple", CrowdLevel::Other("Packed".to_string())),
            ],
        );

        assert!(html.contains("Top 2 Suggestions"));
        assert!(!html.contains("No spots found nearby."));
        let park = html.find("Park").expect("park card");
        let temple = html.find("Temple").expect("temple card");
        assert!(park < temple);
        assert!(html.find("#1").expect("first rank") < html.find("#2").expect("second rank"));
        assert!(html.contains("Crowd: Packed"));
    }

    #[test]
    fn nothing_selected_yet_shows_welcome() {
        let html = render(None, Vec::new());

        assert!(html.contains("Welcome!"));
        assert!(!html.contains("Current Weather"));
    }
}
