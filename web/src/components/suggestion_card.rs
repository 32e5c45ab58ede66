use leptos::prelude::*;
use shared_types::{CrowdLevel, SuggestionEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Yellow,
    Orange,
    Red,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Green => "badge badge-green",
            BadgeTone::Yellow => "badge badge-yellow",
            BadgeTone::Orange => "badge badge-orange",
            BadgeTone::Red => "badge badge-red",
        }
    }

    pub fn for_suitability(suitability: &str) -> Self {
        if suitability.contains("Good") {
            BadgeTone::Green
        } else {
            BadgeTone::Orange
        }
    }

    pub fn for_crowd(level: &CrowdLevel) -> Self {
        match level {
            CrowdLevel::Low => BadgeTone::Green,
            CrowdLevel::Medium => BadgeTone::Yellow,
            _ => BadgeTone::Red,
        }
    }
}

/// Display strings for one ranked suggestion.
#[derive(Clone, Debug, PartialEq)]
pub struct SuggestionCardModel {
    pub rank_label: String,
    pub name: String,
    pub rating_label: String,
    pub suitability_label: String,
    pub suitability_tone: BadgeTone,
    pub crowd_label: String,
    pub crowd_tone: BadgeTone,
    pub footer: String,
}

impl SuggestionCardModel {
    pub fn new(index: usize, entry: &SuggestionEntry) -> Self {
        Self {
            rank_label: format!("#{}", index + 1),
            name: entry.name.clone(),
            rating_label: format!("★ {}", entry.rating),
            suitability_label: format!("Weather: {}", entry.weather_suitability),
            suitability_tone: BadgeTone::for_suitability(&entry.weather_suitability),
            crowd_label: format!("Crowd: {}", entry.crowd_level),
            crowd_tone: BadgeTone::for_crowd(&entry.crowd_level),
            footer: footer_line(entry),
        }
    }
}

fn footer_line(entry: &SuggestionEntry) -> String {
    let tags = entry
        .category_tags
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} • {} reviews", tags, entry.rating_count)
}

#[component]
pub fn SuggestionCard(model: SuggestionCardModel) -> impl IntoView {
    view! {
        <div class="suggestion-card">
            <div class="suggestion-card-header">
                <h4 class="suggestion-name">
                    <span class="suggestion-rank">{model.rank_label}</span>
                    {model.name}
                </h4>
                <span class="badge badge-rating">{model.rating_label}</span>
            </div>
            <div class="suggestion-badges">
                <span class={model.suitability_tone.class()}>{model.suitability_label}</span>
                <span class={model.crowd_tone.class()}>{model.crowd_label}</span>
            </div>
            <div class="suggestion-footer">{model.footer}</div>
        </div>
    }
}
