pub mod loading;
pub mod suggestion_card;
pub mod suggestion_panel;
pub mod weather_card;

pub use suggestion_panel::SuggestionPanel;
