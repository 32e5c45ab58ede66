use leptos::prelude::*;
use shared_types::WeatherSummary;

/// Whole degrees, halves rounded up: 21.4 -> "21°C", -2.5 -> "-2°C".
pub fn format_temperature(celsius: f64) -> String {
    // `celsius + 0.5` would round 0.49999999999999994 up to 1.
    let floor = celsius.floor();
    let rounded = if celsius - floor >= 0.5 { floor + 1.0 } else { floor };
    format!("{}°C", rounded as i64)
}

#[component]
pub fn WeatherCard(weather: WeatherSummary) -> impl IntoView {
    view! {
        <div class="weather-card">
            <h3 class="weather-card-title">"Current Weather"</h3>
            <div class="weather-card-body">
                <div>
                    <span class="weather-temperature">
                        {format_temperature(weather.temperature_celsius)}
                    </span>
                    <p class="weather-description">{weather.description.to_lowercase()}</p>
                </div>
                <span class="badge badge-condition">{weather.condition_category}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_degree() {
        assert_eq!(format_temperature(21.4), "21°C");
        assert_eq!(format_temperature(21.5), "22°C");
        assert_eq!(format_temperature(25.0), "25°C");
    }

    #[test]
    fn negative_halves_round_up() {
        assert_eq!(format_temperature(-2.5), "-2°C");
        assert_eq!(format_temperature(-2.6), "-3°C");
        assert_eq!(format_temperature(-0.4), "0°C");
    }

    #[test]
    fn value_just_below_half_rounds_down() {
        assert_eq!(format_temperature(0.499_999_999_999_999_94), "0°C");
        assert_eq!(format_temperature(0.5), "1°C");
    }
}
