//! Mock weather synthesis.
//!
//! Known cities get a reading jittered around a fixed base; anything else gets
//! a random placeholder that always renders as overcast.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::model::{Condition, ForecastEntry, WeatherReading};
use crate::random::{RandomSource, draw_int};

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const FORECAST_DAYS: usize = 5;

#[derive(Debug, Clone, Copy)]
struct CityProfile {
    key: &'static str,
    base_temp_c: i32,
    base_humidity_pct: i32,
    condition: Condition,
}

const fn profile(
    key: &'static str,
    base_temp_c: i32,
    base_humidity_pct: i32,
    condition: Condition,
) -> CityProfile {
    CityProfile { key, base_temp_c, base_humidity_pct, condition }
}

// Keys are lower-case; lookups lower-case the query before comparing.
static KNOWN_CITIES: &[CityProfile] = &[
    profile("london", 12, 75, Condition::Clouds),
    profile("new york", 18, 65, Condition::Clear),
    profile("tokyo", 20, 70, Condition::Clear),
    profile("paris", 15, 68, Condition::Clouds),
    profile("sydney", 22, 60, Condition::Clear),
    profile("dubai", 35, 45, Condition::Clear),
    profile("mumbai", 28, 80, Condition::Clouds),
    profile("delhi", 25, 55, Condition::Clear),
    profile("bangalore", 24, 65, Condition::Clouds),
    profile("kanpur", 26, 60, Condition::Clear),
    profile("moscow", 5, 70, Condition::Snow),
    profile("singapore", 30, 85, Condition::Rain),
];

// (temperature, condition, description) per forecast day.
static FORECAST_TEMPLATE: [(f64, Condition, &str); FORECAST_DAYS] = [
    (15.0, Condition::Clouds, "scattered clouds"),
    (18.0, Condition::Clear, "clear sky"),
    (16.0, Condition::Rain, "light rain"),
    (14.0, Condition::Clouds, "overcast clouds"),
    (17.0, Condition::Clear, "sunny"),
];

fn lookup(city_name: &str) -> Option<&'static CityProfile> {
    let key = city_name.to_lowercase();
    KNOWN_CITIES.iter().find(|p| p.key == key)
}

/// Fixed description for a condition tag. Everything that is not clear,
/// cloudy or rainy is described as light snow.
pub fn description_for(condition: Condition) -> &'static str {
    match condition {
        Condition::Clear => "clear sky",
        Condition::Clouds => "scattered clouds",
        Condition::Rain => "light rain",
        _ => "light snow",
    }
}

/// Upper-cases the first character and leaves the rest alone.
pub fn display_name(city_name: &str) -> String {
    let mut chars = city_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The reading shown before anything has been searched.
pub fn baseline_reading() -> WeatherReading {
    WeatherReading {
        location_name: "London".to_string(),
        temperature_c: 15.0,
        feels_like_c: 13.0,
        humidity_pct: 72,
        condition: Condition::Clouds,
        description: "scattered clouds".to_string(),
        wind_speed_mps: 4.5,
    }
}

/// Produce a mock reading for `city_name`.
///
/// The caller passes a non-empty, trimmed name. Random draws happen in the
/// order temperature, feels-like, humidity.
pub fn synthesize(city_name: &str, rng: &mut dyn RandomSource) -> WeatherReading {
    let baseline = baseline_reading();
    let location_name = display_name(city_name);

    match lookup(city_name) {
        Some(city) => {
            let temperature = city.base_temp_c + draw_int(rng, 5, -2);
            let feels_like = city.base_temp_c + draw_int(rng, 3, -3);
            let humidity = city.base_humidity_pct + draw_int(rng, 10, -5);

            WeatherReading {
                location_name,
                temperature_c: f64::from(temperature),
                feels_like_c: f64::from(feels_like),
                humidity_pct: humidity,
                condition: city.condition,
                description: description_for(city.condition).to_string(),
                ..baseline
            }
        }
        None => {
            debug!(city = city_name, "no profile for city, using placeholder reading");

            let temperature = draw_int(rng, 20, 10);
            let feels_like = draw_int(rng, 18, 8);
            let humidity = draw_int(rng, 40, 50);

            WeatherReading {
                location_name,
                temperature_c: f64::from(temperature),
                feels_like_c: f64::from(feels_like),
                humidity_pct: humidity,
                ..baseline
            }
        }
    }
}

/// Five daily entries starting at `now`, one day apart.
pub fn mock_forecast(now: DateTime<Utc>) -> Vec<ForecastEntry> {
    let start = now.timestamp();

    FORECAST_TEMPLATE
        .iter()
        .zip(0_i64..)
        .map(|(&(temperature_c, condition, description), day)| ForecastEntry {
            timestamp: start + day * SECONDS_PER_DAY,
            temperature_c,
            condition,
            description: description.to_string(),
        })
        .collect()
}
