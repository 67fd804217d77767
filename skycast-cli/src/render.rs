use chrono::{DateTime, TimeZone};
use skycast_core::{Condition, ForecastEntry, WeatherReading};
use std::fmt::{Display, Write};

/// Glyph and mood label for a condition. Drizzle shares the rain look; snow
/// has no art of its own and falls back to a plain cloud.
pub fn condition_style(condition: Condition) -> (&'static str, &'static str) {
    match condition {
        Condition::Clear => ("☀", "sunny"),
        Condition::Clouds => ("☁", "cloudy"),
        Condition::Rain | Condition::Drizzle => ("🌧", "rainy"),
        _ => ("☁", "mixed"),
    }
}

fn whole(value: f64) -> i64 {
    value.round() as i64
}

pub fn render_current(reading: &WeatherReading) -> String {
    let (glyph, mood) = condition_style(reading.condition);

    [
        format!("{glyph}  {}  ({mood})", reading.location_name),
        format!("   {}", capitalize_words(&reading.description)),
        String::new(),
        format!("   {}°C", whole(reading.temperature_c)),
        format!("   Feels like {}°C", whole(reading.feels_like_c)),
        String::new(),
        format!("   Humidity    {}%", reading.humidity_pct),
        format!("   Wind Speed  {} m/s", whole(reading.wind_speed_mps)),
    ]
    .join("\n")
}

/// One line per day, weekday names taken in `tz`.
pub fn render_forecast<Tz>(entries: &[ForecastEntry], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::from("5-Day Forecast");

    for entry in entries {
        let day = DateTime::from_timestamp(entry.timestamp, 0)
            .map(|dt| dt.with_timezone(tz).format("%a").to_string().to_uppercase())
            .unwrap_or_else(|| "---".to_string());
        let (glyph, _) = condition_style(entry.condition);

        let _ = write!(
            out,
            "\n  {day:<4} {glyph}  {:>4}°C  {}",
            whole(entry.temperature_c),
            capitalize_words(&entry.description)
        );
    }

    out
}

fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
