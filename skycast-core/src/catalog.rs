//! Known city names offered as search suggestions.

/// Display names in suggestion order. Matching against these is
/// case-insensitive; the casing here is what gets shown and committed.
pub static POPULAR_CITIES: &[&str] = &[
    "London",
    "New York",
    "Tokyo",
    "Paris",
    "Sydney",
    "Dubai",
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Kanpur",
    "Moscow",
    "Singapore",
    "Los Angeles",
    "Chicago",
    "Toronto",
    "Vancouver",
    "Mexico City",
    "São Paulo",
    "Buenos Aires",
    "Lima",
    "Berlin",
    "Madrid",
    "Barcelona",
    "Rome",
    "Milan",
    "Amsterdam",
    "Brussels",
    "Vienna",
    "Zurich",
    "Stockholm",
    "Oslo",
    "Copenhagen",
    "Helsinki",
    "Dublin",
    "Lisbon",
    "Prague",
    "Warsaw",
    "Istanbul",
    "Cairo",
    "Lagos",
    "Nairobi",
    "Cape Town",
    "Johannesburg",
    "Hong Kong",
    "Beijing",
    "Shanghai",
    "Seoul",
    "Bangkok",
    "Jakarta",
    "Manila",
    "Kolkata",
    "Chennai",
    "Hyderabad",
    "Lucknow",
    "Melbourne",
    "Auckland",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_no_duplicates_ignoring_case() {
        let mut seen = HashSet::new();
        for city in POPULAR_CITIES {
            assert!(seen.insert(city.to_lowercase()), "duplicate entry: {city}");
        }
    }

    #[test]
    fn catalog_entries_are_trimmed_and_non_empty() {
        for city in POPULAR_CITIES {
            assert!(!city.is_empty());
            assert_eq!(city.trim(), *city);
        }
    }
}
