//! Page-level state: which city is shown and what data goes with it.
//!
//! Loads are asynchronous, so every load gets a [`LoadTicket`]. Only the
//! result carrying the most recently issued ticket is applied; anything older
//! is dropped, which keeps a slow earlier request from overwriting a newer
//! one.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    model::{ForecastEntry, WeatherReading, WeatherReport, WeatherRequest},
    provider::WeatherProvider,
    synth::{baseline_reading, mock_forecast},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct Dashboard {
    city: String,
    reading: WeatherReading,
    forecast: Vec<ForecastEntry>,
    loading: bool,
    latest: u64,
}

impl Dashboard {
    pub fn new(initial_city: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            city: initial_city.into(),
            reading: baseline_reading(),
            forecast: mock_forecast(now),
            loading: false,
            latest: 0,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn reading(&self) -> &WeatherReading {
        &self.reading
    }

    pub fn forecast(&self) -> &[ForecastEntry] {
        &self.forecast
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Switch to `city`. Returns `None` when that city is already selected,
    /// since nothing needs reloading.
    pub fn search(&mut self, city: &str) -> Option<LoadTicket> {
        if self.city == city {
            return None;
        }
        self.city = city.to_string();
        Some(self.issue())
    }

    /// Location lookup is not available; the placeholder label is searched
    /// like any other city.
    pub fn use_current_location(&mut self, label: &str) -> Option<LoadTicket> {
        info!(label, "location lookup unavailable, showing mock data");
        self.search(label)
    }

    /// Reload the current city regardless of what is shown.
    pub fn refresh(&mut self) -> LoadTicket {
        self.issue()
    }

    /// Request matching `ticket`, or `None` if a newer load superseded it.
    pub fn request_for(&self, ticket: LoadTicket) -> Option<WeatherRequest> {
        self.is_current(ticket).then(|| WeatherRequest::new(self.city.clone()))
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Store `report` if `ticket` is still the latest load. Returns whether it
    /// was applied.
    pub fn apply(&mut self, ticket: LoadTicket, report: WeatherReport) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.latest, "discarding stale weather result");
            return false;
        }
        self.reading = report.current;
        self.forecast = report.forecast;
        self.loading = false;
        true
    }

    /// Fetch and apply `ticket` in one step.
    pub async fn load(
        &mut self,
        ticket: LoadTicket,
        provider: &dyn WeatherProvider,
    ) -> anyhow::Result<bool> {
        let Some(request) = self.request_for(ticket) else {
            return Ok(false);
        };
        match provider.get_weather(&request).await {
            Ok(report) => Ok(self.apply(ticket, report)),
            Err(err) => {
                if self.is_current(ticket) {
                    self.loading = false;
                }
                Err(err)
            }
        }
    }

    fn issue(&mut self) -> LoadTicket {
        self.latest += 1;
        self.loading = true;
        debug!(ticket = self.latest, city = %self.city, "issued weather load");
        LoadTicket(self.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Condition;
    use crate::provider::mock::MockProvider;
    use crate::synth::synthesize;
    use std::time::Duration;

    fn report_for(city: &str) -> WeatherReport {
        WeatherReport {
            current: synthesize(city, &mut || 0.5),
            forecast: mock_forecast(Utc::now()),
        }
    }

    #[test]
    fn starts_with_baseline() {
        let dash = Dashboard::new("London", Utc::now());
        assert_eq!(dash.city(), "London");
        assert_eq!(dash.reading(), &baseline_reading());
        assert_eq!(dash.forecast().len(), 5);
        assert!(!dash.is_loading());
    }

    #[test]
    fn same_city_does_not_reload() {
        let mut dash = Dashboard::new("London", Utc::now());
        assert!(dash.search("London").is_none());
        assert!(dash.search("Paris").is_some());
        assert!(dash.search("Paris").is_none());
    }

    #[test]
    fn stale_result_never_overwrites_newer() {
        let mut dash = Dashboard::new("London", Utc::now());
        let first = dash.search("Paris").unwrap();
        let second = dash.search("Tokyo").unwrap();

        assert!(dash.apply(second, report_for("Tokyo")));
        assert!(!dash.apply(first, report_for("Paris")));

        assert_eq!(dash.reading().location_name, "Tokyo");
        assert_eq!(dash.reading().condition, Condition::Clear);
        assert!(!dash.is_loading());
    }

    #[test]
    fn superseded_load_keeps_loading_flag() {
        let mut dash = Dashboard::new("London", Utc::now());
        let first = dash.search("Paris").unwrap();
        let _second = dash.search("Tokyo").unwrap();

        assert!(!dash.apply(first, report_for("Paris")));
        assert!(dash.is_loading());
        assert!(dash.request_for(first).is_none());
    }

    #[test]
    fn location_uses_placeholder_label() {
        let mut dash = Dashboard::new("London", Utc::now());
        let ticket = dash.use_current_location("Your Location").unwrap();

        assert_eq!(dash.city(), "Your Location");
        assert_eq!(dash.request_for(ticket), Some(WeatherRequest::new("Your Location")));
    }

    #[test]
    fn refresh_supersedes_pending_load() {
        let mut dash = Dashboard::new("London", Utc::now());
        let pending = dash.search("Paris").unwrap();
        let refreshed = dash.refresh();

        assert!(refreshed > pending);
        assert!(!dash.is_current(pending));
        assert!(dash.is_current(refreshed));
    }

    #[tokio::test]
    async fn load_applies_provider_result() {
        let provider = MockProvider::with_random(Duration::ZERO, || 0.5);
        let mut dash = Dashboard::new("London", Utc::now());
        let ticket = dash.search("singapore").unwrap();

        assert!(dash.load(ticket, &provider).await.unwrap());
        assert_eq!(dash.reading().location_name, "Singapore");
        assert_eq!(dash.reading().description, "light rain");
    }

    #[tokio::test]
    async fn failed_load_stops_loading() {
        let provider = MockProvider::with_random(Duration::ZERO, || 0.5);
        let mut dash = Dashboard::new("London", Utc::now());
        let ticket = dash.search("   ").unwrap();

        assert!(dash.load(ticket, &provider).await.is_err());
        assert!(!dash.is_loading());
        assert_eq!(dash.reading(), &baseline_reading());
    }

    #[tokio::test]
    async fn load_skips_superseded_ticket() {
        let provider = MockProvider::with_random(Duration::ZERO, || 0.5);
        let mut dash = Dashboard::new("London", Utc::now());
        let old = dash.search("Paris").unwrap();
        let _new = dash.search("Dubai").unwrap();

        assert!(!dash.load(old, &provider).await.unwrap());
        assert_eq!(dash.reading(), &baseline_reading());
    }
}
