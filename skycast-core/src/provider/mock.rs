use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use std::{fmt, sync::Mutex, time::Duration};

use crate::{
    model::{WeatherReport, WeatherRequest},
    random::{RandomSource, system_random},
    synth::{mock_forecast, synthesize},
};

use super::WeatherProvider;

/// Serves synthesized readings after a simulated network round trip.
pub struct MockProvider {
    latency: Duration,
    rng: Mutex<Box<dyn RandomSource + Send>>,
}

impl MockProvider {
    pub fn new(latency: Duration) -> Self {
        Self::with_random(latency, system_random())
    }

    pub fn with_random(latency: Duration, rng: impl RandomSource + Send + 'static) -> Self {
        Self { latency, rng: Mutex::new(Box::new(rng)) }
    }
}

impl fmt::Debug for MockProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockProvider").field("latency", &self.latency).finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherReport> {
        let city = request.city.trim();
        if city.is_empty() {
            return Err(anyhow!("City name must not be empty"));
        }

        // Draw before sleeping so the lock is never held across an await.
        let current = {
            let mut rng = self.rng.lock().map_err(|_| anyhow!("Random source lock poisoned"))?;
            synthesize(city, &mut **rng)
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(WeatherReport { current, forecast: mock_forecast(Utc::now()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Condition;
    use crate::synth::FORECAST_DAYS;

    #[tokio::test]
    async fn returns_synthesized_reading_and_forecast() {
        let provider = MockProvider::with_random(Duration::ZERO, || 0.5);
        let report = provider.get_weather(&WeatherRequest::new("london")).await.unwrap();

        assert_eq!(report.current.location_name, "London");
        assert_eq!(report.current.temperature_c, 12.0);
        assert_eq!(report.current.condition, Condition::Clouds);
        assert_eq!(report.forecast.len(), FORECAST_DAYS);
    }

    #[tokio::test]
    async fn trims_request_city() {
        let provider = MockProvider::with_random(Duration::ZERO, || 0.0);
        let report = provider.get_weather(&WeatherRequest::new("  atlantis ")).await.unwrap();

        assert_eq!(report.current.location_name, "Atlantis");
        assert_eq!(report.current.humidity_pct, 50);
    }

    #[tokio::test]
    async fn blank_city_is_rejected() {
        let provider = MockProvider::with_random(Duration::ZERO, || 0.0);
        let err = provider.get_weather(&WeatherRequest::new("   ")).await.unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[tokio::test]
    async fn waits_for_configured_latency() {
        let provider = MockProvider::with_random(Duration::from_millis(20), || 0.5);
        let started = std::time::Instant::now();
        provider.get_weather(&WeatherRequest::new("Paris")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
