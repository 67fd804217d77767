//! Core library for the `skycast` weather dashboard.
//!
//! This crate defines:
//! - The city catalog and suggestion state machine behind the search box
//! - Mock weather synthesis for current conditions and the 5-day forecast
//! - Page-level state with last-write-wins loading
//! - Configuration handling
//!
//! It is used by `skycast-cli`, but has no terminal dependencies and can back
//! other front ends.

pub mod autocomplete;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod model;
pub mod provider;
pub mod random;
pub mod search;
pub mod synth;

pub use autocomplete::{AutocompleteController, AutocompleteState, Event, filtered_suggestions};
pub use catalog::POPULAR_CITIES;
pub use config::Config;
pub use dashboard::{Dashboard, LoadTicket};
pub use model::{Condition, ForecastEntry, WeatherReading, WeatherReport, WeatherRequest};
pub use provider::{ProviderId, WeatherProvider};
pub use random::{RandomSource, system_random};
pub use search::SearchBar;
pub use synth::{mock_forecast, synthesize};
