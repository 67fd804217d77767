use anyhow::{Context, bail};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Text};
use skycast_core::{
    AutocompleteController, Config, Dashboard, LoadTicket, POPULAR_CITIES, SearchBar,
    WeatherProvider, WeatherReport, config::DEFAULT_LATENCY_MS,
    provider::default_provider_from_config,
};
use std::cell::RefCell;
use tracing::debug;

use crate::render::{render_current, render_forecast};
use crate::suggest::CitySuggester;

const LOCATION_COMMAND: &str = ":here";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard with mock data")]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather and the 5-day forecast for a city.
    Show {
        /// City name; defaults to the configured default city.
        city: Option<String>,

        /// Use the current location instead of a city name.
        #[arg(long, conflicts_with = "city")]
        here: bool,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Search interactively with city suggestions.
    Search,

    /// List known cities, optionally filtered like the search dropdown.
    Cities {
        query: Option<String>,
    },

    /// Edit the default city, simulated latency and location label.
    Configure,
}

// What the search box asked the page to do.
enum Intent {
    City(String),
    Location,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { city, here, json } => show(city, here, json).await,
            Command::Search => search().await,
            Command::Cities { query } => {
                list_cities(query.as_deref());
                Ok(())
            }
            Command::Configure => configure(),
        }
    }
}

async fn show(city: Option<String>, here: bool, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = default_provider_from_config(&config)?;
    let mut dashboard = Dashboard::new(config.default_city(), Utc::now());

    let ticket = if here {
        announce_location_fallback();
        dashboard.use_current_location(config.location_label())
    } else if let Some(raw) = city {
        let Some(city) = AutocompleteController::new(POPULAR_CITIES).on_submit(&raw) else {
            bail!("City name must not be empty");
        };
        dashboard.search(&city)
    } else {
        None
    };
    let ticket = ticket.unwrap_or_else(|| dashboard.refresh());

    load(&mut dashboard, ticket, provider.as_ref()).await?;

    if json {
        let report = WeatherReport {
            current: dashboard.reading().clone(),
            forecast: dashboard.forecast().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&report).context("Failed to encode report")?);
    } else {
        print_dashboard(&dashboard);
    }

    Ok(())
}

async fn search() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = default_provider_from_config(&config)?;
    let mut dashboard = Dashboard::new(config.default_city(), Utc::now());

    let ticket = dashboard.refresh();
    load(&mut dashboard, ticket, provider.as_ref()).await?;
    print_dashboard(&dashboard);

    let intent = RefCell::new(None);
    let mut bar = SearchBar::new(
        POPULAR_CITIES,
        |city: &str| *intent.borrow_mut() = Some(Intent::City(city.to_string())),
        || *intent.borrow_mut() = Some(Intent::Location),
    );

    let help = format!(
        "↑↓ to pick, enter to search, {LOCATION_COMMAND} for your location, esc to quit"
    );

    loop {
        let answer = Text::new("Search for a city:")
            .with_autocomplete(CitySuggester)
            .with_help_message(&help)
            .prompt_skippable();

        let raw = match answer {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read search input"),
        };

        if raw.trim() == LOCATION_COMMAND {
            bar.use_current_location();
        } else if !bar.submit(&raw) {
            break;
        }

        let ticket = match intent.borrow_mut().take() {
            Some(Intent::City(city)) => {
                println!("Looking up weather for {city}...");
                dashboard.search(&city)
            }
            Some(Intent::Location) => {
                announce_location_fallback();
                dashboard.use_current_location(config.location_label())
            }
            None => None,
        };

        if let Some(ticket) = ticket {
            load(&mut dashboard, ticket, provider.as_ref()).await?;
        }
        print_dashboard(&dashboard);
    }

    Ok(())
}

async fn load(
    dashboard: &mut Dashboard,
    ticket: LoadTicket,
    provider: &dyn WeatherProvider,
) -> anyhow::Result<()> {
    let city = dashboard.city().to_string();
    debug!(%city, ?ticket, "loading dashboard");
    eprintln!("Loading weather data...");
    dashboard
        .load(ticket, provider)
        .await
        .with_context(|| format!("Failed to load weather for {city}"))?;
    Ok(())
}

fn print_dashboard(dashboard: &Dashboard) {
    println!();
    println!("{}", render_current(dashboard.reading()));
    println!();
    println!("{}", render_forecast(dashboard.forecast(), &Local));
    println!();
}

fn announce_location_fallback() {
    println!("Demo mode: location lookup is not available, using sample data.");
}

fn list_cities(query: Option<&str>) {
    let cities = match query {
        Some(q) => skycast_core::filtered_suggestions(q, POPULAR_CITIES),
        None => POPULAR_CITIES.to_vec(),
    };

    for city in cities {
        println!("{city}");
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let city = Text::new("Default city:")
        .with_default(config.default_city())
        .with_autocomplete(CitySuggester)
        .prompt()
        .context("Failed to read default city")?;
    let Some(city) = AutocompleteController::new(POPULAR_CITIES).on_submit(&city) else {
        bail!("Default city must not be empty");
    };

    let latency_ms = CustomType::<u64>::new("Simulated latency (ms):")
        .with_default(config.latency_ms.unwrap_or(DEFAULT_LATENCY_MS))
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()
        .context("Failed to read latency")?;

    let label = Text::new("Current location label:")
        .with_default(config.location_label())
        .prompt()
        .context("Failed to read location label")?;

    config.default_city = Some(city);
    config.latency_ms = Some(latency_ms);
    config.location_label = Some(label.trim().to_string()).filter(|l| !l.is_empty());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
