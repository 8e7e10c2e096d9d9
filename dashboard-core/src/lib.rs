//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - The dashboard view-model and its state machine
//! - Abstractions over weather data, geolocation and key-value storage
//! - A mock weather provider producing random placeholder data
//! - Unit conversion and render-ready projections
//! - Configuration handling
//!
//! It is used by `dashboard-cli`, but any other front-end can drive a
//! [`Dashboard`] the same way.

pub mod config;
pub mod dashboard;
pub mod display;
pub mod favorites;
pub mod geolocation;
pub mod model;
pub mod provider;
pub mod storage;
pub mod units;

pub use config::{Config, GeolocationConfig, ProviderConfig};
pub use dashboard::{Dashboard, DashboardOptions, ViewState};
pub use display::DashboardView;
pub use favorites::FavoritesStore;
pub use geolocation::{Coordinates, Geolocator, LocationError};
pub use model::{
    Condition, DailyForecastEntry, DisplayUnit, FavoriteLocation, HourlyForecastEntry,
    WeatherReport, WeatherSnapshot,
};
pub use provider::WeatherProvider;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use units::convert_temperature;
