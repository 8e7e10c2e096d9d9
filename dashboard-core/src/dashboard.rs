//! The dashboard view-model.
//!
//! [`Dashboard`] owns all state behind one short-lived lock and exposes the
//! user actions (search, use location, unit switch, favorites). A front-end
//! calls the actions and redraws from [`Dashboard::view`].

use parking_lot::Mutex;
use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    display::{DashboardView, FavoriteCard, WeatherView},
    favorites::FavoritesStore,
    geolocation::{Geolocator, LocationError, geolocator_from_config},
    model::{DisplayUnit, FavoriteLocation, WeatherReport},
    provider::{WeatherProvider, provider_from_config},
    storage::KeyValueStore,
};

pub const LOCATION_FAILED_MESSAGE: &str = "Unable to get your location. Please search for a city.";
pub const GEOLOCATION_UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported on this device.";

/// What the main area of the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Loaded(Arc<WeatherReport>),
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            ViewState::Loaded(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub unit: DisplayUnit,
    pub search_delay: Duration,
    pub current_location_label: String,
}

impl DashboardOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            unit: config.default_unit,
            search_delay: config.search_delay(),
            current_location_label: config.current_location_label.clone(),
        }
    }
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug)]
struct DashboardState {
    view: ViewState,
    unit: DisplayUnit,
    search_query: String,
    show_favorites: bool,
    favorites: FavoritesStore,
}

#[derive(Debug)]
pub struct Dashboard {
    provider: Arc<dyn WeatherProvider>,
    geolocator: Arc<dyn Geolocator>,
    options: DashboardOptions,
    state: Mutex<DashboardState>,
}

impl Dashboard {
    /// Build a dashboard; favorites are read from `store` once, here.
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        geolocator: Arc<dyn Geolocator>,
        store: Arc<dyn KeyValueStore>,
        options: DashboardOptions,
    ) -> Self {
        let state = DashboardState {
            view: ViewState::Idle,
            unit: options.unit,
            search_query: String::new(),
            show_favorites: false,
            favorites: FavoritesStore::load(store),
        };

        Self { provider, geolocator, options, state: Mutex::new(state) }
    }

    pub fn from_config(config: &Config, store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(
            provider_from_config(config),
            geolocator_from_config(config.geolocation.as_ref()),
            store,
            DashboardOptions::from_config(config),
        )
    }

    pub fn state(&self) -> ViewState {
        self.state.lock().view.clone()
    }

    pub fn unit(&self) -> DisplayUnit {
        self.state.lock().unit
    }

    /// Change the display unit. Stored values are left as generated.
    pub fn set_unit(&self, unit: DisplayUnit) {
        tracing::debug!(%unit, "display unit changed");
        self.state.lock().unit = unit;
    }

    pub fn toggle_unit(&self) -> DisplayUnit {
        let mut state = self.state.lock();
        state.unit = state.unit.toggled();
        tracing::debug!(unit = %state.unit, "display unit changed");
        state.unit
    }

    pub fn search_query(&self) -> String {
        self.state.lock().search_query.clone()
    }

    pub fn set_search_query(&self, text: impl Into<String>) {
        self.state.lock().search_query = text.into();
    }

    /// Search for the text in the search box, clearing the box.
    pub async fn submit_search(&self) -> bool {
        let query = std::mem::take(&mut self.state.lock().search_query);
        self.search(&query).await
    }

    /// Look up weather for `query`.
    ///
    /// Blank queries are ignored and return `false` without touching state.
    /// Otherwise the view goes to `Loading`, waits the configured delay, and
    /// ends `Loaded` for the untrimmed query. Overlapping searches are not
    /// sequenced: whichever finishes last wins.
    pub async fn search(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            tracing::debug!("ignoring blank search");
            return false;
        }

        let unit = self.begin_loading();
        tracing::info!(query, "searching");

        tokio::time::sleep(self.options.search_delay).await;
        self.load(query, unit).await;
        true
    }

    /// Look up weather for the device position.
    ///
    /// The coordinates only gate the lookup; the report is generated for the
    /// configured placeholder label.
    pub async fn use_current_location(&self) {
        if !self.geolocator.is_supported() {
            self.fail(GEOLOCATION_UNSUPPORTED_MESSAGE);
            return;
        }

        let unit = self.begin_loading();

        match self.geolocator.current_position().await {
            Ok(position) => {
                tracing::debug!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    "got position"
                );
                self.load(&self.options.current_location_label, unit).await;
            }
            Err(LocationError::Unsupported) => self.fail(GEOLOCATION_UNSUPPORTED_MESSAGE),
            Err(err) => {
                tracing::warn!(error = %err, "geolocation failed");
                self.fail(LOCATION_FAILED_MESSAGE);
            }
        }
    }

    /// Re-run the search for a saved favorite.
    pub async fn refresh_favorite(&self, name: &str) -> bool {
        self.search(name).await
    }

    pub fn favorites(&self) -> Vec<FavoriteLocation> {
        self.state.lock().favorites.entries().to_vec()
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.state.lock().favorites.contains(name)
    }

    /// Add or remove `name`. A new entry captures the loaded snapshot's
    /// temperature and condition, if any. Returns whether `name` is now pinned.
    pub fn toggle_favorite(&self, name: &str) -> bool {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let snapshot = state.view.report().map(|report| &report.current);
        state.favorites.toggle(name, snapshot)
    }

    /// Toggle the location currently on screen. `None` when nothing is loaded.
    pub fn toggle_current_favorite(&self) -> Option<bool> {
        let location = self.state().report()?.current.location.clone();
        Some(self.toggle_favorite(&location))
    }

    pub fn favorites_panel_visible(&self) -> bool {
        self.state.lock().show_favorites
    }

    pub fn toggle_favorites_panel(&self) -> bool {
        let mut state = self.state.lock();
        state.show_favorites = !state.show_favorites;
        state.show_favorites
    }

    pub fn view(&self) -> DashboardView {
        let state = self.state.lock();
        let unit = state.unit;

        let weather = state.view.report().map(|report| {
            let pinned = state.favorites.contains(&report.current.location);
            WeatherView::project(report, unit, pinned)
        });

        DashboardView {
            unit,
            loading: state.view.is_loading(),
            error: state.view.error().map(str::to_string),
            weather,
            show_favorites: state.show_favorites,
            favorites: state
                .favorites
                .entries()
                .iter()
                .map(|fav| FavoriteCard::project(fav, unit))
                .collect(),
        }
    }

    fn begin_loading(&self) -> DisplayUnit {
        let mut state = self.state.lock();
        state.view = ViewState::Loading;
        state.unit
    }

    async fn load(&self, location: &str, unit: DisplayUnit) {
        let result = self.provider.fetch(location, unit).await;

        let view = match result {
            Ok(report) => ViewState::Loaded(Arc::new(report)),
            Err(err) => {
                tracing::warn!(location, error = %err, "weather fetch failed");
                ViewState::Failed(err.to_string())
            }
        };
        self.state.lock().view = view;
    }

    fn fail(&self, reason: &str) {
        self.state.lock().view = ViewState::Failed(reason.to_string());
    }
}
