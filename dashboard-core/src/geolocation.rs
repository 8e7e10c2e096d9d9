use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, sync::Arc};

use crate::config::GeolocationConfig;

/// A position fix. The dashboard only checks that one was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("Geolocation is not supported on this device")]
    Unsupported,
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// Capability to ask for the device position.
#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;

    /// Whether a position can be requested at all.
    fn is_supported(&self) -> bool {
        true
    }
}

/// Always reports the configured coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator {
    position: Coordinates,
}

impl FixedGeolocator {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { position: Coordinates { latitude, longitude } }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.position)
    }
}

/// Behaves like a user who refused the permission prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedGeolocator;

#[async_trait]
impl Geolocator for DeniedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedGeolocator;

#[async_trait]
impl Geolocator for UnsupportedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }

    fn is_supported(&self) -> bool {
        false
    }
}

/// Pick a geolocator from the `[geolocation]` config section.
///
/// - no section: unsupported
/// - `enabled = false`: permission denied
/// - both coordinates set: fixed position
/// - otherwise: supported, but every request fails as unavailable
pub fn geolocator_from_config(config: Option<&GeolocationConfig>) -> Arc<dyn Geolocator> {
    let Some(config) = config else {
        return Arc::new(UnsupportedGeolocator);
    };

    if !config.enabled {
        return Arc::new(DeniedGeolocator);
    }

    match (config.latitude, config.longitude) {
        (Some(latitude), Some(longitude)) => Arc::new(FixedGeolocator::new(latitude, longitude)),
        _ => Arc::new(UnavailableGeolocator),
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct UnavailableGeolocator;

#[async_trait]
impl Geolocator for UnavailableGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unavailable("no coordinates configured".to_string()))
    }
}
