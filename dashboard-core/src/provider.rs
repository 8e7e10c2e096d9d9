use crate::{Config, DisplayUnit, WeatherReport, provider::mock::MockProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod mock;

/// Source of weather reports for the dashboard.
///
/// Implementations must always return a complete report: one snapshot with
/// exactly [`WeatherReport::DAILY_LEN`] daily and [`WeatherReport::HOURLY_LEN`]
/// hourly entries.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, location: &str, unit: DisplayUnit) -> anyhow::Result<WeatherReport>;
}

/// Construct the provider described by the config.
pub fn provider_from_config(config: &Config) -> Arc<dyn WeatherProvider> {
    let provider = match config.provider.seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded mock provider");
            MockProvider::seeded(seed)
        }
        None => MockProvider::new(),
    };

    Arc::new(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn provider_from_default_config_produces_full_report() {
        let provider = provider_from_config(&Config::default());
        let report = provider.fetch("Lisbon", DisplayUnit::Metric).await.unwrap();

        assert_eq!(report.current.location, "Lisbon");
        assert_eq!(report.daily.len(), WeatherReport::DAILY_LEN);
        assert_eq!(report.hourly.len(), WeatherReport::HOURLY_LEN);
    }

    #[tokio::test]
    async fn seeded_config_is_reproducible() {
        let mut cfg = Config::default();
        cfg.provider.seed = Some(42);

        let a = provider_from_config(&cfg).fetch("Rome", DisplayUnit::Metric).await.unwrap();
        let b = provider_from_config(&cfg).fetch("Rome", DisplayUnit::Metric).await.unwrap();

        assert_eq!(a.current, b.current);
        assert_eq!(a.hourly, b.hourly);
    }
}
