use anyhow::Result;
use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::model::{
    Condition, DailyForecastEntry, DisplayUnit, HourlyForecastEntry, WeatherReport,
    WeatherSnapshot,
};

use super::WeatherProvider;

/// Placeholder country; the mock has no geocoding.
const MOCK_COUNTRY: &str = "Country";

/// Generates random placeholder weather instead of calling a real service.
///
/// Every field is drawn independently: forecast entries are not correlated
/// with each other or with the current condition.
#[derive(Debug)]
pub struct MockProvider {
    rng: Mutex<StdRng>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self { rng: Mutex::new(StdRng::from_os_rng()) }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// Build a full report for `location`, with day 0 of the daily forecast
    /// being `today`.
    ///
    /// The base temperature range depends on `unit`: [5, 35) for metric and
    /// [41, 127) for imperial. The result is not a conversion of one value.
    pub fn generate(&self, location: &str, unit: DisplayUnit, today: NaiveDate) -> WeatherReport {
        let mut rng = self.rng.lock();

        let condition = random_condition(&mut *rng);
        let base: i32 = match unit {
            DisplayUnit::Metric => rng.random_range(5..35),
            DisplayUnit::Imperial => rng.random_range(41..127),
        };

        let current = WeatherSnapshot {
            location: location.to_string(),
            country: MOCK_COUNTRY.to_string(),
            temperature: f64::from(base),
            condition,
            description: condition.description().to_string(),
            humidity: rng.random_range(40..80),
            wind_speed: f64::from(rng.random_range(5..25_i32)),
            pressure: f64::from(rng.random_range(1000..1050_i32)),
            visibility: f64::from(rng.random_range(5..15_i32)),
            uv_index: rng.random_range(0..11),
            feels_like: f64::from(base + rng.random_range(-3..3)),
        };

        let daily = (0..WeatherReport::DAILY_LEN)
            .map(|offset| {
                let date = today + Days::new(offset as u64);
                DailyForecastEntry {
                    date,
                    day: date.format("%a").to_string(),
                    high: f64::from(base + rng.random_range(-5..5)),
                    low: f64::from(base - rng.random_range(0..10) - 5),
                    condition: random_condition(&mut *rng),
                    precipitation_chance: rng.random_range(0..80),
                    humidity: rng.random_range(40..80),
                }
            })
            .collect();

        let hourly = (0..WeatherReport::HOURLY_LEN)
            .map(|hour| HourlyForecastEntry {
                hour_label: format!("{hour:02}"),
                temperature: f64::from(base + rng.random_range(-5..5)),
                condition: random_condition(&mut *rng),
                precipitation_chance: rng.random_range(0..20),
            })
            .collect();

        WeatherReport { current, daily, hourly }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn random_condition<R: Rng>(rng: &mut R) -> Condition {
    let all = Condition::all();
    all[rng.random_range(0..all.len())]
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn fetch(&self, location: &str, unit: DisplayUnit) -> Result<WeatherReport> {
        let report = self.generate(location, unit, Local::now().date_naive());
        tracing::debug!(
            location,
            %unit,
            condition = %report.current.condition,
            temperature = report.current.temperature,
            "generated mock weather"
        );
        Ok(report)
    }
}
