use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Weather category driving the icon, colors and narrative description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl Condition {
    pub const fn all() -> &'static [Condition] {
        &[Condition::Sunny, Condition::Cloudy, Condition::Rainy, Condition::Snowy]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::Snowy => "snowy",
        }
    }

    /// Narrative text shown under the current temperature.
    pub fn description(&self) -> &'static str {
        match self {
            Condition::Sunny => "Clear sky",
            Condition::Cloudy => "Partly cloudy",
            Condition::Rainy => "Light rain",
            Condition::Snowy => "Snow",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metric (°C, km/h, km) or imperial (°F, mph, mi) display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    Metric,
    Imperial,
}

impl DisplayUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayUnit::Metric => "metric",
            DisplayUnit::Imperial => "imperial",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayUnit::Metric => DisplayUnit::Imperial,
            DisplayUnit::Imperial => DisplayUnit::Metric,
        }
    }
}

impl std::fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DisplayUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "metric" | "c" | "celsius" => Ok(DisplayUnit::Metric),
            "imperial" | "f" | "fahrenheit" => Ok(DisplayUnit::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported: metric, imperial."
            )),
        }
    }
}

/// Current-moment weather for the active location.
///
/// Temperatures are stored as generated; conversion happens only at display
/// time (see [`crate::units::convert_temperature`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub location: String,
    pub country: String,
    pub temperature: f64,
    pub condition: Condition,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub pressure: f64,
    pub visibility: f64,
    pub uv_index: u8,
    pub feels_like: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    /// Short weekday label, e.g. "Mon".
    pub day: String,
    pub high: f64,
    pub low: f64,
    pub condition: Condition,
    pub precipitation_chance: u8,
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyForecastEntry {
    /// Two-digit hour of day, "00" through "23".
    pub hour_label: String,
    pub temperature: f64,
    pub condition: Condition,
    pub precipitation_chance: u8,
}

/// Snapshot plus its paired forecasts. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: WeatherSnapshot,
    pub daily: Vec<DailyForecastEntry>,
    pub hourly: Vec<HourlyForecastEntry>,
}

impl WeatherReport {
    pub const DAILY_LEN: usize = 7;
    pub const HOURLY_LEN: usize = 24;
}

/// A pinned location with the temperature/condition seen when it was pinned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteLocation {
    pub name: String,
    pub added_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unit_parses_aliases() {
        assert_eq!(DisplayUnit::try_from("Metric").unwrap(), DisplayUnit::Metric);
        assert_eq!(DisplayUnit::try_from("F").unwrap(), DisplayUnit::Imperial);

        let err = DisplayUnit::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown unit system"));
    }

    #[test]
    fn display_unit_toggles_back_and_forth() {
        assert_eq!(DisplayUnit::Metric.toggled(), DisplayUnit::Imperial);
        assert_eq!(DisplayUnit::Metric.toggled().toggled(), DisplayUnit::Metric);
    }

    #[test]
    fn favorite_serializes_with_camel_case_keys() {
        let fav = FavoriteLocation {
            name: "Paris".into(),
            added_at: "2024-05-01T10:00:00Z".parse().unwrap(),
            temperature: Some(21.0),
            condition: Some(Condition::Rainy),
        };

        let json = serde_json::to_value(&fav).unwrap();
        assert_eq!(json["name"], "Paris");
        assert_eq!(json["addedAt"], "2024-05-01T10:00:00Z");
        assert_eq!(json["condition"], "rainy");
    }

    #[test]
    fn favorite_without_snapshot_parses() {
        let fav: FavoriteLocation =
            serde_json::from_str(r#"{"name":"Oslo","addedAt":"2024-01-02T03:04:05Z"}"#).unwrap();

        assert_eq!(fav.name, "Oslo");
        assert!(fav.temperature.is_none());
        assert!(fav.condition.is_none());
    }
}
