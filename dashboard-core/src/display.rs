//! Render-ready projection of the dashboard state.
//!
//! Everything here is already converted to the active unit and formatted with
//! its suffix, so a front-end only has to lay it out.

use crate::{
    model::{Condition, DisplayUnit, FavoriteLocation, WeatherReport},
    units::convert_temperature,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentCard {
    pub location: String,
    pub country: String,
    pub condition: Condition,
    /// Converted temperature, e.g. `68`.
    pub temperature: i64,
    /// Temperature with unit suffix, e.g. `"68°F"`.
    pub temperature_label: String,
    pub description: String,
    pub feels_like_label: String,
    pub humidity_label: String,
    pub wind_label: String,
    pub pressure_label: String,
    pub visibility_label: String,
    pub uv_index: u8,
    pub is_favorite: bool,
}

/// One point of the 24-hour line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    pub label: String,
    pub temperature: i64,
    pub precipitation_chance: u8,
    pub condition: Condition,
}

/// One card of the 7-day strip.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCard {
    pub day: String,
    pub high: i64,
    pub low: i64,
    pub precipitation_chance: u8,
    pub condition: Condition,
}

/// One group of the weekly statistics bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyStat {
    pub day: String,
    pub high: i64,
    pub low: i64,
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteCard {
    pub name: String,
    pub temperature: Option<i64>,
    pub condition: Option<Condition>,
}

/// Projection of a loaded report.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub current: CurrentCard,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyCard>,
    pub weekly: Vec<WeeklyStat>,
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub unit: DisplayUnit,
    pub loading: bool,
    pub error: Option<String>,
    /// Present only when a report is loaded and nothing is in flight.
    pub weather: Option<WeatherView>,
    pub show_favorites: bool,
    pub favorites: Vec<FavoriteCard>,
}

impl WeatherView {
    pub fn project(report: &WeatherReport, unit: DisplayUnit, is_favorite: bool) -> Self {
        let temp = |c: f64| convert_temperature(c, unit);
        let c = &report.current;

        let current = CurrentCard {
            location: c.location.clone(),
            country: c.country.clone(),
            condition: c.condition,
            temperature: temp(c.temperature),
            temperature_label: format!("{}{}", temp(c.temperature), unit.temperature_suffix()),
            description: c.description.clone(),
            feels_like_label: format!("Feels like {}°", temp(c.feels_like)),
            humidity_label: format!("{}%", c.humidity),
            wind_label: format!("{} {}", c.wind_speed, unit.speed_label()),
            pressure_label: format!("{} {}", c.pressure, unit.pressure_label()),
            visibility_label: format!("{} {}", c.visibility, unit.distance_label()),
            uv_index: c.uv_index,
            is_favorite,
        };

        let hourly = report
            .hourly
            .iter()
            .map(|h| HourlyPoint {
                label: h.hour_label.clone(),
                temperature: temp(h.temperature),
                precipitation_chance: h.precipitation_chance,
                condition: h.condition,
            })
            .collect();

        let daily = report
            .daily
            .iter()
            .map(|d| DailyCard {
                day: d.day.clone(),
                high: temp(d.high),
                low: temp(d.low),
                precipitation_chance: d.precipitation_chance,
                condition: d.condition,
            })
            .collect();

        let weekly = report
            .daily
            .iter()
            .map(|d| WeeklyStat {
                day: d.day.clone(),
                high: temp(d.high),
                low: temp(d.low),
                humidity: d.humidity,
            })
            .collect();

        Self { current, hourly, daily, weekly }
    }
}

impl FavoriteCard {
    pub fn project(fav: &FavoriteLocation, unit: DisplayUnit) -> Self {
        Self {
            name: fav.name.clone(),
            temperature: fav.temperature.map(|t| convert_temperature(t, unit)),
            condition: fav.condition,
        }
    }
}
