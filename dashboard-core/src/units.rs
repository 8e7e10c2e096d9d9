//! Display-time unit handling and condition appearance.
//!
//! Nothing here mutates stored report values; every function maps a stored
//! value to what should be shown for the active [`DisplayUnit`].

use crate::model::{Condition, DisplayUnit};

/// Convert a stored (Celsius) temperature for display.
///
/// Imperial uses `round(c * 9/5 + 32)`, metric just rounds. Halves round
/// toward positive infinity, so `-2.5` shows as `-2`.
pub fn convert_temperature(celsius: f64, unit: DisplayUnit) -> i64 {
    let value = match unit {
        DisplayUnit::Metric => celsius,
        DisplayUnit::Imperial => celsius * 9.0 / 5.0 + 32.0,
    };
    round_half_up(value)
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

impl DisplayUnit {
    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            DisplayUnit::Metric => "°C",
            DisplayUnit::Imperial => "°F",
        }
    }

    /// Wind speed label. The stored number is shown unchanged.
    pub fn speed_label(&self) -> &'static str {
        match self {
            DisplayUnit::Metric => "km/h",
            DisplayUnit::Imperial => "mph",
        }
    }

    /// Visibility label. The stored number is shown unchanged.
    pub fn distance_label(&self) -> &'static str {
        match self {
            DisplayUnit::Metric => "km",
            DisplayUnit::Imperial => "mi",
        }
    }

    pub fn pressure_label(&self) -> &'static str {
        "hPa"
    }
}

/// Icon, accent color and background gradient for a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub icon: &'static str,
    pub glyph: &'static str,
    /// Hex RGB accent color for the icon.
    pub color: &'static str,
    /// Hex RGB stops, from left to right.
    pub gradient: [&'static str; 3],
}

impl Condition {
    pub fn appearance(&self) -> Appearance {
        match self {
            Condition::Sunny => Appearance {
                icon: "sun",
                glyph: "☀",
                color: "#eab308",
                gradient: ["#facc15", "#f97316", "#ef4444"],
            },
            Condition::Cloudy => Appearance {
                icon: "cloud",
                glyph: "☁",
                color: "#6b7280",
                gradient: ["#9ca3af", "#6b7280", "#4b5563"],
            },
            Condition::Rainy => Appearance {
                icon: "cloud-rain",
                glyph: "☂",
                color: "#3b82f6",
                gradient: ["#60a5fa", "#3b82f6", "#2563eb"],
            },
            Condition::Snowy => Appearance {
                icon: "cloud-snow",
                glyph: "❄",
                color: "#93c5fd",
                gradient: ["#bfdbfe", "#93c5fd", "#60a5fa"],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imperial_conversion_follows_formula() {
        let samples = [
            (20.0, 68),
            (0.0, 32),
            (-40.0, -40),
            (100.0, 212),
            (-10.3, 13),
            (37.5, 100),
            (21.4, 71),
            (-17.5, 1),
        ];
        for (celsius, expected) in samples {
            assert_eq!(
                convert_temperature(celsius, DisplayUnit::Imperial),
                expected,
                "{celsius} °C"
            );
        }
    }

    #[test]
    fn metric_conversion_only_rounds() {
        assert_eq!(convert_temperature(20.0, DisplayUnit::Metric), 20);
        assert_eq!(convert_temperature(20.4, DisplayUnit::Metric), 20);
        assert_eq!(convert_temperature(20.5, DisplayUnit::Metric), 21);
        assert_eq!(convert_temperature(-2.5, DisplayUnit::Metric), -2);
        assert_eq!(convert_temperature(-2.6, DisplayUnit::Metric), -3);
        assert_eq!(convert_temperature(0.0, DisplayUnit::Metric), 0);
    }

    #[test]
    fn labels_switch_with_unit() {
        assert_eq!(DisplayUnit::Metric.speed_label(), "km/h");
        assert_eq!(DisplayUnit::Imperial.speed_label(), "mph");
        assert_eq!(DisplayUnit::Metric.distance_label(), "km");
        assert_eq!(DisplayUnit::Imperial.distance_label(), "mi");
        assert_eq!(DisplayUnit::Imperial.pressure_label(), "hPa");
        assert_eq!(DisplayUnit::Imperial.temperature_suffix(), "°F");
    }

    #[test]
    fn each_condition_has_distinct_icon() {
        let icons: std::collections::HashSet<_> =
            Condition::all().iter().map(|c| c.appearance().icon).collect();
        assert_eq!(icons.len(), 4);
        assert_eq!(Condition::Rainy.appearance().icon, "cloud-rain");
    }
}
