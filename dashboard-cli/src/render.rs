//! Plain-text rendering of a [`DashboardView`].

use std::fmt::{self, Display, Formatter};

use dashboard_core::{
    Condition, DashboardView, DisplayUnit,
    display::{CurrentCard, DailyCard, FavoriteCard, HourlyPoint, WeatherView, WeeklyStat},
};

const CHART_WIDTH: usize = 32;
const BAR: char = '█';

/// One full frame of the dashboard.
pub struct Screen<'a>(pub &'a DashboardView);

impl Display for Screen<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "Weather Dashboard  [{}]", view.unit.temperature_suffix())?;
        writeln!(f)?;

        if view.show_favorites {
            write!(f, "{}", FavoritesPanel { favorites: &view.favorites, unit: view.unit })?;
            writeln!(f)?;
        }

        if view.loading {
            writeln!(f, "Loading...")?;
            return Ok(());
        }

        if let Some(error) = &view.error {
            writeln!(f, "! {error}")?;
        }

        if let Some(weather) = &view.weather {
            write_weather(f, weather, view.unit)?;
        }

        Ok(())
    }
}

/// The favorites panel on its own.
pub struct FavoritesPanel<'a> {
    pub favorites: &'a [FavoriteCard],
    pub unit: DisplayUnit,
}

impl Display for FavoritesPanel<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Favorite Locations")?;

        if self.favorites.is_empty() {
            return writeln!(f, "  No favorite locations yet. Add some by searching for cities!");
        }

        let suffix = self.unit.temperature_suffix();
        for fav in self.favorites {
            let glyph = fav.condition.map(glyph).unwrap_or(" ");
            match fav.temperature {
                Some(t) => writeln!(f, "  {glyph} {}  {t}{suffix}", fav.name)?,
                None => writeln!(f, "  {glyph} {}  --", fav.name)?,
            }
        }
        Ok(())
    }
}

fn write_weather(f: &mut Formatter<'_>, weather: &WeatherView, unit: DisplayUnit) -> fmt::Result {
    write_current(f, &weather.current)?;
    writeln!(f)?;
    write_hourly(f, &weather.hourly)?;
    writeln!(f)?;
    write_daily(f, &weather.daily)?;
    writeln!(f)?;
    write_weekly(f, &weather.weekly, unit)
}

fn write_current(f: &mut Formatter<'_>, current: &CurrentCard) -> fmt::Result {
    let look = current.condition.appearance();
    let star = if current.is_favorite { "★ favorite" } else { "☆" };

    writeln!(f, "{} {}, {}   {star}", look.glyph, current.location, current.country)?;
    writeln!(f, "  {}  {}", current.temperature_label, current.description)?;
    writeln!(f, "  {}", current.feels_like_label)?;
    writeln!(
        f,
        "  Humidity {} | Wind {} | Pressure {} | Visibility {} | UV {}",
        current.humidity_label,
        current.wind_label,
        current.pressure_label,
        current.visibility_label,
        current.uv_index
    )
}

fn write_hourly(f: &mut Formatter<'_>, hourly: &[HourlyPoint]) -> fmt::Result {
    writeln!(f, "24-Hour Forecast")?;

    let min = hourly.iter().map(|h| h.temperature).min().unwrap_or(0);
    let max = hourly.iter().map(|h| h.temperature).max().unwrap_or(0);

    for point in hourly {
        let width = scale(point.temperature - min, max - min);
        writeln!(
            f,
            "  {} {} {:<w$} {:>4}° {:>3}%",
            point.label,
            point.condition.appearance().glyph,
            bar(width),
            point.temperature,
            point.precipitation_chance,
            w = CHART_WIDTH,
        )?;
    }
    Ok(())
}

fn write_daily(f: &mut Formatter<'_>, daily: &[DailyCard]) -> fmt::Result {
    writeln!(f, "7-Day Forecast")?;

    writeln!(f, "  {}", strip_row(daily, |d| d.day.clone()))?;
    writeln!(f, "  {}", strip_row(daily, |d| glyph(d.condition).to_string()))?;
    writeln!(f, "  {}", strip_row(daily, |d| format!("{}°", d.high)))?;
    writeln!(f, "  {}", strip_row(daily, |d| format!("{}°", d.low)))?;
    writeln!(f, "  {}", strip_row(daily, |d| format!("{}%", d.precipitation_chance)))
}

fn strip_row(daily: &[DailyCard], cell: impl Fn(&DailyCard) -> String) -> String {
    daily.iter().map(|d| format!("{:^7}", cell(d))).collect()
}

fn write_weekly(f: &mut Formatter<'_>, weekly: &[WeeklyStat], unit: DisplayUnit) -> fmt::Result {
    writeln!(f, "Weekly Weather Statistics")?;

    let max = weekly
        .iter()
        .flat_map(|s| [s.high, s.low, i64::from(s.humidity)])
        .max()
        .unwrap_or(0);
    let suffix = unit.temperature_suffix();

    for stat in weekly {
        writeln!(
            f,
            "  {}  High {:<w$} {}{suffix}",
            stat.day,
            bar(scale(stat.high, max)),
            stat.high,
            w = CHART_WIDTH
        )?;
        writeln!(
            f,
            "       Low  {:<w$} {}{suffix}",
            bar(scale(stat.low, max)),
            stat.low,
            w = CHART_WIDTH
        )?;
        writeln!(
            f,
            "       Hum  {:<w$} {}%",
            bar(scale(i64::from(stat.humidity), max)),
            stat.humidity,
            w = CHART_WIDTH
        )?;
    }
    Ok(())
}

fn glyph(condition: Condition) -> &'static str {
    condition.appearance().glyph
}

/// Bar length for `value` on a 0..=`max` axis. Negative values get no bar.
fn scale(value: i64, max: i64) -> usize {
    if max <= 0 || value <= 0 {
        return 0;
    }
    let width = CHART_WIDTH as i64;
    (value.min(max) * width / max) as usize
}

fn bar(width: usize) -> String {
    std::iter::repeat_n(BAR, width).collect()
}
