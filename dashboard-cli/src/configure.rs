use anyhow::Result;
use dashboard_core::{Config, DisplayUnit};
use inquire::{Confirm, CustomType, Select};

/// Walk through the settings and save them to the config file.
pub fn run() -> Result<()> {
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;

    let units = vec![DisplayUnit::Metric, DisplayUnit::Imperial];
    let cursor = units.iter().position(|u| *u == config.default_unit).unwrap_or(0);
    let unit = Select::new("Default unit system:", units).with_starting_cursor(cursor).prompt()?;
    config.set_default_unit(unit);

    config.search_delay_ms = CustomType::<u64>::new("Simulated search delay (ms):")
        .with_default(config.search_delay_ms)
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()?;

    let geo_enabled = config.geolocation.as_ref().is_some_and(|geo| geo.enabled);
    if Confirm::new("Allow location lookup?").with_default(geo_enabled).prompt()? {
        let current = config.geolocation.as_ref();
        let latitude = CustomType::<f64>::new("Latitude:")
            .with_default(current.and_then(|geo| geo.latitude).unwrap_or(0.0))
            .prompt()?;
        let longitude = CustomType::<f64>::new("Longitude:")
            .with_default(current.and_then(|geo| geo.longitude).unwrap_or(0.0))
            .prompt()?;

        config.set_coordinates(latitude, longitude);
        config.set_geolocation_enabled(true);
    } else if config.geolocation.is_some() {
        config.set_geolocation_enabled(false);
    }

    config.save_to(&path)?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
