use anyhow::bail;
use clap::{Parser, Subcommand};
use dashboard_core::{Config, Dashboard, DisplayUnit, FileStore, KeyValueStore, MemoryStore};
use std::sync::Arc;

use crate::{
    configure, interactive,
    render::{FavoritesPanel, Screen},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Weather dashboard with placeholder data")]
pub struct Cli {
    /// Unit system for display; defaults to the configured one.
    #[arg(long, global = true, value_parser = parse_unit)]
    pub unit: Option<DisplayUnit>,

    /// Keep favorites in memory only, leaving saved favorites untouched.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dashboard for a city.
    Show {
        /// City or location name.
        city: String,
    },

    /// Show the dashboard for the current location.
    Locate,

    /// Manage favorite locations.
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },

    /// Open the interactive dashboard.
    Dashboard,

    /// Edit settings interactively.
    Configure,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List saved favorites.
    List,

    /// Add a city to favorites, or remove it if already saved.
    Toggle {
        city: String,
    },

    /// Show the dashboard for a saved favorite.
    Refresh {
        city: String,
    },
}

fn parse_unit(value: &str) -> Result<DisplayUnit, String> {
    DisplayUnit::try_from(value).map_err(|err| err.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let dashboard = match self.command {
            Command::Configure => return configure::run(),
            _ => open_dashboard(self.unit, self.ephemeral)?,
        };

        match self.command {
            Command::Show { city } => {
                if city.trim().is_empty() {
                    bail!("City name must not be empty.");
                }
                eprintln!("Loading weather for {city}...");
                dashboard.search(&city).await;
                print!("{}", Screen(&dashboard.view()));
            }
            Command::Locate => {
                dashboard.use_current_location().await;
                print!("{}", Screen(&dashboard.view()));
            }
            Command::Favorites { action } => run_favorites(&dashboard, action).await?,
            Command::Dashboard => interactive::run(&dashboard).await?,
            Command::Configure => {}
        }

        Ok(())
    }
}

fn open_dashboard(unit: Option<DisplayUnit>, ephemeral: bool) -> anyhow::Result<Dashboard> {
    let mut config = Config::load()?;
    if let Some(unit) = unit {
        config.set_default_unit(unit);
    }

    let store: Arc<dyn KeyValueStore> = if ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        let store = FileStore::open_default()?;
        tracing::debug!(path = %store.path().display(), "using favorites storage");
        Arc::new(store)
    };

    Ok(Dashboard::from_config(&config, store))
}

async fn run_favorites(dashboard: &Dashboard, action: FavoritesCommand) -> anyhow::Result<()> {
    match action {
        FavoritesCommand::List => {
            let view = dashboard.view();
            print!("{}", FavoritesPanel { favorites: &view.favorites, unit: view.unit });
        }
        FavoritesCommand::Toggle { city } => {
            if city.trim().is_empty() {
                bail!("City name must not be empty.");
            }
            // New favorites capture the weather at the time they are added.
            if !dashboard.is_favorite(&city) {
                dashboard.search(&city).await;
            }
            if dashboard.toggle_favorite(&city) {
                println!("Added {city} to favorites.");
            } else {
                println!("Removed {city} from favorites.");
            }
        }
        FavoritesCommand::Refresh { city } => {
            if !dashboard.is_favorite(&city) {
                bail!(
                    "'{city}' is not a favorite.\n\
                     Hint: run `weather-dashboard favorites toggle \"{city}\"` first."
                );
            }
            dashboard.refresh_favorite(&city).await;
            print!("{}", Screen(&dashboard.view()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_unit_after_subcommand() {
        let cli = Cli::try_parse_from(["weather-dashboard", "show", "Tokyo", "--unit", "imperial"])
            .unwrap();

        assert_eq!(cli.unit, Some(DisplayUnit::Imperial));
        assert!(matches!(cli.command, Command::Show { ref city } if city == "Tokyo"));
    }

    #[test]
    fn rejects_unknown_unit() {
        let err = Cli::try_parse_from(["weather-dashboard", "--unit", "kelvin", "locate"])
            .unwrap_err();
        assert!(err.to_string().contains("Unknown unit system"));
    }

    #[test]
    fn parses_favorites_toggle() {
        let cli =
            Cli::try_parse_from(["weather-dashboard", "--ephemeral", "favorites", "toggle", "Paris"])
                .unwrap();

        assert!(cli.ephemeral);
        assert!(matches!(
            cli.command,
            Command::Favorites { action: FavoritesCommand::Toggle { ref city } } if city == "Paris"
        ));
    }
}
