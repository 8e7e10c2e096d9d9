use anyhow::Result;
use dashboard_core::{Dashboard, DisplayUnit};
use inquire::{InquireError, Select, Text};
use std::fmt;

use crate::render::Screen;

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Search,
    UseLocation,
    ToggleFavoritesPanel { visible: bool },
    SwitchUnit(DisplayUnit),
    ToggleFavorite { pinned: bool },
    RefreshFavorite,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Search => f.write_str("Search for a city"),
            Action::UseLocation => f.write_str("Use my location"),
            Action::ToggleFavoritesPanel { visible: true } => f.write_str("Hide favorites"),
            Action::ToggleFavoritesPanel { visible: false } => f.write_str("Show favorites"),
            Action::SwitchUnit(unit) => write!(f, "Switch to {}", unit.temperature_suffix()),
            Action::ToggleFavorite { pinned: true } => f.write_str("Remove from favorites"),
            Action::ToggleFavorite { pinned: false } => f.write_str("Add to favorites"),
            Action::RefreshFavorite => f.write_str("Refresh a favorite"),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

/// Menu entries that make sense for the current state.
fn actions(dashboard: &Dashboard) -> Vec<Action> {
    let view = dashboard.view();

    let mut actions = vec![
        Action::Search,
        Action::UseLocation,
        Action::ToggleFavoritesPanel { visible: view.show_favorites },
        Action::SwitchUnit(view.unit.toggled()),
    ];
    if let Some(weather) = &view.weather {
        actions.push(Action::ToggleFavorite { pinned: weather.current.is_favorite });
    }
    if !view.favorites.is_empty() {
        actions.push(Action::RefreshFavorite);
    }
    actions.push(Action::Quit);
    actions
}

/// Run the dashboard until the user quits or cancels a prompt.
pub async fn run(dashboard: &Dashboard) -> Result<()> {
    // Startup: show the current location first.
    dashboard.use_current_location().await;

    loop {
        println!();
        print!("{}", Screen(&dashboard.view()));

        let Some(action) = cancellable(Select::new("What next?", actions(dashboard)).prompt())?
        else {
            break;
        };

        match action {
            Action::Search => {
                let Some(query) = cancellable(Text::new("City:").prompt())? else {
                    continue;
                };
                dashboard.set_search_query(query);
                eprintln!("Loading...");
                dashboard.submit_search().await;
            }
            Action::UseLocation => dashboard.use_current_location().await,
            Action::ToggleFavoritesPanel { .. } => {
                dashboard.toggle_favorites_panel();
            }
            Action::SwitchUnit(unit) => dashboard.set_unit(unit),
            Action::ToggleFavorite { .. } => {
                dashboard.toggle_current_favorite();
            }
            Action::RefreshFavorite => {
                let names: Vec<String> =
                    dashboard.favorites().into_iter().map(|fav| fav.name).collect();
                let Some(name) = cancellable(Select::new("Favorite:", names).prompt())? else {
                    continue;
                };
                eprintln!("Loading...");
                dashboard.refresh_favorite(&name).await;
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Map Esc / Ctrl-C to `None` so the caller can back out.
fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{
        DashboardOptions, MemoryStore, geolocation::FixedGeolocator, provider::mock::MockProvider,
    };
    use std::sync::Arc;

    fn dashboard() -> Dashboard {
        Dashboard::new(
            Arc::new(MockProvider::seeded(12)),
            Arc::new(FixedGeolocator::new(10.0, 20.0)),
            Arc::new(MemoryStore::new()),
            DashboardOptions::default(),
        )
    }

    #[test]
    fn idle_menu_has_no_favorite_actions() {
        let actions = actions(&dashboard());

        assert!(!actions.iter().any(|a| matches!(a, Action::ToggleFavorite { .. })));
        assert!(!actions.contains(&Action::RefreshFavorite));
        assert_eq!(actions.last(), Some(&Action::Quit));
        assert!(actions.contains(&Action::SwitchUnit(DisplayUnit::Imperial)));
    }

    #[tokio::test]
    async fn loaded_menu_offers_favorite_toggle() {
        let dash = dashboard();
        dash.use_current_location().await;

        assert!(actions(&dash).contains(&Action::ToggleFavorite { pinned: false }));

        dash.toggle_current_favorite();
        let actions = actions(&dash);
        assert!(actions.contains(&Action::ToggleFavorite { pinned: true }));
        assert!(actions.contains(&Action::RefreshFavorite));
    }

    #[test]
    fn action_labels() {
        assert_eq!(Action::SwitchUnit(DisplayUnit::Imperial).to_string(), "Switch to °F");
        assert_eq!(
            Action::ToggleFavoritesPanel { visible: true }.to_string(),
            "Hide favorites"
        );
    }

    #[test]
    fn cancelled_prompt_is_none() {
        let res: Result<Option<String>> = cancellable(Err(InquireError::OperationCanceled));
        assert!(res.unwrap().is_none());
    }
}
