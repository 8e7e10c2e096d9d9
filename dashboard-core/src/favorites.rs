use chrono::Utc;
use std::sync::Arc;

use crate::{
    model::{FavoriteLocation, WeatherSnapshot},
    storage::KeyValueStore,
};

/// Storage key holding the serialized favorites list.
pub const FAVORITES_KEY: &str = "weatherFavorites";

/// Ordered list of pinned locations, keyed by exact name.
///
/// Loaded once from the backing store; every change writes the full list back.
#[derive(Debug)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<FavoriteLocation>,
}

impl FavoritesStore {
    /// Read the saved list. Missing or unparseable data yields an empty list.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring unparseable favorites");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read favorites");
                Vec::new()
            }
        };

        tracing::debug!(count = entries.len(), "loaded favorites");
        Self { store, entries }
    }

    pub fn entries(&self) -> &[FavoriteLocation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FavoriteLocation> {
        self.entries.iter().find(|fav| fav.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove `name` if present, otherwise append it with the temperature and
    /// condition of `snapshot`. Returns whether `name` is now a favorite.
    pub fn toggle(&mut self, name: &str, snapshot: Option<&WeatherSnapshot>) -> bool {
        let added = if self.contains(name) {
            self.entries.retain(|fav| fav.name != name);
            tracing::info!(name, "removed favorite");
            false
        } else {
            self.entries.push(FavoriteLocation {
                name: name.to_string(),
                added_at: Utc::now(),
                temperature: snapshot.map(|s| s.temperature),
                condition: snapshot.map(|s| s.condition),
            });
            tracing::info!(name, "added favorite");
            true
        };

        self.persist();
        added
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.store.set(FAVORITES_KEY, &json));

        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to save favorites");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::Condition, storage::MemoryStore};

    fn snapshot(location: &str, temperature: f64, condition: Condition) -> WeatherSnapshot {
        WeatherSnapshot {
            location: location.into(),
            country: "Country".into(),
            temperature,
            condition,
            description: condition.description().into(),
            humidity: 50,
            wind_speed: 10.0,
            pressure: 1013.0,
            visibility: 10.0,
            uv_index: 3,
            feels_like: temperature,
        }
    }

    fn empty() -> (Arc<MemoryStore>, FavoritesStore) {
        let backing = Arc::new(MemoryStore::new());
        let favorites = FavoritesStore::load(backing.clone());
        (backing, favorites)
    }

    #[test]
    fn toggle_paris_adds_then_removes() {
        let (_, mut favorites) = empty();

        assert!(favorites.toggle("Paris", None));
        assert_eq!(favorites.len(), 1);
        assert!(favorites.contains("Paris"));

        assert!(!favorites.toggle("Paris", None));
        assert!(favorites.is_empty());
    }

    #[test]
    fn double_toggle_restores_membership() {
        let (_, mut favorites) = empty();
        favorites.toggle("Berlin", None);
        favorites.toggle("Madrid", None);
        let before: Vec<_> = favorites.entries().iter().map(|f| f.name.clone()).collect();

        favorites.toggle("Rome", None);
        favorites.toggle("Rome", None);

        let after: Vec<_> = favorites.entries().iter().map(|f| f.name.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn toggle_captures_snapshot_values() {
        let (_, mut favorites) = empty();
        let snap = snapshot("Tokyo", 24.0, Condition::Rainy);

        favorites.toggle("Tokyo", Some(&snap));

        let fav = favorites.get("Tokyo").unwrap();
        assert_eq!(fav.temperature, Some(24.0));
        assert_eq!(fav.condition, Some(Condition::Rainy));
    }

    #[test]
    fn names_match_exactly() {
        let (_, mut favorites) = empty();
        favorites.toggle("paris", None);
        favorites.toggle("Paris", None);

        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn changes_are_written_through_and_reloaded() {
        let (backing, mut favorites) = empty();
        favorites.toggle("Oslo", Some(&snapshot("Oslo", 3.0, Condition::Snowy)));
        favorites.toggle("Cairo", None);

        let raw = backing.get(FAVORITES_KEY).unwrap().unwrap();
        assert!(raw.contains("\"addedAt\""));

        let reloaded = FavoritesStore::load(backing);
        let names: Vec<_> = reloaded.entries().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Oslo", "Cairo"]);
        assert_eq!(reloaded.get("Oslo").unwrap().condition, Some(Condition::Snowy));
    }

    #[test]
    fn unparseable_data_loads_as_empty() {
        let backing = Arc::new(MemoryStore::new());
        backing.set(FAVORITES_KEY, "{not a list").unwrap();

        let favorites = FavoritesStore::load(backing);
        assert!(favorites.is_empty());
    }
}
