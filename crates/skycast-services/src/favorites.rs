//! Flat-file storage for the user's favorite cities.
//!
//! The backing file is a single JSON object mapping city name to a boolean
//! flag; presence of a key means "favorited" (the value is always `true`).
//! Persistence is best-effort: every mutation is a plain load-mutate-save
//! with no locking or atomic rename, so concurrent writers race and the
//! last save wins. Callers must assume a single writer.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// City name -> favorited flag, as persisted on disk
pub type FavoriteCities = HashMap<String, bool>;

pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the persisted mapping.
    ///
    /// A missing, unreadable, or malformed file yields an empty mapping;
    /// this never fails the caller.
    pub fn load(&self) -> FavoriteCities {
        match self.try_load() {
            Ok(cities) => cities,
            Err(e) => {
                tracing::debug!(
                    "Treating favorites file {} as empty: {}",
                    self.path.display(),
                    e
                );
                FavoriteCities::new()
            }
        }
    }

    fn try_load(&self) -> Result<FavoriteCities> {
        if !self.path.exists() {
            return Ok(FavoriteCities::new());
        }

        let contents = std::fs::read_to_string(&self.path)
            .context("Failed to read favorites file")?;

        serde_json::from_str(&contents).context("Failed to parse favorites file")
    }

    /// Serialize and overwrite the whole backing file.
    ///
    /// Write failures are logged and otherwise swallowed; the in-memory
    /// change is simply lost. Favorites are best-effort, not durable.
    pub fn save(&self, cities: &FavoriteCities) {
        if let Err(e) = self.try_save(cities) {
            tracing::warn!(
                "Failed to save favorites to {}: {}",
                self.path.display(),
                e
            );
        }
    }

    fn try_save(&self, cities: &FavoriteCities) -> Result<()> {
        let contents =
            serde_json::to_string(cities).context("Failed to serialize favorites")?;

        std::fs::write(&self.path, contents).context("Failed to write favorites file")
    }

    /// Mark a city as favorited
    pub fn add(&self, city: &str) {
        let mut cities = self.load();
        cities.insert(city.to_string(), true);
        self.save(&cities);
    }

    /// Remove a city from the favorites
    pub fn remove(&self, city: &str) {
        let mut cities = self.load();
        if cities.remove(city).is_some() {
            self.save(&cities);
        }
    }

    /// Favorited city names, sorted for stable display
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.load().into_keys().collect();
        names.sort();
        names
    }
}
