//! Season registry: named periods projects can be grouped under.
//!
//! At most one season is active at a time. Activating a season deactivates
//! the previous one; activating `None` leaves no active season.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    pub name: String,
    pub active: bool,
}

pub struct SeasonStore {
    inner: RwLock<Vec<Season>>,
}

impl SeasonStore {
    /// A store seeded with the current season, already active.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(vec![Season {
                id: "season-2024".into(),
                name: "Saison 2024".into(),
                active: true,
            }]),
        }
    }

    pub fn list(&self) -> Vec<Season> {
        self.inner.read().expect("season store lock poisoned").clone()
    }

    pub fn get(&self, id: &str) -> Option<Season> {
        self.inner
            .read()
            .expect("season store lock poisoned")
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub fn create(&self, name: String) -> Season {
        let season = Season {
            id: Uuid::new_v4().to_string(),
            name,
            active: false,
        };
        self.inner
            .write()
            .expect("season store lock poisoned")
            .push(season.clone());
        tracing::info!(season_id = %season.id, name = %season.name, "Season created");
        season
    }

    /// Make `id` the single active season, or clear the active season when
    /// `id` is `None`. Returns `false` if the id is unknown (and changes
    /// nothing).
    pub fn set_active(&self, id: Option<&str>) -> bool {
        let mut seasons = self.inner.write().expect("season store lock poisoned");
        if let Some(id) = id {
            if !seasons.iter().any(|s| s.id == id) {
                return false;
            }
        }
        for season in seasons.iter_mut() {
            season.active = id == Some(season.id.as_str());
        }
        true
    }

    pub fn active(&self) -> Option<Season> {
        self.inner
            .read()
            .expect("season store lock poisoned")
            .iter()
            .find(|s| s.active)
            .cloned()
    }
}

impl Default for SeasonStore {
    fn default() -> Self {
        Self::new()
    }
}
