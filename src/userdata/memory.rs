use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use super::favorites::FavoriteStore;
use super::history::WatchHistoryStore;
use super::model::*;
use super::notifications::NotificationStore;
use super::repo::*;
use crate::config::MockConfig;

/// Default "mock" backend: user data lives only in memory for the session,
/// optionally seeded from JSON files named in the config.
pub struct MemoryRepository {
    favorites: RwLock<FavoriteStore>,
    history: RwLock<WatchHistoryStore>,
    notifications: RwLock<NotificationStore>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            favorites: RwLock::new(FavoriteStore::new()),
            history: RwLock::new(WatchHistoryStore::new()),
            notifications: RwLock::new(NotificationStore::new()),
        }
    }

    pub async fn from_config(config: &MockConfig) -> DbResult<Self> {
        let favorites = match config.favorites {
            Some(ref path) => FavoriteStore::from_records(read_seed(path).await?),
            None => FavoriteStore::new(),
        };
        let history = match config.watch_history {
            Some(ref path) => WatchHistoryStore::from_entries(read_seed(path).await?),
            None => WatchHistoryStore::new(),
        };
        let notifications = match config.notifications {
            Some(ref path) => NotificationStore::from_notifications(read_seed(path).await?),
            None => NotificationStore::new(),
        };

        info!(
            "In-memory user data ready ({} favorites, {} history entries, {} notifications)",
            favorites.list().len(),
            history.list().len(),
            notifications.list().len(),
        );

        Ok(Self {
            favorites: RwLock::new(favorites),
            history: RwLock::new(history),
            notifications: RwLock::new(notifications),
        })
    }
}

async fn read_seed<T: serde::de::DeserializeOwned>(path: &str) -> DbResult<Vec<T>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DbError::Seed(format!("{}: {}", path, e)))?;
    serde_json::from_str(&content).map_err(|e| DbError::Seed(format!("{}: {}", path, e)))
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteRepo for MemoryRepository {
    async fn list_favorites(&self) -> DbResult<Vec<FavoriteRecord>> {
        Ok(self.favorites.read().await.list().to_vec())
    }

    async fn get_favorite(&self, movie_id: &str) -> DbResult<FavoriteRecord> {
        self.favorites
            .read()
            .await
            .get(movie_id)
            .cloned()
            .ok_or_else(|| DbError::NotFound(format!("Favorite not found: {}", movie_id)))
    }

    async fn toggle_on(&self, movie_id: &str, flag: FavoriteFlag) -> DbResult<FavoriteRecord> {
        Ok(self.favorites.write().await.toggle_on(movie_id, flag))
    }

    async fn toggle_off(
        &self,
        movie_id: &str,
        flag: FavoriteFlag,
    ) -> DbResult<Option<FavoriteRecord>> {
        Ok(self.favorites.write().await.toggle_off(movie_id, flag))
    }
}

#[async_trait]
impl WatchHistoryRepo for MemoryRepository {
    async fn list_history(&self) -> DbResult<Vec<WatchHistoryEntry>> {
        Ok(self.history.read().await.list().to_vec())
    }

    async fn record_watch(&self, movie_id: &str) -> DbResult<WatchHistoryEntry> {
        Ok(self.history.write().await.record_watch(movie_id))
    }

    async fn continue_watching(&self) -> DbResult<Vec<WatchHistoryEntry>> {
        Ok(self.history.read().await.continue_watching())
    }
}

#[async_trait]
impl NotificationRepo for MemoryRepository {
    async fn list_notifications(&self) -> DbResult<Vec<Notification>> {
        Ok(self.notifications.read().await.list().to_vec())
    }

    async fn mark_read(&self, id: &str) -> DbResult<Option<Notification>> {
        Ok(self.notifications.write().await.mark_read(id))
    }

    async fn mark_all_read(&self) -> DbResult<()> {
        self.notifications.write().await.mark_all_read();
        Ok(())
    }
}

impl Repository for MemoryRepository {}
