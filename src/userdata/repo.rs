use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait FavoriteRepo: Send + Sync {
    async fn list_favorites(&self) -> DbResult<Vec<FavoriteRecord>>;
    async fn get_favorite(&self, movie_id: &str) -> DbResult<FavoriteRecord>;
    /// Set a flag, creating the record on first toggle.
    async fn toggle_on(&self, movie_id: &str, flag: FavoriteFlag) -> DbResult<FavoriteRecord>;
    /// Clear a flag; deletes the record when its last flag goes false.
    /// Ok(None) means the record no longer exists (or never did).
    async fn toggle_off(
        &self,
        movie_id: &str,
        flag: FavoriteFlag,
    ) -> DbResult<Option<FavoriteRecord>>;
}

#[async_trait]
pub trait WatchHistoryRepo: Send + Sync {
    async fn list_history(&self) -> DbResult<Vec<WatchHistoryEntry>>;
    async fn record_watch(&self, movie_id: &str) -> DbResult<WatchHistoryEntry>;
    async fn continue_watching(&self) -> DbResult<Vec<WatchHistoryEntry>>;
}

#[async_trait]
pub trait NotificationRepo: Send + Sync {
    async fn list_notifications(&self) -> DbResult<Vec<Notification>>;
    async fn mark_read(&self, id: &str) -> DbResult<Option<Notification>>;
    async fn mark_all_read(&self) -> DbResult<()>;
}

pub trait Repository: FavoriteRepo + WatchHistoryRepo + NotificationRepo + Send + Sync {}
