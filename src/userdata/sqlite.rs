use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;
use uuid::Uuid;

use super::model::*;
use super::repo::*;

const PROGRESS_STEP: f64 = 0.1;
const CONTINUE_WATCHING_LIMIT: i64 = 6;

/// SQLite-backed user data. Same contract as the in-memory backend; the
/// favorites invariant (no all-false rows) is enforced with a DELETE on
/// the last cleared flag.
pub struct SqliteRepository {
    pool: SqlitePool,
}

type FavoriteRow = (String, String, bool, bool, bool, String);
type HistoryRow = (String, String, String, f64);
type NotificationRow = (String, String, String, String, Option<String>, String, bool);

impl SqliteRepository {
    pub async fn new(db_path: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(db_path)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let repo = Self { pool };
        repo.init_schema().await?;

        info!("Database initialized at {}", db_path);

        Ok(repo)
    }

    async fn init_schema(&self) -> DbResult<()> {
        let schema = include_str!("schema.sql");
        sqlx::query(schema).execute(&self.pool).await?;
        Ok(())
    }

    async fn fetch_favorite(&self, movie_id: &str) -> DbResult<Option<FavoriteRecord>> {
        let row = sqlx::query_as::<_, FavoriteRow>(
            "SELECT id, movieid, bookmark, liked, watchlater, createdat
             FROM favorites WHERE movieid = ?",
        )
        .bind(movie_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(favorite_from_row))
    }

    async fn store_favorite(&self, record: &FavoriteRecord) -> DbResult<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO favorites
             (id, movieid, bookmark, liked, watchlater, createdat)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.movie_id)
        .bind(record.bookmark)
        .bind(record.like)
        .bind(record.watch_later)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

fn favorite_from_row(row: FavoriteRow) -> FavoriteRecord {
    FavoriteRecord {
        id: row.0,
        movie_id: row.1,
        bookmark: row.2,
        like: row.3,
        watch_later: row.4,
        created_at: parse_timestamp(&row.5),
    }
}

fn history_from_row(row: HistoryRow) -> WatchHistoryEntry {
    WatchHistoryEntry {
        id: row.0,
        movie_id: row.1,
        watched_at: parse_timestamp(&row.2),
        progress: row.3,
    }
}

fn notification_from_row(row: NotificationRow) -> Notification {
    Notification {
        id: row.0,
        kind: row.1,
        title: row.2,
        message: row.3,
        movie_id: row.4,
        created_at: parse_timestamp(&row.5),
        read: row.6,
    }
}

#[async_trait]
impl FavoriteRepo for SqliteRepository {
    async fn list_favorites(&self) -> DbResult<Vec<FavoriteRecord>> {
        let rows = sqlx::query_as::<_, FavoriteRow>(
            "SELECT id, movieid, bookmark, liked, watchlater, createdat
             FROM favorites ORDER BY createdat",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(favorite_from_row).collect())
    }

    async fn get_favorite(&self, movie_id: &str) -> DbResult<FavoriteRecord> {
        self.fetch_favorite(movie_id)
            .await?
            .ok_or_else(|| DbError::NotFound(format!("Favorite not found: {}", movie_id)))
    }

    async fn toggle_on(&self, movie_id: &str, flag: FavoriteFlag) -> DbResult<FavoriteRecord> {
        let mut record = match self.fetch_favorite(movie_id).await? {
            Some(record) => record,
            None => FavoriteRecord {
                id: format!("fav-{}", Uuid::new_v4()),
                movie_id: movie_id.to_string(),
                bookmark: false,
                like: false,
                watch_later: false,
                created_at: Utc::now(),
            },
        };

        record.set_flag(flag, true);
        self.store_favorite(&record).await?;
        Ok(record)
    }

    async fn toggle_off(
        &self,
        movie_id: &str,
        flag: FavoriteFlag,
    ) -> DbResult<Option<FavoriteRecord>> {
        let mut record = match self.fetch_favorite(movie_id).await? {
            Some(record) => record,
            None => return Ok(None),
        };

        record.set_flag(flag, false);
        if record.any_flag_set() {
            self.store_favorite(&record).await?;
            Ok(Some(record))
        } else {
            sqlx::query("DELETE FROM favorites WHERE movieid = ?")
                .bind(movie_id)
                .execute(&self.pool)
                .await?;
            Ok(None)
        }
    }
}

#[async_trait]
impl WatchHistoryRepo for SqliteRepository {
    async fn list_history(&self) -> DbResult<Vec<WatchHistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT id, movieid, watchedat, progress FROM watchhistory ORDER BY watchedat DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(history_from_row).collect())
    }

    async fn record_watch(&self, movie_id: &str) -> DbResult<WatchHistoryEntry> {
        let existing = sqlx::query_as::<_, HistoryRow>(
            "SELECT id, movieid, watchedat, progress FROM watchhistory WHERE movieid = ?",
        )
        .bind(movie_id)
        .fetch_optional(&self.pool)
        .await?;

        let entry = match existing {
            Some(row) => {
                let mut entry = history_from_row(row);
                entry.watched_at = Utc::now();
                entry.progress = (entry.progress + PROGRESS_STEP).min(1.0);
                entry
            }
            None => WatchHistoryEntry {
                id: format!("history-{}", Uuid::new_v4()),
                movie_id: movie_id.to_string(),
                watched_at: Utc::now(),
                progress: PROGRESS_STEP,
            },
        };

        sqlx::query(
            "INSERT OR REPLACE INTO watchhistory (id, movieid, watchedat, progress)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&entry.id)
        .bind(&entry.movie_id)
        .bind(entry.watched_at.to_rfc3339())
        .bind(entry.progress)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn continue_watching(&self) -> DbResult<Vec<WatchHistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT id, movieid, watchedat, progress FROM watchhistory
             WHERE progress < 1.0
             ORDER BY watchedat DESC
             LIMIT ?",
        )
        .bind(CONTINUE_WATCHING_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(history_from_row).collect())
    }
}

#[async_trait]
impl NotificationRepo for SqliteRepository {
    async fn list_notifications(&self) -> DbResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            "SELECT id, kind, title, message, movieid, createdat, isread
             FROM notifications ORDER BY createdat DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(notification_from_row).collect())
    }

    async fn mark_read(&self, id: &str) -> DbResult<Option<Notification>> {
        let result = sqlx::query("UPDATE notifications SET isread = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, NotificationRow>(
            "SELECT id, kind, title, message, movieid, createdat, isread
             FROM notifications WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(notification_from_row))
    }

    async fn mark_all_read(&self) -> DbResult<()> {
        sqlx::query("UPDATE notifications SET isread = 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

impl Repository for SqliteRepository {}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteRepository {
        // A shared in-memory database would not survive the pool opening a
        // second connection, so the tests use throwaway files instead.
        let path = std::env::temp_dir().join(format!("moviex-test-{}.db", Uuid::new_v4()));
        SqliteRepository::new(&format!("sqlite://{}", path.display()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_toggle_on_then_off_deletes_row() {
        let repo = repo().await;
        repo.toggle_on("1", FavoriteFlag::Like).await.unwrap();
        assert!(repo
            .toggle_off("1", FavoriteFlag::Like)
            .await
            .unwrap()
            .is_none());
        assert!(repo.list_favorites().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_off_keeps_row_with_remaining_flag() {
        let repo = repo().await;
        repo.toggle_on("1", FavoriteFlag::Like).await.unwrap();
        repo.toggle_on("1", FavoriteFlag::Bookmark).await.unwrap();
        let remaining = repo
            .toggle_off("1", FavoriteFlag::Like)
            .await
            .unwrap()
            .unwrap();
        assert!(remaining.bookmark);
        assert!(!remaining.like);
        assert_eq!(repo.list_favorites().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_watch_progress_accumulates() {
        let repo = repo().await;
        repo.record_watch("1").await.unwrap();
        let entry = repo.record_watch("1").await.unwrap();
        assert!((entry.progress - 0.2).abs() < 1e-9);

        let history = repo.list_history().await.unwrap();
        assert_eq!(history.len(), 1);
    }
}
