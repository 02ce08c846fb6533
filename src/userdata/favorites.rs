use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use super::model::{FavoriteFlag, FavoriteRecord};

/// In-memory favorites state. Owned explicitly by the caller and mutated
/// only through [`toggle_on`](FavoriteStore::toggle_on) and
/// [`toggle_off`](FavoriteStore::toggle_off), which maintain the two
/// invariants: at most one record per movie, and no record with all three
/// flags false.
#[derive(Debug, Default, Clone)]
pub struct FavoriteStore {
    records: Vec<FavoriteRecord>,
}

impl FavoriteStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Rebuild from persisted records. All-false records are dropped here
    /// instead of ever becoming observable, and only the first record for
    /// a movie is kept.
    pub fn from_records(records: Vec<FavoriteRecord>) -> Self {
        let mut seen = HashSet::new();
        Self {
            records: records
                .into_iter()
                .filter(|r| r.any_flag_set() && seen.insert(r.movie_id.clone()))
                .collect(),
        }
    }

    pub fn list(&self) -> &[FavoriteRecord] {
        &self.records
    }

    pub fn get(&self, movie_id: &str) -> Option<&FavoriteRecord> {
        self.records.iter().find(|r| r.movie_id == movie_id)
    }

    /// Set `flag` on the movie's record, creating the record if needed.
    /// Idempotent when the flag is already set. Returns the resulting
    /// record.
    pub fn toggle_on(&mut self, movie_id: &str, flag: FavoriteFlag) -> FavoriteRecord {
        if let Some(record) = self.records.iter_mut().find(|r| r.movie_id == movie_id) {
            record.set_flag(flag, true);
            return record.clone();
        }

        let mut record = FavoriteRecord {
            id: format!("fav-{}", Uuid::new_v4()),
            movie_id: movie_id.to_string(),
            bookmark: false,
            like: false,
            watch_later: false,
            created_at: Utc::now(),
        };
        record.set_flag(flag, true);
        self.records.push(record.clone());
        record
    }

    /// Clear `flag` on the movie's record. A record whose last true flag
    /// is cleared is deleted entirely. No-op when no record exists.
    /// Returns the record as it remains, or None when absent or deleted.
    pub fn toggle_off(&mut self, movie_id: &str, flag: FavoriteFlag) -> Option<FavoriteRecord> {
        let pos = self.records.iter().position(|r| r.movie_id == movie_id)?;

        self.records[pos].set_flag(flag, false);
        if self.records[pos].any_flag_set() {
            Some(self.records[pos].clone())
        } else {
            self.records.remove(pos);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FavoriteFlag::*;

    #[test]
    fn test_toggle_on_creates_record() {
        let mut store = FavoriteStore::new();
        let record = store.toggle_on("1", Like);
        assert!(record.like);
        assert!(!record.bookmark);
        assert!(!record.watch_later);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_toggle_on_round_trip_leaves_no_record() {
        let mut store = FavoriteStore::new();
        store.toggle_on("1", Like);
        let result = store.toggle_off("1", Like);
        assert!(result.is_none());
        assert!(store.get("1").is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_toggle_on_two_flags_yields_one_record() {
        let mut store = FavoriteStore::new();
        store.toggle_on("1", Like);
        store.toggle_on("1", Bookmark);
        assert_eq!(store.list().len(), 1);
        let record = store.get("1").unwrap();
        assert!(record.like && record.bookmark && !record.watch_later);
    }

    #[test]
    fn test_toggle_on_is_idempotent() {
        let mut store = FavoriteStore::new();
        let first = store.toggle_on("1", Like);
        let second = store.toggle_on("1", Like);
        assert_eq!(first.id, second.id);
        assert!(second.flag(Like));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_toggle_off_keeps_record_while_other_flags_set() {
        let mut store = FavoriteStore::new();
        store.toggle_on("1", Like);
        store.toggle_on("1", WatchLater);
        let remaining = store.toggle_off("1", Like).unwrap();
        assert!(!remaining.flag(Like));
        assert!(remaining.flag(WatchLater));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_toggle_off_last_flag_deletes_record() {
        let mut store = FavoriteStore::new();
        store.toggle_on("1", Bookmark);
        store.toggle_on("1", WatchLater);
        assert!(store.toggle_off("1", Bookmark).is_some());
        // The uniform rule: clearing the last remaining flag removes the
        // record regardless of which flag it is.
        assert!(store.toggle_off("1", WatchLater).is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_toggle_off_missing_record_is_noop() {
        let mut store = FavoriteStore::new();
        assert!(store.toggle_off("nope", Like).is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_records_never_all_false() {
        let mut store = FavoriteStore::new();
        for movie_id in ["1", "2", "3"] {
            store.toggle_on(movie_id, Like);
            store.toggle_on(movie_id, Bookmark);
        }
        store.toggle_off("2", Like);
        store.toggle_off("2", Bookmark);
        for record in store.list() {
            assert!(record.any_flag_set());
        }
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_from_records_drops_all_false_rows() {
        let mut seeded = FavoriteStore::new();
        seeded.toggle_on("1", Like);
        let mut records = seeded.list().to_vec();
        records.push(FavoriteRecord {
            id: "fav-bad".to_string(),
            movie_id: "2".to_string(),
            bookmark: false,
            like: false,
            watch_later: false,
            created_at: chrono::Utc::now(),
        });

        let store = FavoriteStore::from_records(records);
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].movie_id, "1");
    }

    #[test]
    fn test_from_records_keeps_one_record_per_movie() {
        let record = |id: &str, movie_id: &str| FavoriteRecord {
            id: id.to_string(),
            movie_id: movie_id.to_string(),
            bookmark: true,
            like: false,
            watch_later: false,
            created_at: chrono::Utc::now(),
        };
        // Duplicates are not necessarily adjacent in a seed file.
        let records = vec![record("fav-a", "1"), record("fav-b", "2"), record("fav-c", "1")];

        let store = FavoriteStore::from_records(records);
        assert_eq!(store.list().len(), 2);
        // First record wins.
        assert_eq!(store.get("1").unwrap().id, "fav-a");
        assert_eq!(store.get("2").unwrap().id, "fav-b");
    }
}
