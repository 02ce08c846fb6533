use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use super::model::WatchHistoryEntry;

const PROGRESS_STEP: f64 = 0.1;
const CONTINUE_WATCHING_LIMIT: usize = 6;

/// In-memory watch history, one entry per movie.
#[derive(Debug, Default, Clone)]
pub struct WatchHistoryStore {
    entries: Vec<WatchHistoryEntry>,
}

impl WatchHistoryStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rebuild from persisted entries, keeping only the first entry seen
    /// for each movie.
    pub fn from_entries(entries: Vec<WatchHistoryEntry>) -> Self {
        let mut seen = HashSet::new();
        Self {
            entries: entries
                .into_iter()
                .filter(|e| seen.insert(e.movie_id.clone()))
                .collect(),
        }
    }

    pub fn list(&self) -> &[WatchHistoryEntry] {
        &self.entries
    }

    pub fn get(&self, movie_id: &str) -> Option<&WatchHistoryEntry> {
        self.entries.iter().find(|e| e.movie_id == movie_id)
    }

    /// Record a watch event: bump progress by one step (capped at 1.0) and
    /// refresh the watched-at timestamp, creating the entry on first watch.
    pub fn record_watch(&mut self, movie_id: &str) -> WatchHistoryEntry {
        let now = Utc::now();

        if let Some(entry) = self.entries.iter_mut().find(|e| e.movie_id == movie_id) {
            entry.watched_at = now;
            entry.progress = (entry.progress + PROGRESS_STEP).min(1.0);
            return entry.clone();
        }

        let entry = WatchHistoryEntry {
            id: format!("history-{}", Uuid::new_v4()),
            movie_id: movie_id.to_string(),
            watched_at: now,
            progress: PROGRESS_STEP,
        };
        self.entries.push(entry.clone());
        entry
    }

    /// Unfinished entries, most recently watched first, capped at six.
    pub fn continue_watching(&self) -> Vec<WatchHistoryEntry> {
        let mut unfinished: Vec<WatchHistoryEntry> = self
            .entries
            .iter()
            .filter(|e| e.progress < 1.0)
            .cloned()
            .collect();
        unfinished.sort_by(|a, b| b.watched_at.cmp(&a.watched_at));
        unfinished.truncate(CONTINUE_WATCHING_LIMIT);
        unfinished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_record_watch_creates_entry() {
        let mut store = WatchHistoryStore::new();
        let entry = store.record_watch("1");
        assert!((entry.progress - 0.1).abs() < 1e-9);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_record_watch_bumps_progress() {
        let mut store = WatchHistoryStore::new();
        store.record_watch("1");
        let entry = store.record_watch("1");
        assert!((entry.progress - 0.2).abs() < 1e-9);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_progress_is_capped_at_one() {
        let mut store = WatchHistoryStore::new();
        for _ in 0..20 {
            store.record_watch("1");
        }
        assert_eq!(store.get("1").unwrap().progress, 1.0);
    }

    #[test]
    fn test_continue_watching_excludes_finished() {
        let mut store = WatchHistoryStore::new();
        store.record_watch("done");
        for _ in 0..20 {
            store.record_watch("done");
        }
        store.record_watch("partial");
        let unfinished = store.continue_watching();
        assert_eq!(unfinished.len(), 1);
        assert_eq!(unfinished[0].movie_id, "partial");
    }

    #[test]
    fn test_continue_watching_is_recent_first_and_capped() {
        let base = Utc::now();
        let entries = (0..10i64)
            .map(|i| WatchHistoryEntry {
                id: format!("history-{}", i),
                movie_id: format!("{}", i),
                watched_at: base + Duration::minutes(i),
                progress: 0.5,
            })
            .collect();
        let store = WatchHistoryStore::from_entries(entries);

        let unfinished = store.continue_watching();
        assert_eq!(unfinished.len(), 6);
        assert_eq!(unfinished[0].movie_id, "9");
        assert_eq!(unfinished[5].movie_id, "4");
    }

    #[test]
    fn test_from_entries_keeps_one_entry_per_movie() {
        let entry = |id: &str, movie_id: &str, progress: f64| WatchHistoryEntry {
            id: id.to_string(),
            movie_id: movie_id.to_string(),
            watched_at: Utc::now(),
            progress,
        };
        let entries = vec![
            entry("history-a", "1", 0.3),
            entry("history-b", "2", 0.5),
            entry("history-c", "1", 0.9),
        ];

        let store = WatchHistoryStore::from_entries(entries);
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.get("1").unwrap().id, "history-a");
        assert!((store.get("1").unwrap().progress - 0.3).abs() < 1e-9);
    }
}
