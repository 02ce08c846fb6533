pub mod favorites;
pub mod history;
pub mod memory;
pub mod model;
pub mod notifications;
pub mod repo;
pub mod sqlite;

pub use favorites::FavoriteStore;
pub use history::WatchHistoryStore;
pub use memory::MemoryRepository;
pub use model::*;
pub use notifications::NotificationStore;
pub use repo::{FavoriteRepo, NotificationRepo, Repository, WatchHistoryRepo};
pub use sqlite::SqliteRepository;
