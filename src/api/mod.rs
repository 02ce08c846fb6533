pub mod favorites;
pub mod history;
pub mod metadata;
pub mod movies;
pub mod notifications;
pub mod preferences;
pub mod types;

use std::time::Duration;

use crate::server::AppState;

/// Sleep for the configured mock delay. The front end was written against
/// endpoints with simulated latency, so the canned responses keep it.
/// Off when a database is configured, see [`Config::mock_delay_ms`](crate::config::Config::mock_delay_ms).
pub(crate) async fn mock_delay(state: &AppState) {
    let delay_ms = state.config.mock_delay_ms();
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
