use super::model::Notification;

/// In-memory notification inbox.
#[derive(Debug, Default, Clone)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }

    pub fn from_notifications(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn list(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read. Unknown ids are a no-op. Returns the
    /// updated notification if it exists.
    pub fn mark_read(&mut self, id: &str) -> Option<Notification> {
        let notification = self.notifications.iter_mut().find(|n| n.id == id)?;
        notification.read = true;
        Some(notification.clone())
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn inbox() -> NotificationStore {
        let notifications = (1..=3)
            .map(|i| Notification {
                id: format!("notif-{}", i),
                kind: "system".to_string(),
                title: format!("Title {}", i),
                message: String::new(),
                movie_id: None,
                created_at: Utc::now(),
                read: false,
            })
            .collect();
        NotificationStore::from_notifications(notifications)
    }

    #[test]
    fn test_mark_read() {
        let mut store = inbox();
        assert_eq!(store.unread_count(), 3);
        let updated = store.mark_read("notif-2").unwrap();
        assert!(updated.read);
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn test_mark_read_unknown_id_is_noop() {
        let mut store = inbox();
        assert!(store.mark_read("nope").is_none());
        assert_eq!(store.unread_count(), 3);
    }

    #[test]
    fn test_mark_all_read() {
        let mut store = inbox();
        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);
    }
}
