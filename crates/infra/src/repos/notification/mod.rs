mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::{NotificationFilters, PageQuery};
use bauhub_domain::{Notification, ID};
pub use inmemory::InMemoryNotificationRepo;
pub use postgres::PostgresNotificationRepo;

/// Badge counters shown next to the notification list.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationSummary {
    pub total_count: i64,
    pub unread_count: i64,
    pub urgent_count: i64,
}

#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()>;
    /// Dedup probe: is there already a notification with this exact title
    /// for this user created at or after `since`?
    async fn exists_similar(&self, user_id: &ID, title: &str, since: i64) -> anyhow::Result<bool>;
    async fn list(
        &self,
        filters: &NotificationFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<Notification>, i64)>;
    async fn summary(&self, user_id: Option<&ID>) -> anyhow::Result<NotificationSummary>;
    async fn set_read(&self, notification_id: &ID, read: bool, read_at: Option<i64>)
        -> Option<Notification>;
}
