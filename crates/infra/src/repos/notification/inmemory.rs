use super::{INotificationRepo, NotificationSummary};
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::{NotificationFilters, PageQuery};
use bauhub_domain::{Notification, NotificationPriority, ID};

pub struct InMemoryNotificationRepo {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for InMemoryNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn exists_similar(&self, user_id: &ID, title: &str, since: i64) -> anyhow::Result<bool> {
        Ok(!find_by(&self.notifications, |n| {
            &n.user_id == user_id && n.title == title && n.created_at >= since
        })
        .is_empty())
    }

    async fn list(
        &self,
        filters: &NotificationFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<Notification>, i64)> {
        let mut items = find_by(&self.notifications, |n| {
            filters
                .user_id
                .as_ref()
                .map_or(true, |id| &n.user_id == id)
                && filters.is_read.map_or(true, |r| n.is_read == r)
                && filters.priority.map_or(true, |p| n.priority == p)
                && filters
                    .created_after
                    .map_or(true, |ts| n.created_at >= ts)
        });
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(items, page.offset, page.limit))
    }

    async fn summary(&self, user_id: Option<&ID>) -> anyhow::Result<NotificationSummary> {
        let relevant = find_by(&self.notifications, |n| {
            user_id.map_or(true, |id| &n.user_id == id)
        });
        Ok(NotificationSummary {
            total_count: relevant.len() as i64,
            unread_count: relevant.iter().filter(|n| !n.is_read).count() as i64,
            urgent_count: relevant
                .iter()
                .filter(|n| !n.is_read && n.priority == NotificationPriority::Urgent)
                .count() as i64,
        })
    }

    async fn set_read(
        &self,
        notification_id: &ID,
        read: bool,
        read_at: Option<i64>,
    ) -> Option<Notification> {
        update_one(notification_id, &self.notifications, |n| {
            n.is_read = read;
            n.read_at = read_at;
        })
    }
}
