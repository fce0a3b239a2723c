use bauhub_domain::{Notification, NotificationPriority, NotificationType, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationDTO {
    pub id: ID,
    pub user_id: ID,
    pub title: String,
    pub message: String,
    pub r#type: NotificationType,
    pub priority: NotificationPriority,
    pub is_read: bool,
    pub read_at: Option<i64>,
    pub action_url: Option<String>,
    pub action_label: Option<String>,
    pub data: serde_json::Value,
    pub expires_at: Option<i64>,
    pub created_at: i64,
}

impl NotificationDTO {
    pub fn new(notification: Notification) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            title: notification.title,
            message: notification.message,
            r#type: notification.notification_type,
            priority: notification.priority,
            is_read: notification.is_read,
            read_at: notification.read_at,
            action_url: notification.action_url,
            action_label: notification.action_label,
            data: notification.data,
            expires_at: notification.expires_at,
            created_at: notification.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationSummaryDTO {
    pub total_count: i64,
    pub unread_count: i64,
    pub urgent_count: i64,
}

/// Per-category outcome counters of one reminder job run.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct TriggerStatsDTO {
    pub total: u32,
    pub created: u32,
    pub skipped: u32,
    pub failed: u32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TriggerReportDTO {
    pub name: String,
    pub stats: TriggerStatsDTO,
}

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct CronStatsDTO {
    pub total_notifications: u32,
    pub created: u32,
    pub skipped: u32,
    pub failed: u32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CronReportDTO {
    pub timestamp: i64,
    pub triggers: Vec<TriggerReportDTO>,
    pub stats: CronStatsDTO,
    pub execution_time_ms: i64,
}
