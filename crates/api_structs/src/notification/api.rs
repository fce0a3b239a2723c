use crate::notification::dtos::{CronReportDTO, NotificationDTO, NotificationSummaryDTO};
use bauhub_domain::{Notification, NotificationPriority, NotificationType, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct NotificationResponse {
    pub notification: NotificationDTO,
}

impl NotificationResponse {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification: NotificationDTO::new(notification),
        }
    }
}

pub mod list_notifications {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct QueryParams {
        pub page: Option<i64>,
        pub per_page: Option<i64>,
        pub user_id: Option<ID>,
        pub read: Option<bool>,
        pub priority: Option<NotificationPriority>,
        pub created_after: Option<i64>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub items: Vec<NotificationDTO>,
        pub total: i64,
        pub page: i64,
        pub per_page: i64,
        pub total_pages: i64,
        pub summary: NotificationSummaryDTO,
    }
}

pub mod create_notification {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub user_id: ID,
        pub title: String,
        pub message: String,
        pub r#type: Option<NotificationType>,
        pub priority: Option<NotificationPriority>,
        pub action_url: Option<String>,
        pub action_label: Option<String>,
        pub data: Option<serde_json::Value>,
        pub expires_at: Option<i64>,
    }

    pub type APIResponse = NotificationResponse;
}

pub mod mark_notification_read {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub notification_id: ID,
        pub read: Option<bool>,
    }

    pub type APIResponse = NotificationResponse;
}

pub mod generate_reminders {
    use super::*;

    pub type APIResponse = CronReportDTO;
}
