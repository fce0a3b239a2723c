use super::{INotificationRepo, NotificationSummary};
use crate::repos::shared::query_structs::{NotificationFilters, PageQuery};
use bauhub_domain::{Notification, NotificationType, ID};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};

pub struct PostgresNotificationRepo {
    pool: PgPool,
}

impl PostgresNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRaw {
    notification_uid: Uuid,
    user_uid: Uuid,
    title: String,
    message: String,
    notification_type: String,
    priority: String,
    is_read: bool,
    read_at: Option<i64>,
    action_url: Option<String>,
    action_label: Option<String>,
    data: Json<serde_json::Value>,
    expires_at: Option<i64>,
    created_at: i64,
}

impl Into<Notification> for NotificationRaw {
    fn into(self) -> Notification {
        Notification {
            id: self.notification_uid.into(),
            user_id: self.user_uid.into(),
            title: self.title,
            message: self.message,
            notification_type: self
                .notification_type
                .parse()
                .unwrap_or(NotificationType::Info),
            priority: self.priority.parse().unwrap_or_default(),
            is_read: self.is_read,
            read_at: self.read_at,
            action_url: self.action_url,
            action_label: self.action_label,
            data: self.data.0,
            expires_at: self.expires_at,
            created_at: self.created_at,
        }
    }
}

const LIST_FILTER: &str = r#"
    ($1::uuid IS NULL OR n.user_uid = $1)
    AND ($2::bool IS NULL OR n.is_read = $2)
    AND ($3::text IS NULL OR n.priority = $3)
    AND ($4::bigint IS NULL OR n.created_at >= $4)
"#;

#[async_trait::async_trait]
impl INotificationRepo for PostgresNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications
            (notification_uid, user_uid, title, message, notification_type, priority,
             is_read, read_at, action_url, action_label, data, expires_at, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(*notification.id.inner_ref())
        .bind(*notification.user_id.inner_ref())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.notification_type.as_str())
        .bind(notification.priority.as_str())
        .bind(notification.is_read)
        .bind(notification.read_at)
        .bind(notification.action_url.clone())
        .bind(notification.action_label.clone())
        .bind(Json(notification.data.clone()))
        .bind(notification.expires_at)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn exists_similar(&self, user_id: &ID, title: &str, since: i64) -> anyhow::Result<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM notifications
            WHERE user_uid = $1
            AND title = $2
            AND created_at >= $3
            "#,
        )
        .bind(*user_id.inner_ref())
        .bind(title)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn list(
        &self,
        filters: &NotificationFilters,
        page: PageQuery,
    ) -> anyhow::Result<(Vec<Notification>, i64)> {
        let items_sql = format!(
            "SELECT n.* FROM notifications n WHERE {} ORDER BY n.created_at DESC OFFSET $5 LIMIT $6",
            LIST_FILTER
        );
        let count_sql = format!("SELECT COUNT(*) FROM notifications n WHERE {}", LIST_FILTER);

        let user_uid = filters.user_id.as_ref().map(|id| *id.inner_ref());
        let priority = filters.priority.map(|p| p.as_str().to_string());

        let items = sqlx::query_as::<_, NotificationRaw>(&items_sql)
            .bind(user_uid)
            .bind(filters.is_read)
            .bind(priority.clone())
            .bind(filters.created_after)
            .bind(page.offset)
            .bind(page.limit)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(user_uid)
            .bind(filters.is_read)
            .bind(priority)
            .bind(filters.created_after)
            .fetch_one(&self.pool)
            .await?;

        Ok((items.into_iter().map(|n| n.into()).collect(), total))
    }

    async fn summary(&self, user_id: Option<&ID>) -> anyhow::Result<NotificationSummary> {
        let user_uid = user_id.map(|id| *id.inner_ref());
        let row: (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE is_read = FALSE),
                COUNT(*) FILTER (WHERE is_read = FALSE AND priority = 'urgent')
            FROM notifications
            WHERE ($1::uuid IS NULL OR user_uid = $1)
            "#,
        )
        .bind(user_uid)
        .fetch_one(&self.pool)
        .await?;
        Ok(NotificationSummary {
            total_count: row.0,
            unread_count: row.1,
            urgent_count: row.2,
        })
    }

    async fn set_read(
        &self,
        notification_id: &ID,
        read: bool,
        read_at: Option<i64>,
    ) -> Option<Notification> {
        sqlx::query_as::<_, NotificationRaw>(
            r#"
            UPDATE notifications
            SET is_read = $2,
            read_at = $3
            WHERE notification_uid = $1
            RETURNING *
            "#,
        )
        .bind(*notification_id.inner_ref())
        .bind(read)
        .bind(read_at)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|n| n.into())
    }
}
