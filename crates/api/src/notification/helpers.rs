use bauhub_domain::{Notification, ID};
use bauhub_infra::Context;
use tracing::{error, info};

/// A second notification with the same (user, title) inside this window
/// is considered a duplicate and skipped.
pub const DEDUP_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationOutcome {
    Created,
    Skipped,
    Failed,
}

/// Outcome counters of a batch of notification attempts.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TriggerStats {
    pub total: u32,
    pub created: u32,
    pub skipped: u32,
    pub failed: u32,
}

impl TriggerStats {
    pub fn record(&mut self, outcome: NotificationOutcome) {
        self.total += 1;
        match outcome {
            NotificationOutcome::Created => self.created += 1,
            NotificationOutcome::Skipped => self.skipped += 1,
            NotificationOutcome::Failed => self.failed += 1,
        }
    }

    pub fn merge(&mut self, other: &TriggerStats) {
        self.total += other.total;
        self.created += other.created;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// Creates one notification unless an identical one was created within
/// the dedup window. A failing dedup probe does not block creation.
pub async fn create_notification(ctx: &Context, notification: Notification) -> NotificationOutcome {
    let since = notification.created_at - DEDUP_WINDOW_HOURS * 60 * 60 * 1000;
    let is_duplicate = match ctx
        .repos
        .notifications
        .exists_similar(&notification.user_id, &notification.title, since)
        .await
    {
        Ok(exists) => exists,
        Err(e) => {
            error!("Error checking duplicate notification: {:?}", e);
            false
        }
    };
    if is_duplicate {
        info!(
            "Skipping duplicate notification: {} for user {}",
            notification.title, notification.user_id
        );
        return NotificationOutcome::Skipped;
    }

    match ctx.repos.notifications.insert(&notification).await {
        Ok(_) => NotificationOutcome::Created,
        Err(e) => {
            error!("Error creating notification: {:?}", e);
            NotificationOutcome::Failed
        }
    }
}

/// Fans one notification out to a set of users, e.g. everyone holding
/// the admin role.
pub async fn create_bulk_notifications<F>(
    ctx: &Context,
    user_ids: &[ID],
    build: F,
) -> TriggerStats
where
    F: Fn(ID) -> Notification,
{
    let mut stats = TriggerStats::default();
    for user_id in user_ids {
        let outcome = create_notification(ctx, build(user_id.clone())).await;
        stats.record(outcome);
    }
    stats
}
