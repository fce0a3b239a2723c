use crate::notification::generate_reminders::GenerateRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::interval;
use bauhub_infra::Context;
use std::time::Duration;
use tracing::info;

// The reminder job runs three times a day. The external cron endpoint can
// trigger extra runs; the dedup window keeps those from double notifying.
const REMINDER_JOB_INTERVAL_SECS: u64 = 8 * 60 * 60;

pub fn start_reminder_job(ctx: Context) {
    actix_web::rt::spawn(async move {
        let mut interval = interval(Duration::from_secs(REMINDER_JOB_INTERVAL_SECS));
        loop {
            interval.tick().await;

            let usecase = GenerateRemindersUseCase {};
            match execute(usecase, &ctx).await {
                Ok(report) => info!(
                    "Reminder job finished in {}ms: {} created, {} skipped, {} failed",
                    report.execution_time_ms,
                    report.stats.created,
                    report.stats.skipped,
                    report.stats.failed
                ),
                Err(_) => {}
            }
        }
    });
}
