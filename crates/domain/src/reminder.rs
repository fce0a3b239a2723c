//! Day-offset rule for the scheduled reminder job.
//!
//! Every trigger category owns a fixed allow-list of day offsets relative
//! to its target date. A reminder fires on a given day iff the whole-day
//! distance to the target date is exactly one of the offsets; there is no
//! catch-up for missed runs. Negative offsets represent overdue grace days.

use crate::notification::NotificationPriority;
use chrono::NaiveDate;

pub const PROJECT_START_OFFSETS: [i64; 4] = [7, 3, 1, 0];
pub const PROJECT_END_OFFSETS: [i64; 6] = [30, 14, 7, 3, 1, 0];
pub const MATERIAL_DELIVERY_OFFSETS: [i64; 5] = [7, 3, 1, 0, -1];
pub const DOCUMENT_EXPIRY_OFFSETS: [i64; 7] = [90, 30, 14, 7, 3, 1, 0];
pub const MAINTENANCE_OFFSETS: [i64; 6] = [30, 14, 7, 3, 1, 0];

/// Whole days from `today` until `target`, negative when `target` has passed.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    target.signed_duration_since(today).num_days()
}

/// Exact membership only, no "fires on or after".
pub fn fires_today(days_until: i64, offsets: &[i64]) -> bool {
    offsets.contains(&days_until)
}

pub fn project_start_priority(days_until: i64) -> NotificationPriority {
    if days_until <= 1 {
        NotificationPriority::Urgent
    } else if days_until <= 3 {
        NotificationPriority::High
    } else {
        NotificationPriority::Normal
    }
}

pub fn project_end_priority(days_until: i64) -> NotificationPriority {
    if days_until <= 3 {
        NotificationPriority::Urgent
    } else if days_until <= 7 {
        NotificationPriority::High
    } else {
        NotificationPriority::Normal
    }
}

pub fn material_delivery_priority(days_until: i64) -> NotificationPriority {
    if days_until < 0 {
        NotificationPriority::Urgent
    } else if days_until <= 1 {
        NotificationPriority::High
    } else {
        NotificationPriority::Normal
    }
}

pub fn document_expiry_priority(days_until: i64) -> NotificationPriority {
    if days_until < 0 {
        NotificationPriority::Urgent
    } else if days_until <= 7 {
        NotificationPriority::High
    } else {
        NotificationPriority::Normal
    }
}

pub fn maintenance_priority(days_until: i64) -> NotificationPriority {
    if days_until < 0 {
        NotificationPriority::Urgent
    } else if days_until <= 3 {
        NotificationPriority::High
    } else {
        NotificationPriority::Normal
    }
}

/// dd.mm.yyyy, the format used in the notification texts.
pub fn format_reminder_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn days_until_counts_whole_days() {
        let today = NaiveDate::from_ymd(2024, 5, 10);
        assert_eq!(days_until(NaiveDate::from_ymd(2024, 5, 17), today), 7);
        assert_eq!(days_until(NaiveDate::from_ymd(2024, 5, 10), today), 0);
        assert_eq!(days_until(NaiveDate::from_ymd(2024, 5, 9), today), -1);
    }

    #[test]
    fn fires_only_on_exact_offsets() {
        for d in -10..=100 {
            assert_eq!(
                fires_today(d, &PROJECT_END_OFFSETS),
                [30, 14, 7, 3, 1, 0].contains(&d),
                "project_end offset mismatch at {} days",
                d
            );
            assert_eq!(
                fires_today(d, &MATERIAL_DELIVERY_OFFSETS),
                [7, 3, 1, 0, -1].contains(&d),
                "material_delivery offset mismatch at {} days",
                d
            );
            assert_eq!(
                fires_today(d, &DOCUMENT_EXPIRY_OFFSETS),
                [90, 30, 14, 7, 3, 1, 0].contains(&d),
                "document_expiry offset mismatch at {} days",
                d
            );
        }
    }

    #[test]
    fn project_end_severity_bands() {
        for d in 0..=3 {
            assert_eq!(project_end_priority(d), NotificationPriority::Urgent);
        }
        for d in 4..=7 {
            assert_eq!(project_end_priority(d), NotificationPriority::High);
        }
        for d in [14, 30].iter() {
            assert_eq!(project_end_priority(*d), NotificationPriority::Normal);
        }
    }

    #[test]
    fn project_start_severity_bands() {
        assert_eq!(project_start_priority(0), NotificationPriority::Urgent);
        assert_eq!(project_start_priority(1), NotificationPriority::Urgent);
        assert_eq!(project_start_priority(3), NotificationPriority::High);
        assert_eq!(project_start_priority(7), NotificationPriority::Normal);
    }

    #[test]
    fn overdue_delivery_is_urgent() {
        assert_eq!(
            material_delivery_priority(-1),
            NotificationPriority::Urgent
        );
        assert_eq!(material_delivery_priority(0), NotificationPriority::High);
        assert_eq!(material_delivery_priority(1), NotificationPriority::High);
        assert_eq!(material_delivery_priority(3), NotificationPriority::Normal);
    }

    #[test]
    fn document_and_maintenance_severity_bands() {
        assert_eq!(document_expiry_priority(-1), NotificationPriority::Urgent);
        assert_eq!(document_expiry_priority(0), NotificationPriority::High);
        assert_eq!(document_expiry_priority(7), NotificationPriority::High);
        assert_eq!(document_expiry_priority(14), NotificationPriority::Normal);

        assert_eq!(maintenance_priority(-1), NotificationPriority::Urgent);
        assert_eq!(maintenance_priority(3), NotificationPriority::High);
        assert_eq!(maintenance_priority(7), NotificationPriority::Normal);
    }

    #[test]
    fn formats_dates_for_notification_texts() {
        assert_eq!(
            format_reminder_date(NaiveDate::from_ymd(2024, 1, 5)),
            "05.01.2024"
        );
    }
}
