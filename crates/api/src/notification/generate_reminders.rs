use super::helpers::{create_bulk_notifications, create_notification, TriggerStats};
use crate::error::AppError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use bauhub_api_structs::dtos::{CronReportDTO, CronStatsDTO, TriggerReportDTO, TriggerStatsDTO};
use bauhub_api_structs::generate_reminders::*;
use bauhub_domain::{reminder, Notification, NotificationType, UserRole, ID};
use bauhub_infra::Context;
use chrono::NaiveDate;
use tracing::error;

pub async fn generate_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AppError> {
    let auth_header = http_req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if auth_header != format!("Bearer {}", ctx.config.cron_secret) {
        return Err(AppError::Unauthorized(
            "Invalid or missing cron secret".into(),
        ));
    }

    let usecase = GenerateRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|report| {
            let res: APIResponse = CronReportDTO {
                timestamp: report.timestamp,
                triggers: report
                    .triggers
                    .into_iter()
                    .map(|t| TriggerReportDTO {
                        name: t.name.to_string(),
                        stats: TriggerStatsDTO {
                            total: t.stats.total,
                            created: t.stats.created,
                            skipped: t.stats.skipped,
                            failed: t.stats.failed,
                        },
                    })
                    .collect(),
                stats: CronStatsDTO {
                    total_notifications: report.stats.total,
                    created: report.stats.created,
                    skipped: report.stats.skipped,
                    failed: report.stats.failed,
                },
                execution_time_ms: report.execution_time_ms,
            };
            HttpResponse::Ok().json(res)
        })
        .map_err(AppError::from)
}

#[derive(Debug)]
pub struct GenerateRemindersUseCase {}

#[derive(Debug)]
pub struct TriggerReport {
    pub name: &'static str,
    pub stats: TriggerStats,
}

#[derive(Debug)]
pub struct CronReport {
    pub timestamp: i64,
    pub triggers: Vec<TriggerReport>,
    pub stats: TriggerStats,
    pub execution_time_ms: i64,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for AppError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GenerateRemindersUseCase {
    type Response = CronReport;

    type Error = UseCaseError;

    const NAME: &'static str = "GenerateReminders";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let started_at = ctx.sys.get_timestamp_millis();
        let today = ctx.sys.get_date_today();

        // Every category runs in its own error boundary; one failing
        // query must not abort the other five.
        let triggers = vec![
            run_trigger("project_start_reminders", project_start_reminders(ctx, today)).await,
            run_trigger("project_end_reminders", project_end_reminders(ctx, today)).await,
            run_trigger(
                "material_delivery_reminders",
                material_delivery_reminders(ctx, today),
            )
            .await,
            run_trigger(
                "vehicle_document_expiration",
                vehicle_document_reminders(ctx, today),
            )
            .await,
            run_trigger(
                "equipment_document_expiration",
                equipment_document_reminders(ctx, today),
            )
            .await,
            run_trigger("maintenance_reminders", maintenance_reminders(ctx, today)).await,
        ];

        let mut stats = TriggerStats::default();
        for trigger in &triggers {
            stats.merge(&trigger.stats);
        }

        Ok(CronReport {
            timestamp: started_at,
            triggers,
            stats,
            execution_time_ms: ctx.sys.get_timestamp_millis() - started_at,
        })
    }
}

async fn run_trigger<F>(name: &'static str, category: F) -> TriggerReport
where
    F: std::future::Future<Output = anyhow::Result<TriggerStats>>,
{
    let stats = match category.await {
        Ok(stats) => stats,
        Err(e) => {
            error!("Error generating {}: {:?}", name, e);
            TriggerStats::default()
        }
    };
    TriggerReport { name, stats }
}

async fn project_start_reminders(ctx: &Context, today: NaiveDate) -> anyhow::Result<TriggerStats> {
    let mut stats = TriggerStats::default();
    let projects = ctx.repos.projects.find_with_upcoming_start().await?;

    for project in projects {
        let (start_date, pm_user_id) = match (project.start_date, project.pm_user_id) {
            (Some(start_date), Some(pm_user_id)) => (start_date, pm_user_id),
            _ => continue,
        };
        let days = reminder::days_until(start_date, today);
        if !reminder::fires_today(days, &reminder::PROJECT_START_OFFSETS) {
            continue;
        }

        let title = if days == 0 {
            format!("Projekt startet heute: {}", project.name)
        } else {
            format!("Projekt startet in {} Tagen: {}", days, project.name)
        };
        let mut notification = Notification::new(
            pm_user_id,
            title,
            format!(
                "Das Projekt \"{}\" startet am {}.",
                project.name,
                reminder::format_reminder_date(start_date)
            ),
            ctx.sys.get_timestamp_millis(),
        );
        notification.notification_type = NotificationType::ProjectStart;
        notification.priority = reminder::project_start_priority(days);
        notification.action_url = Some(format!("/dashboard/projects/{}", project.id));
        notification.data = serde_json::json!({
            "project_id": project.id,
            "project_name": project.name,
            "start_date": start_date,
            "days_until": days,
        });

        stats.record(create_notification(ctx, notification).await);
    }

    Ok(stats)
}

async fn project_end_reminders(ctx: &Context, today: NaiveDate) -> anyhow::Result<TriggerStats> {
    let mut stats = TriggerStats::default();
    let projects = ctx.repos.projects.find_active_with_end_plan().await?;

    for project in projects {
        let (end_date, pm_user_id) = match (project.end_date_plan, project.pm_user_id) {
            (Some(end_date), Some(pm_user_id)) => (end_date, pm_user_id),
            _ => continue,
        };
        let days = reminder::days_until(end_date, today);
        if !reminder::fires_today(days, &reminder::PROJECT_END_OFFSETS) {
            continue;
        }

        let title = if days == 0 {
            format!("Projekt-Deadline heute: {}", project.name)
        } else {
            format!("Projekt endet in {} Tagen: {}", days, project.name)
        };
        let mut notification = Notification::new(
            pm_user_id,
            title,
            format!(
                "Die geplante Fertigstellung für \"{}\" ist am {}.",
                project.name,
                reminder::format_reminder_date(end_date)
            ),
            ctx.sys.get_timestamp_millis(),
        );
        notification.notification_type = NotificationType::ProjectEnd;
        notification.priority = reminder::project_end_priority(days);
        notification.action_url = Some(format!("/dashboard/projects/{}", project.id));
        notification.data = serde_json::json!({
            "project_id": project.id,
            "project_name": project.name,
            "end_date": end_date,
            "days_until": days,
        });

        stats.record(create_notification(ctx, notification).await);
    }

    Ok(stats)
}

fn short_order_id(order_id: &ID) -> String {
    order_id.as_string().chars().take(8).collect()
}

async fn material_delivery_reminders(
    ctx: &Context,
    today: NaiveDate,
) -> anyhow::Result<TriggerStats> {
    let mut stats = TriggerStats::default();
    let orders = ctx.repos.material_orders.find_awaiting_delivery().await?;

    for order in orders {
        let delivery_date = match order.expected_delivery_date {
            Some(delivery_date) => delivery_date,
            None => continue,
        };
        let days = reminder::days_until(delivery_date, today);
        if !reminder::fires_today(days, &reminder::MATERIAL_DELIVERY_OFFSETS) {
            continue;
        }
        let pm_user_id = match ctx.repos.projects.find_pm_user_id(&order.project_id).await {
            Some(pm_user_id) => pm_user_id,
            None => continue,
        };

        let supplier = if order.supplier.is_empty() {
            "Lieferant".to_string()
        } else {
            order.supplier.clone()
        };
        let formatted_date = reminder::format_reminder_date(delivery_date);
        let (title, message) = if days < 0 {
            (
                format!("Überfällige Lieferung (Bestellung #{})", short_order_id(&order.id)),
                format!(
                    "Die Lieferung von {} ist überfällig (geplant: {}).",
                    supplier, formatted_date
                ),
            )
        } else if days == 0 {
            (
                format!("Lieferung heute (Bestellung #{})", short_order_id(&order.id)),
                format!("Materiallieferung von {} wird heute erwartet.", supplier),
            )
        } else {
            (
                format!(
                    "Lieferung in {} Tagen (Bestellung #{})",
                    days,
                    short_order_id(&order.id)
                ),
                format!(
                    "Materiallieferung von {} geplant für {}.",
                    supplier, formatted_date
                ),
            )
        };

        let mut notification =
            Notification::new(pm_user_id, title, message, ctx.sys.get_timestamp_millis());
        notification.notification_type = NotificationType::MaterialDelivery;
        notification.priority = reminder::material_delivery_priority(days);
        notification.action_url = Some("/dashboard/materials/orders".into());
        notification.data = serde_json::json!({
            "order_id": order.id,
            "delivery_date": delivery_date,
            "days_until": days,
            "supplier_name": order.supplier,
        });

        stats.record(create_notification(ctx, notification).await);
    }

    Ok(stats)
}

async fn vehicle_document_reminders(
    ctx: &Context,
    today: NaiveDate,
) -> anyhow::Result<TriggerStats> {
    let mut stats = TriggerStats::default();
    let documents = ctx.repos.vehicle_documents.find_with_expiry().await?;
    let admin_ids = ctx.repos.users.find_ids_by_role(UserRole::Admin).await?;

    for document in documents {
        let expiry_date = match document.expiry_date {
            Some(expiry_date) => expiry_date,
            None => continue,
        };
        let days = reminder::days_until(expiry_date, today);
        if !reminder::fires_today(days, &reminder::DOCUMENT_EXPIRY_OFFSETS) {
            continue;
        }

        let license_plate = ctx
            .repos
            .vehicles
            .find(&document.vehicle_id)
            .await
            .map(|v| v.license_plate)
            .unwrap_or_else(|| "Unbekanntes Fahrzeug".into());

        let title = if days < 0 {
            format!(
                "Abgelaufenes Dokument: {} ({})",
                document.document_type, license_plate
            )
        } else if days == 0 {
            format!(
                "Dokument läuft heute ab: {} ({})",
                document.document_type, license_plate
            )
        } else {
            format!(
                "Dokument läuft in {} Tagen ab: {}",
                days, document.document_type
            )
        };
        let message = format!(
            "Fahrzeug {}: {} läuft am {} ab.",
            license_plate,
            document.document_type,
            reminder::format_reminder_date(expiry_date)
        );
        let priority = reminder::document_expiry_priority(days);
        let created_at = ctx.sys.get_timestamp_millis();

        let bulk_stats = create_bulk_notifications(ctx, &admin_ids, |user_id| {
            let mut notification =
                Notification::new(user_id, title.clone(), message.clone(), created_at);
            notification.notification_type = NotificationType::DocumentExpiration;
            notification.priority = priority;
            notification.action_url = Some("/dashboard/vehicles".into());
            notification.data = serde_json::json!({
                "document_id": document.id,
                "vehicle_id": document.vehicle_id,
                "document_type": document.document_type,
                "expiration_date": expiry_date,
                "days_until": days,
            });
            notification
        })
        .await;
        stats.merge(&bulk_stats);
    }

    Ok(stats)
}

async fn equipment_document_reminders(
    ctx: &Context,
    today: NaiveDate,
) -> anyhow::Result<TriggerStats> {
    let mut stats = TriggerStats::default();
    let documents = ctx.repos.equipment_documents.find_with_expiry().await?;
    let admin_ids = ctx.repos.users.find_ids_by_role(UserRole::Admin).await?;

    for document in documents {
        let expiry_date = match document.expiry_date {
            Some(expiry_date) => expiry_date,
            None => continue,
        };
        let days = reminder::days_until(expiry_date, today);
        if !reminder::fires_today(days, &reminder::DOCUMENT_EXPIRY_OFFSETS) {
            continue;
        }

        let unit = ctx.repos.equipment.find(&document.equipment_id).await;
        let equipment_name = unit
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Unbekannte Ausrüstung".into());
        let inventory_no = unit.map(|u| u.inventory_no).unwrap_or_default();

        let title = if days < 0 {
            format!(
                "Abgelaufenes Dokument: {} ({})",
                document.document_type, equipment_name
            )
        } else if days == 0 {
            format!("Dokument läuft heute ab: {}", document.document_type)
        } else {
            format!(
                "Dokument läuft in {} Tagen ab: {}",
                days, document.document_type
            )
        };
        let inventory_suffix = if inventory_no.is_empty() {
            String::new()
        } else {
            format!(" ({})", inventory_no)
        };
        let message = format!(
            "Ausrüstung \"{}\"{}: {} läuft am {} ab.",
            equipment_name,
            inventory_suffix,
            document.document_type,
            reminder::format_reminder_date(expiry_date)
        );
        let priority = reminder::document_expiry_priority(days);
        let created_at = ctx.sys.get_timestamp_millis();

        let bulk_stats = create_bulk_notifications(ctx, &admin_ids, |user_id| {
            let mut notification =
                Notification::new(user_id, title.clone(), message.clone(), created_at);
            notification.notification_type = NotificationType::DocumentExpiration;
            notification.priority = priority;
            notification.action_url = Some("/dashboard/equipment".into());
            notification.data = serde_json::json!({
                "document_id": document.id,
                "equipment_id": document.equipment_id,
                "document_type": document.document_type,
                "expiration_date": expiry_date,
                "days_until": days,
            });
            notification
        })
        .await;
        stats.merge(&bulk_stats);
    }

    Ok(stats)
}

async fn maintenance_reminders(ctx: &Context, today: NaiveDate) -> anyhow::Result<TriggerStats> {
    let mut stats = TriggerStats::default();
    let schedules = ctx.repos.maintenance_schedules.find_scheduled().await?;
    let admin_ids = ctx.repos.users.find_ids_by_role(UserRole::Admin).await?;

    for schedule in schedules {
        let days = reminder::days_until(schedule.scheduled_date, today);
        if !reminder::fires_today(days, &reminder::MAINTENANCE_OFFSETS) {
            continue;
        }

        let unit = ctx.repos.equipment.find(&schedule.equipment_id).await;
        let equipment_name = unit
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Unbekannte Ausrüstung".into());
        let inventory_no = unit.map(|u| u.inventory_no).unwrap_or_default();

        let title = if days < 0 {
            format!("Überfällige Wartung: {}", equipment_name)
        } else if days == 0 {
            format!("Wartung heute fällig: {}", equipment_name)
        } else {
            format!("Wartung in {} Tagen: {}", days, equipment_name)
        };
        let inventory_suffix = if inventory_no.is_empty() {
            String::new()
        } else {
            format!(" ({})", inventory_no)
        };
        let message = format!(
            "{} für \"{}\"{} geplant am {}.",
            schedule.maintenance_type,
            equipment_name,
            inventory_suffix,
            reminder::format_reminder_date(schedule.scheduled_date)
        );
        let priority = reminder::maintenance_priority(days);
        let created_at = ctx.sys.get_timestamp_millis();

        let bulk_stats = create_bulk_notifications(ctx, &admin_ids, |user_id| {
            let mut notification =
                Notification::new(user_id, title.clone(), message.clone(), created_at);
            notification.notification_type = NotificationType::MaintenanceDue;
            notification.priority = priority;
            notification.action_url = Some("/dashboard/equipment".into());
            notification.data = serde_json::json!({
                "schedule_id": schedule.id,
                "equipment_id": schedule.equipment_id,
                "maintenance_type": schedule.maintenance_type,
                "scheduled_date": schedule.scheduled_date,
                "days_until": days,
            });
            notification
        })
        .await;
        stats.merge(&bulk_stats);
    }

    Ok(stats)
}

#[cfg(test)]
mod test {
    use super::*;
    use bauhub_domain::{
        MaterialOrder, MaterialOrderStatus, NotificationPriority, Project, ProjectStatus, User,
        VehicleDocument,
    };
    use bauhub_infra::{ISys, NotificationFilters, PageQuery};
    use chrono::Duration;
    use std::sync::Arc;

    const TODAY: (i32, u32, u32) = (2024, 5, 10);

    struct StaticSys {}
    impl ISys for StaticSys {
        fn get_timestamp_millis(&self) -> i64 {
            1715299200000
        }

        fn get_date_today(&self) -> NaiveDate {
            NaiveDate::from_ymd(TODAY.0, TODAY.1, TODAY.2)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd(TODAY.0, TODAY.1, TODAY.2)
    }

    fn static_ctx() -> Context {
        let mut ctx = Context::create_inmemory();
        ctx.sys = Arc::new(StaticSys {});
        ctx
    }

    fn generate_user(role: UserRole) -> User {
        User {
            id: Default::default(),
            first_name: "Erika".into(),
            last_name: "Muster".into(),
            email: "erika@example.com".into(),
            role,
            is_active: true,
        }
    }

    async fn all_notifications(ctx: &Context) -> Vec<Notification> {
        let (items, _) = ctx
            .repos
            .notifications
            .list(
                &NotificationFilters::default(),
                PageQuery {
                    offset: 0,
                    limit: i64::MAX,
                },
            )
            .await
            .unwrap();
        items
    }

    #[actix_web::main]
    #[test]
    async fn project_ending_in_seven_days_notifies_pm_with_high_priority() {
        let ctx = static_ctx();
        let pm = generate_user(UserRole::Pm);
        ctx.repos.users.insert(&pm).await.unwrap();
        let project = Project {
            id: Default::default(),
            name: "Ringstraße".into(),
            city: "Gera".into(),
            status: ProjectStatus::Active,
            start_date: None,
            end_date_plan: Some(today() + Duration::days(7)),
            pm_user_id: Some(pm.id.clone()),
            budget_eur: 0.0,
        };
        ctx.repos.projects.insert(&project).await.unwrap();

        let mut usecase = GenerateRemindersUseCase {};
        let report = usecase.execute(&ctx).await.unwrap();
        assert_eq!(report.stats.created, 1);
        assert_eq!(report.stats.failed, 0);

        let notifications = all_notifications(&ctx).await;
        assert_eq!(notifications.len(), 1);
        let notification = &notifications[0];
        assert_eq!(notification.user_id, pm.id);
        assert_eq!(notification.priority, NotificationPriority::High);
        assert_eq!(
            notification.notification_type,
            NotificationType::ProjectEnd
        );
        assert_eq!(
            notification.action_url,
            Some(format!("/dashboard/projects/{}", project.id))
        );
    }

    #[actix_web::main]
    #[test]
    async fn does_not_fire_outside_the_offset_list() {
        let ctx = static_ctx();
        let pm = generate_user(UserRole::Pm);
        ctx.repos.users.insert(&pm).await.unwrap();
        let project = Project {
            id: Default::default(),
            name: "Ringstraße".into(),
            city: "Gera".into(),
            status: ProjectStatus::Active,
            start_date: None,
            end_date_plan: Some(today() + Duration::days(8)),
            pm_user_id: Some(pm.id),
            budget_eur: 0.0,
        };
        ctx.repos.projects.insert(&project).await.unwrap();

        let mut usecase = GenerateRemindersUseCase {};
        let report = usecase.execute(&ctx).await.unwrap();
        assert_eq!(report.stats.total, 0);
        assert!(all_notifications(&ctx).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn second_run_is_deduplicated() {
        let ctx = static_ctx();
        let pm = generate_user(UserRole::Pm);
        ctx.repos.users.insert(&pm).await.unwrap();
        let project = Project {
            id: Default::default(),
            name: "Ringstraße".into(),
            city: "Gera".into(),
            status: ProjectStatus::Active,
            start_date: None,
            end_date_plan: Some(today() + Duration::days(7)),
            pm_user_id: Some(pm.id),
            budget_eur: 0.0,
        };
        ctx.repos.projects.insert(&project).await.unwrap();

        let mut usecase = GenerateRemindersUseCase {};
        let first = usecase.execute(&ctx).await.unwrap();
        assert_eq!(first.stats.created, 1);

        let mut usecase = GenerateRemindersUseCase {};
        let second = usecase.execute(&ctx).await.unwrap();
        assert_eq!(second.stats.created, 0);
        assert_eq!(second.stats.skipped, 1);
        assert_eq!(all_notifications(&ctx).await.len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn overdue_delivery_is_urgent_and_goes_to_the_pm() {
        let ctx = static_ctx();
        let pm = generate_user(UserRole::Pm);
        ctx.repos.users.insert(&pm).await.unwrap();
        let project = Project {
            id: Default::default(),
            name: "Lager Süd".into(),
            city: "Suhl".into(),
            status: ProjectStatus::Active,
            start_date: None,
            end_date_plan: None,
            pm_user_id: Some(pm.id.clone()),
            budget_eur: 0.0,
        };
        ctx.repos.projects.insert(&project).await.unwrap();
        ctx.repos
            .material_orders
            .insert(&MaterialOrder {
                id: Default::default(),
                project_id: project.id,
                supplier: "BauStoff GmbH".into(),
                status: MaterialOrderStatus::Ordered,
                expected_delivery_date: Some(today() - Duration::days(1)),
            })
            .await
            .unwrap();

        let mut usecase = GenerateRemindersUseCase {};
        let report = usecase.execute(&ctx).await.unwrap();
        assert_eq!(report.stats.created, 1);

        let notifications = all_notifications(&ctx).await;
        assert_eq!(notifications[0].priority, NotificationPriority::Urgent);
        assert!(notifications[0].title.starts_with("Überfällige Lieferung"));
        assert_eq!(notifications[0].user_id, pm.id);
    }

    #[actix_web::main]
    #[test]
    async fn order_without_pm_is_silently_skipped() {
        let ctx = static_ctx();
        let project = Project {
            id: Default::default(),
            name: "Lager Süd".into(),
            city: "Suhl".into(),
            status: ProjectStatus::Active,
            start_date: None,
            end_date_plan: None,
            pm_user_id: None,
            budget_eur: 0.0,
        };
        ctx.repos.projects.insert(&project).await.unwrap();
        ctx.repos
            .material_orders
            .insert(&MaterialOrder {
                id: Default::default(),
                project_id: project.id,
                supplier: String::new(),
                status: MaterialOrderStatus::Confirmed,
                expected_delivery_date: Some(today()),
            })
            .await
            .unwrap();

        let mut usecase = GenerateRemindersUseCase {};
        let report = usecase.execute(&ctx).await.unwrap();
        assert_eq!(report.stats.total, 0);
    }

    #[actix_web::main]
    #[test]
    async fn expiring_vehicle_document_fans_out_to_admins_only() {
        let ctx = static_ctx();
        let admin_a = generate_user(UserRole::Admin);
        let admin_b = generate_user(UserRole::Admin);
        let worker = generate_user(UserRole::Worker);
        ctx.repos.users.insert(&admin_a).await.unwrap();
        ctx.repos.users.insert(&admin_b).await.unwrap();
        ctx.repos.users.insert(&worker).await.unwrap();
        ctx.repos
            .vehicle_documents
            .insert(&VehicleDocument {
                id: Default::default(),
                vehicle_id: Default::default(),
                document_type: "TÜV".into(),
                expiry_date: Some(today() + Duration::days(30)),
            })
            .await
            .unwrap();

        let mut usecase = GenerateRemindersUseCase {};
        let report = usecase.execute(&ctx).await.unwrap();
        assert_eq!(report.stats.created, 2);

        let notifications = all_notifications(&ctx).await;
        assert_eq!(notifications.len(), 2);
        for notification in &notifications {
            assert_ne!(notification.user_id, worker.id);
            assert_eq!(
                notification.notification_type,
                NotificationType::DocumentExpiration
            );
            // unknown vehicle resolves to the fallback label
            assert!(notification.message.contains("Unbekanntes Fahrzeug"));
        }
    }

    #[actix_web::main]
    #[test]
    async fn report_always_lists_all_six_categories() {
        let ctx = static_ctx();
        let mut usecase = GenerateRemindersUseCase {};
        let report = usecase.execute(&ctx).await.unwrap();
        assert_eq!(report.triggers.len(), 6);
        assert_eq!(report.stats, TriggerStats::default());
    }
}
