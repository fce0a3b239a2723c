use bauhub_domain::{EquipmentStatus, NotificationPriority, ID};
use chrono::NaiveDate;

/// Offset/limit window resolved from the clamped page parameters.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Clone, Default)]
pub struct EquipmentFilters {
    pub equipment_type: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub owned: Option<bool>,
    pub search: Option<String>,
    /// Units to leave out, e.g. everything currently holding an active
    /// assignment when only available units are wanted.
    pub exclude_ids: Vec<ID>,
}

#[derive(Debug, Clone, Default)]
pub struct VehicleFilters {
    pub vehicle_type: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentFilters {
    pub resource_id: Option<ID>,
    pub project_id: Option<ID>,
    pub crew_id: Option<ID>,
    pub active_only: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationFilters {
    pub user_id: Option<ID>,
    pub is_read: Option<bool>,
    pub priority: Option<NotificationPriority>,
    pub created_after: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct FinanceFilters {
    pub project_id: Option<ID>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
