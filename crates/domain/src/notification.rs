use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPriority {
    Urgent,
    High,
    Normal,
    Low,
}

impl NotificationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

impl FromStr for NotificationPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urgent" => Ok(Self::Urgent),
            "high" => Ok(Self::High),
            "normal" => Ok(Self::Normal),
            "low" => Ok(Self::Low),
            _ => Err(format!("Invalid notification priority: {}", s)),
        }
    }
}

impl Default for NotificationPriority {
    fn default() -> Self {
        Self::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    ProjectStart,
    ProjectEnd,
    MaterialDelivery,
    DocumentExpiration,
    MaintenanceDue,
    WorkEntryApproval,
    LowStock,
    Info,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectStart => "project_start",
            Self::ProjectEnd => "project_end",
            Self::MaterialDelivery => "material_delivery",
            Self::DocumentExpiration => "document_expiration",
            Self::MaintenanceDue => "maintenance_due",
            Self::WorkEntryApproval => "work_entry_approval",
            Self::LowStock => "low_stock",
            Self::Info => "info",
        }
    }
}

impl FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project_start" => Ok(Self::ProjectStart),
            "project_end" => Ok(Self::ProjectEnd),
            "material_delivery" => Ok(Self::MaterialDelivery),
            "document_expiration" => Ok(Self::DocumentExpiration),
            "maintenance_due" => Ok(Self::MaintenanceDue),
            "work_entry_approval" => Ok(Self::WorkEntryApproval),
            "low_stock" => Ok(Self::LowStock),
            "info" => Ok(Self::Info),
            _ => Err(format!("Invalid notification type: {}", s)),
        }
    }
}

impl Default for NotificationType {
    fn default() -> Self {
        Self::Info
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ID,
    pub user_id: ID,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub priority: NotificationPriority,
    pub is_read: bool,
    pub read_at: Option<i64>,
    pub action_url: Option<String>,
    pub action_label: Option<String>,
    pub data: serde_json::Value,
    pub expires_at: Option<i64>,
    pub created_at: i64,
}

impl Notification {
    pub fn new(user_id: ID, title: String, message: String, created_at: i64) -> Self {
        Self {
            id: Default::default(),
            user_id,
            title,
            message,
            notification_type: Default::default(),
            priority: Default::default(),
            is_read: false,
            read_at: None,
            action_url: None,
            action_label: None,
            data: serde_json::Value::Null,
            expires_at: None,
            created_at,
        }
    }
}

impl Entity<ID> for Notification {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
