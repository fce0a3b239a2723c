use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for MaintenanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid maintenance status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceSchedule {
    pub id: ID,
    pub equipment_id: ID,
    pub maintenance_type: String,
    pub scheduled_date: NaiveDate,
    pub status: MaintenanceStatus,
}

impl Entity<ID> for MaintenanceSchedule {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
