use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialOrderStatus {
    Draft,
    Ordered,
    Confirmed,
    Delivered,
    Cancelled,
}

impl MaterialOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Ordered => "ordered",
            Self::Confirmed => "confirmed",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Orders in these states still await delivery and are the only ones
    /// the delivery reminders look at.
    pub fn awaits_delivery(&self) -> bool {
        matches!(self, Self::Ordered | Self::Confirmed)
    }
}

impl FromStr for MaterialOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "ordered" => Ok(Self::Ordered),
            "confirmed" => Ok(Self::Confirmed),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid material order status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialOrder {
    pub id: ID,
    pub project_id: ID,
    pub supplier: String,
    pub status: MaterialOrderStatus,
    pub expected_delivery_date: Option<NaiveDate>,
}

impl Entity<ID> for MaterialOrder {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialAllocation {
    pub id: ID,
    pub project_id: ID,
    pub material_id: ID,
    pub material_name: String,
    pub unit: String,
    pub price_per_unit_eur: f64,
    pub quantity: f64,
    pub allocated_at: i64,
}

impl MaterialAllocation {
    pub fn total_cost_eur(&self) -> f64 {
        self.price_per_unit_eur * self.quantity
    }
}

impl Entity<ID> for MaterialAllocation {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
