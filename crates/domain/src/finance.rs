use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostType {
    Facility,
    Equipment,
    Material,
    Labor,
    Transport,
    Other,
}

impl CostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facility => "facility",
            Self::Equipment => "equipment",
            Self::Material => "material",
            Self::Labor => "labor",
            Self::Transport => "transport",
            Self::Other => "other",
        }
    }
}

impl FromStr for CostType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facility" => Ok(Self::Facility),
            "equipment" => Ok(Self::Equipment),
            "material" => Ok(Self::Material),
            "labor" => Ok(Self::Labor),
            "transport" => Ok(Self::Transport),
            "other" => Ok(Self::Other),
            _ => Err(format!("Invalid cost type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cost {
    pub id: ID,
    pub project_id: ID,
    pub project_name: String,
    pub cost_type: CostType,
    pub date: NaiveDate,
    pub amount_eur: f64,
    pub description: String,
    pub created_at: i64,
}

impl Entity<ID> for Cost {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: ID,
    pub project_id: ID,
    pub project_name: String,
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
    pub amount_eur: f64,
    pub description: String,
    pub created_at: i64,
}

impl Entity<ID> for Transaction {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
