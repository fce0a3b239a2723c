use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    Planning,
    Active,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "planning" => Ok(Self::Planning),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid project status: {}", s)),
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Draft
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ID,
    pub name: String,
    pub city: String,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date_plan: Option<NaiveDate>,
    pub pm_user_id: Option<ID>,
    pub budget_eur: f64,
}

impl Entity<ID> for Project {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Crew {
    pub id: ID,
    pub name: String,
    pub project_id: ID,
}

impl Entity<ID> for Crew {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Document metadata row. The file content itself lives in object storage,
/// this is only the bookkeeping side of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: ID,
    pub project_id: ID,
    pub filename: String,
    pub original_filename: String,
    pub file_type: String,
    pub file_size: i64,
    pub document_type: String,
    pub description: String,
    pub uploaded_by: Option<ID>,
    pub upload_date: i64,
    pub is_active: bool,
}

impl Entity<ID> for Document {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Plans are tracked in a separate table but are merged with `Document`s
/// when listing a project's documents.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPlan {
    pub id: ID,
    pub project_id: ID,
    pub filename: String,
    pub plan_type: String,
    pub file_size: i64,
    pub description: String,
    pub created_at: i64,
}

impl Entity<ID> for ProjectPlan {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
