use bauhub_domain::{Document, Facility, HousingUnit, MaterialAllocation, ProjectPlan, WorkEntry, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Merged wire shape of `documents` rows and `project_plans` rows.
/// `source` says which table an entry came from.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DocumentEntryDTO {
    pub id: ID,
    pub project_id: ID,
    pub document_type: String,
    pub file_name: String,
    pub file_size: i64,
    pub uploaded_at: i64,
    pub uploaded_by_name: Option<String>,
    pub uploader_email: Option<String>,
    pub notes: String,
    pub source: String,
}

impl DocumentEntryDTO {
    pub fn from_document(
        document: Document,
        uploaded_by_name: Option<String>,
        uploader_email: Option<String>,
    ) -> Self {
        Self {
            id: document.id,
            project_id: document.project_id,
            document_type: document.document_type,
            file_name: if document.original_filename.is_empty() {
                document.filename
            } else {
                document.original_filename
            },
            file_size: document.file_size,
            uploaded_at: document.upload_date,
            uploaded_by_name,
            uploader_email,
            notes: document.description,
            source: "documents".into(),
        }
    }

    pub fn from_plan(plan: ProjectPlan) -> Self {
        Self {
            id: plan.id,
            project_id: plan.project_id,
            document_type: "plan".into(),
            file_name: plan.filename,
            file_size: plan.file_size,
            uploaded_at: plan.created_at,
            uploaded_by_name: None,
            uploader_email: None,
            notes: plan.description,
            source: "project_plans".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MaterialAllocationDTO {
    pub id: ID,
    pub project_id: ID,
    pub material_id: ID,
    pub material_name: String,
    pub unit: String,
    pub price_per_unit_eur: f64,
    pub quantity: f64,
    pub total_cost_eur: f64,
    pub allocated_at: i64,
}

impl MaterialAllocationDTO {
    pub fn new(allocation: MaterialAllocation) -> Self {
        let total_cost_eur = allocation.total_cost_eur();
        Self {
            id: allocation.id,
            project_id: allocation.project_id,
            material_id: allocation.material_id,
            material_name: allocation.material_name,
            unit: allocation.unit,
            price_per_unit_eur: allocation.price_per_unit_eur,
            quantity: allocation.quantity,
            total_cost_eur,
            allocated_at: allocation.allocated_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FacilityDTO {
    pub id: ID,
    pub name: String,
    pub rent_daily_eur: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_rent_eur: f64,
}

impl FacilityDTO {
    pub fn new(facility: Facility) -> Self {
        let total_rent_eur = facility.total_rent_eur();
        Self {
            id: facility.id,
            name: facility.name,
            rent_daily_eur: facility.rent_daily_eur,
            start_date: facility.start_date,
            end_date: facility.end_date,
            total_rent_eur,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HousingUnitDTO {
    pub id: ID,
    pub address: String,
    pub rent_daily_eur: f64,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub total_rent_eur: f64,
}

impl HousingUnitDTO {
    pub fn new(unit: HousingUnit) -> Self {
        let total_rent_eur = unit.total_rent_eur();
        Self {
            id: unit.id,
            address: unit.address,
            rent_daily_eur: unit.rent_daily_eur,
            check_in_date: unit.check_in_date,
            check_out_date: unit.check_out_date,
            total_rent_eur,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WorkEntryDTO {
    pub id: ID,
    pub date: NaiveDate,
    pub labor_cost_eur: f64,
}

impl WorkEntryDTO {
    pub fn new(entry: WorkEntry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            labor_cost_eur: entry.labor_cost_eur,
        }
    }
}

/// One block of the preparation cost report.
#[derive(Debug, Deserialize, Serialize)]
pub struct CostSection<T> {
    pub items: Vec<T>,
    pub total: f64,
}
