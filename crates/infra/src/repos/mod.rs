mod document;
mod equipment;
mod equipment_assignment;
mod equipment_document;
mod finance;
mod maintenance;
mod material;
mod notification;
mod preparation;
mod project;
mod shared;
mod user;
mod vehicle;
mod vehicle_assignment;
mod vehicle_document;

use document::{
    InMemoryDocumentRepo, InMemoryProjectPlanRepo, PostgresDocumentRepo, PostgresProjectPlanRepo,
};
use equipment::{InMemoryEquipmentRepo, PostgresEquipmentRepo};
use equipment_assignment::{InMemoryEquipmentAssignmentRepo, PostgresEquipmentAssignmentRepo};
use equipment_document::{InMemoryEquipmentDocumentRepo, PostgresEquipmentDocumentRepo};
use finance::{InMemoryCostRepo, InMemoryTransactionRepo, PostgresCostRepo, PostgresTransactionRepo};
use maintenance::{InMemoryMaintenanceRepo, PostgresMaintenanceRepo};
use material::{
    InMemoryMaterialAllocationRepo, InMemoryMaterialOrderRepo, PostgresMaterialAllocationRepo,
    PostgresMaterialOrderRepo,
};
use notification::{InMemoryNotificationRepo, PostgresNotificationRepo};
use preparation::{
    InMemoryFacilityRepo, InMemoryHousingUnitRepo, InMemoryWorkEntryRepo, PostgresFacilityRepo,
    PostgresHousingUnitRepo, PostgresWorkEntryRepo,
};
use project::{InMemoryCrewRepo, InMemoryProjectRepo, PostgresCrewRepo, PostgresProjectRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use user::{InMemoryUserRepo, PostgresUserRepo};
use vehicle::{InMemoryVehicleRepo, PostgresVehicleRepo};
use vehicle_assignment::{InMemoryVehicleAssignmentRepo, PostgresVehicleAssignmentRepo};
use vehicle_document::{InMemoryVehicleDocumentRepo, PostgresVehicleDocumentRepo};

pub use document::{IDocumentRepo, IProjectPlanRepo};
pub use equipment::IEquipmentRepo;
pub use equipment_assignment::IEquipmentAssignmentRepo;
pub use equipment_document::IEquipmentDocumentRepo;
pub use finance::{ICostRepo, ITransactionRepo};
pub use maintenance::IMaintenanceRepo;
pub use material::{IMaterialAllocationRepo, IMaterialOrderRepo};
pub use notification::{INotificationRepo, NotificationSummary};
pub use preparation::{IFacilityRepo, IHousingUnitRepo, IWorkEntryRepo};
pub use project::{ICrewRepo, IProjectRepo};
pub use shared::query_structs::*;
pub use user::IUserRepo;
pub use vehicle::IVehicleRepo;
pub use vehicle_assignment::IVehicleAssignmentRepo;
pub use vehicle_document::IVehicleDocumentRepo;

#[derive(Clone)]
pub struct Repos {
    pub projects: Arc<dyn IProjectRepo>,
    pub crews: Arc<dyn ICrewRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub equipment: Arc<dyn IEquipmentRepo>,
    pub equipment_assignments: Arc<dyn IEquipmentAssignmentRepo>,
    pub equipment_documents: Arc<dyn IEquipmentDocumentRepo>,
    pub vehicles: Arc<dyn IVehicleRepo>,
    pub vehicle_assignments: Arc<dyn IVehicleAssignmentRepo>,
    pub vehicle_documents: Arc<dyn IVehicleDocumentRepo>,
    pub maintenance_schedules: Arc<dyn IMaintenanceRepo>,
    pub material_orders: Arc<dyn IMaterialOrderRepo>,
    pub material_allocations: Arc<dyn IMaterialAllocationRepo>,
    pub documents: Arc<dyn IDocumentRepo>,
    pub project_plans: Arc<dyn IProjectPlanRepo>,
    pub notifications: Arc<dyn INotificationRepo>,
    pub costs: Arc<dyn ICostRepo>,
    pub transactions: Arc<dyn ITransactionRepo>,
    pub facilities: Arc<dyn IFacilityRepo>,
    pub housing_units: Arc<dyn IHousingUnitRepo>,
    pub work_entries: Arc<dyn IWorkEntryRepo>,
}

impl Repos {
    pub async fn create_postgres(
        connection_string: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            projects: Arc::new(PostgresProjectRepo::new(pool.clone())),
            crews: Arc::new(PostgresCrewRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            equipment: Arc::new(PostgresEquipmentRepo::new(pool.clone())),
            equipment_assignments: Arc::new(PostgresEquipmentAssignmentRepo::new(pool.clone())),
            equipment_documents: Arc::new(PostgresEquipmentDocumentRepo::new(pool.clone())),
            vehicles: Arc::new(PostgresVehicleRepo::new(pool.clone())),
            vehicle_assignments: Arc::new(PostgresVehicleAssignmentRepo::new(pool.clone())),
            vehicle_documents: Arc::new(PostgresVehicleDocumentRepo::new(pool.clone())),
            maintenance_schedules: Arc::new(PostgresMaintenanceRepo::new(pool.clone())),
            material_orders: Arc::new(PostgresMaterialOrderRepo::new(pool.clone())),
            material_allocations: Arc::new(PostgresMaterialAllocationRepo::new(pool.clone())),
            documents: Arc::new(PostgresDocumentRepo::new(pool.clone())),
            project_plans: Arc::new(PostgresProjectPlanRepo::new(pool.clone())),
            notifications: Arc::new(PostgresNotificationRepo::new(pool.clone())),
            costs: Arc::new(PostgresCostRepo::new(pool.clone())),
            transactions: Arc::new(PostgresTransactionRepo::new(pool.clone())),
            facilities: Arc::new(PostgresFacilityRepo::new(pool.clone())),
            housing_units: Arc::new(PostgresHousingUnitRepo::new(pool.clone())),
            work_entries: Arc::new(PostgresWorkEntryRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            projects: Arc::new(InMemoryProjectRepo::new()),
            crews: Arc::new(InMemoryCrewRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            equipment: Arc::new(InMemoryEquipmentRepo::new()),
            equipment_assignments: Arc::new(InMemoryEquipmentAssignmentRepo::new()),
            equipment_documents: Arc::new(InMemoryEquipmentDocumentRepo::new()),
            vehicles: Arc::new(InMemoryVehicleRepo::new()),
            vehicle_assignments: Arc::new(InMemoryVehicleAssignmentRepo::new()),
            vehicle_documents: Arc::new(InMemoryVehicleDocumentRepo::new()),
            maintenance_schedules: Arc::new(InMemoryMaintenanceRepo::new()),
            material_orders: Arc::new(InMemoryMaterialOrderRepo::new()),
            material_allocations: Arc::new(InMemoryMaterialAllocationRepo::new()),
            documents: Arc::new(InMemoryDocumentRepo::new()),
            project_plans: Arc::new(InMemoryProjectPlanRepo::new()),
            notifications: Arc::new(InMemoryNotificationRepo::new()),
            costs: Arc::new(InMemoryCostRepo::new()),
            transactions: Arc::new(InMemoryTransactionRepo::new()),
            facilities: Arc::new(InMemoryFacilityRepo::new()),
            housing_units: Arc::new(InMemoryHousingUnitRepo::new()),
            work_entries: Arc::new(InMemoryWorkEntryRepo::new()),
        }
    }
}
