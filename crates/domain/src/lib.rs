mod assignment;
mod equipment;
mod finance;
mod maintenance;
mod material;
mod notification;
mod preparation;
mod project;
pub mod reminder;
mod shared;
mod storage;
mod user;
mod vehicle;

pub use equipment::{Equipment, EquipmentDocument, EquipmentStatus};
pub use finance::{Cost, CostType, Transaction, TransactionType};
pub use maintenance::{MaintenanceSchedule, MaintenanceStatus};
pub use material::{MaterialAllocation, MaterialOrder, MaterialOrderStatus};
pub use notification::{Notification, NotificationPriority, NotificationType};
pub use preparation::{Facility, HousingUnit, WorkEntry};
pub use project::{Crew, Document, Project, ProjectPlan, ProjectStatus};
pub use assignment::{EquipmentAssignment, ResourceKind, VehicleAssignment};
pub use shared::entity::{Entity, ID};
pub use storage::{
    BucketPolicy, StorageBucket, AVATAR_FILE_SIZE_LIMIT, DEFAULT_FILE_SIZE_LIMIT,
    MAX_FILES_PER_BATCH,
};
pub use user::{User, UserRole};
pub use vehicle::{Vehicle, VehicleDocument};
