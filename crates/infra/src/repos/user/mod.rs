mod inmemory;
mod postgres;

use bauhub_domain::{User, UserRole, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    /// Active users holding the given role, used for role wide
    /// notification fan-outs.
    async fn find_ids_by_role(&self, role: UserRole) -> anyhow::Result<Vec<ID>>;
}
