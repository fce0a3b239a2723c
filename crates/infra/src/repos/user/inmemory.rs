use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use bauhub_domain::{User, UserRole, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn find_ids_by_role(&self, role: UserRole) -> anyhow::Result<Vec<ID>> {
        Ok(find_by(&self.users, |u| u.role == role && u.is_active)
            .into_iter()
            .map(|u| u.id)
            .collect())
    }
}
