use super::IUserRepo;
use bauhub_domain::{User, UserRole, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    role: String,
    is_active: bool,
}

impl Into<User> for UserRaw {
    fn into(self) -> User {
        User {
            id: self.user_uid.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role.parse().unwrap_or(UserRole::Viewer),
            is_active: self.is_active,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, first_name, last_name, email, role, is_active)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*user.id.inner_ref())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(user.is_active)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE user_uid = $1
            "#,
        )
        .bind(*user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|u| u.into())
    }

    async fn find_ids_by_role(&self, role: UserRole) -> anyhow::Result<Vec<ID>> {
        let uids: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT user_uid FROM users
            WHERE role = $1
            AND is_active = TRUE
            "#,
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(uids.into_iter().map(|uid| uid.into()).collect())
    }
}
