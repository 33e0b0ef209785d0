use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::UserRepository;
use crate::domain::user::value_objects::{Age, Email, PersonName, PhoneNumber};
use crate::domain::user::{NewUser, User, UserError, UserPatch, UserResult};

const USER_COLUMNS: &str = "user_id, first_name, last_name, email, phone, age, status";

/// Row shape of the `users` table; nullable columns map to `Option`.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    age: Option<i32>,
    status: String,
}

impl TryFrom<UserRow> for User {
    type Error = String;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            user_id: r.user_id,
            first_name: PersonName::new(r.first_name)?,
            last_name: PersonName::new(r.last_name)?,
            email: Email::new(r.email)?,
            phone: r.phone.map(PhoneNumber::new).transpose()?,
            age: r.age.map(Age::new).transpose()?,
            status: r.status.parse()?,
        })
    }
}

fn into_user(row: UserRow) -> UserResult<User> {
    let id = row.user_id;
    User::try_from(row)
        .map_err(|e| UserError::Storage(format!("Invalid user {} from database: {}", id, e)))
}

/// PostgreSQL implementation of UserRepository
///
/// Uses runtime-checked SQLx queries against the `users` table created by
/// the bundled migrations.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, new_user: NewUser) -> UserResult<User> {
        let sql = format!(
            r#"
            INSERT INTO users (
                user_id, first_name, last_name, email, phone, age, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(new_user.first_name.as_str())
            .bind(new_user.last_name.as_str())
            .bind(new_user.email.as_str())
            .bind(new_user.phone.as_ref().map(|p| p.as_str()))
            .bind(new_user.age.map(|a| a.value()))
            .bind(new_user.status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserError::Storage(format!("Failed to create user: {}", e)))?;

        into_user(row)
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<User> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::Storage(format!("Failed to find user by id: {}", e)))?
            .ok_or(UserError::NotFound)?;

        into_user(row)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at");

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| UserError::Storage(format!("Failed to list users: {}", e)))?;

        rows.into_iter().map(into_user).collect()
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> UserResult<User> {
        let mut user = self.get_by_id(id).await?;
        user.apply(patch);

        let sql = format!(
            r#"
            UPDATE users
            SET first_name = $2,
                last_name = $3,
                email = $4,
                phone = $5,
                age = $6,
                status = $7,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .bind(user.first_name.as_str())
            .bind(user.last_name.as_str())
            .bind(user.email.as_str())
            .bind(user.phone.as_ref().map(|p| p.as_str()))
            .bind(user.age.map(|a| a.value()))
            .bind(user.status.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::Storage(format!("Failed to update user: {}", e)))?
            // deleted between the read and the write
            .ok_or(UserError::NotFound)?;

        into_user(row)
    }

    async fn delete(&self, id: Uuid) -> UserResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::Storage(format!("Failed to delete user: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound);
        }

        Ok(())
    }
}
