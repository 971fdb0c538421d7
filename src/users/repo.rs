use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::users::repo_types::{User, UserId, UserRow};

/// Failure raised by a user repository.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-agnostic persistence for [`User`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert `user`, or overwrite the stored row when `user.id` is set.
    /// Returns the persisted user, id included.
    async fn save(&self, user: &User) -> RepoResult<User>;

    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// First user with this email, if any.
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Every stored user, in no particular order.
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Remove a user. Unknown ids are ignored.
    async fn delete_by_id(&self, id: UserId) -> RepoResult<()>;
}

/// `UserRepository` over the `users` table.
#[derive(Clone, Debug)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[instrument(skip(self, user), fields(user_id = ?user.id))]
    async fn save(&self, user: &User) -> RepoResult<User> {
        let row = match user.id {
            Some(id) => {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    INSERT INTO users (id, first_name, last_name, date_of_birth, phone, occupation, email, password)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    ON CONFLICT (id) DO UPDATE
                       SET first_name    = EXCLUDED.first_name,
                           last_name     = EXCLUDED.last_name,
                           date_of_birth = EXCLUDED.date_of_birth,
                           phone         = EXCLUDED.phone,
                           occupation    = EXCLUDED.occupation,
                           email         = EXCLUDED.email,
                           password      = EXCLUDED.password
                    RETURNING id, first_name, last_name, date_of_birth, phone, occupation, email, password
                    "#,
                )
                .bind(id)
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(user.date_of_birth)
                .bind(&user.phone)
                .bind(&user.occupation)
                .bind(&user.email)
                .bind(&user.password)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, UserRow>(
                    r#"
                    INSERT INTO users (first_name, last_name, date_of_birth, phone, occupation, email, password)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING id, first_name, last_name, date_of_birth, phone, occupation, email, password
                    "#,
                )
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(user.date_of_birth)
                .bind(&user.phone)
                .bind(&user.occupation)
                .bind(&user.email)
                .bind(&user.password)
                .fetch_one(&self.pool)
                .await?
            }
        };
        debug!(user_id = %row.id, "user saved");
        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, date_of_birth, phone, occupation, email, password
              FROM users
             WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, date_of_birth, phone, occupation, email, password
              FROM users
             WHERE email = $1
             LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, date_of_birth, phone, occupation, email, password
              FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: UserId) -> RepoResult<()> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        debug!(user_id = %id, deleted = res.rows_affected(), "user delete");
        Ok(())
    }
}
