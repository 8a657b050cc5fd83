use crate::dto::user_dto::CreateUserPayload;
use crate::error::Result;
use crate::models::user::User;
use sqlx::PgPool;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

/// Outcome of a user creation attempt. A taken username or email is an
/// expected business condition, not an error.
#[derive(Debug)]
pub enum UserCreation {
    Created(User),
    DuplicateIdentity,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<UserCreation> {
        let existing = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM users WHERE username = $1 OR email = $2 LIMIT 1",
        )
        .bind(&payload.username)
        .bind(&payload.email)
        .fetch_optional(&self.pool)
        .await?;

        if existing.is_some() {
            return Ok(UserCreation::DuplicateIdentity);
        }

        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING id, username, email, is_active, created_at
            "#,
        )
        .bind(&payload.username)
        .bind(&payload.email)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(user) => Ok(UserCreation::Created(user)),
            // A concurrent duplicate that slips past the pre-check hits the
            // unique index; fold it into the same outcome.
            Err(err) if is_unique_violation(&err) => Ok(UserCreation::DuplicateIdentity),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, is_active, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, is_active, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("23505"),
        _ => false,
    }
}
