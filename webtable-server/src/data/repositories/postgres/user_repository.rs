use async_trait::async_trait;
use sqlx::PgPool;

use crate::data::user_repository::{LoginCandidate, NewUser, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{Profile, ProfileUpdate, User};

#[derive(Debug, Clone)]
pub(crate) struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
}

#[derive(sqlx::FromRow)]
struct LoginRow {
    id: i64,
    username: String,
    is_confirmed: bool,
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    name: Option<String>,
    surname: Option<String>,
    class: Option<String>,
    telegram: Option<String>,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_unconfirmed(&self, input: NewUser) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, confirm_token)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.confirm_token)
        .execute(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(())
    }

    async fn consume_confirm_token(&self, token: &str) -> Result<Option<User>, DomainError> {
        // Одним UPDATE: токен гасится в том же операторе, что и подтверждение
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET is_confirmed = TRUE,
                confirm_token = NULL
            WHERE confirm_token = $1
            RETURNING id, username
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(row.map(|r| User {
            id: r.id,
            username: r.username,
        }))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<LoginCandidate>, DomainError> {
        let row = sqlx::query_as::<_, LoginRow>(
            r#"
            SELECT id, username, is_confirmed
            FROM users
            WHERE email = $1 AND password_hash = $2
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(row.map(|r| LoginCandidate {
            user: User {
                id: r.id,
                username: r.username,
            },
            is_confirmed: r.is_confirmed,
        }))
    }

    async fn get_profile(&self, username: &str) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT name, surname, class, telegram
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(row.map(|r| Profile {
            name: r.name,
            surname: r.surname,
            class: r.class,
            telegram: r.telegram,
        }))
    }

    async fn update_profile(
        &self,
        username: &str,
        update: ProfileUpdate,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = $1, surname = $2, class = $3, telegram = $4
            WHERE username = $5
            "#,
        )
        .bind(&update.name)
        .bind(&update.surname)
        .bind(&update.class)
        .bind(&update.telegram)
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        Ok(())
    }
}

fn map_user_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23505")
    {
        let resource = match db_err.constraint() {
            Some("users_username_key") => "username",
            Some("users_email_key") => "email",
            _ => "user",
        };
        return DomainError::AlreadyExists(resource.to_string());
    }
    DomainError::Unexpected(err.to_string())
}
