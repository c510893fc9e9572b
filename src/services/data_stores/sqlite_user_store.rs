use color_eyre::eyre::eyre;
use secrecy::{ExposeSecret, Secret};
use sqlx::SqlitePool;

use crate::domain::{
    Email, NewUser, Password, User, UserId, UserStore, UserStoreError,
};

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    nombre: String,
    email: String,
    pass: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::new(row.id),
            name: row.nombre,
            email: Email::new(row.email),
            password: Password::new(Secret::new(row.pass)),
        }
    }
}

pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserStore for SqliteUserStore {
    #[tracing::instrument(name = "Adding user to SQLite", skip_all)]
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO usuarios (nombre, email, pass) VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&user.name)
        .bind(user.email.as_ref())
        .bind(user.password.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                UserStoreError::UserAlreadyExists
            }
            err => UserStoreError::UnexpectedError(eyre!(err)),
        })?;

        Ok(user.with_id(UserId::new(result.last_insert_rowid())))
    }

    #[tracing::instrument(name = "Retrieving user from SQLite", skip_all)]
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, COALESCE(nombre, '') AS nombre, email, COALESCE(pass, '') AS pass
            FROM usuarios
            WHERE email = ?1
            "#,
        )
        .bind(email.as_ref())
        .fetch_one(&self.pool)
        .await
        .map(User::from)
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => UserStoreError::UserNotFound,
            err => UserStoreError::UnexpectedError(eyre!(err)),
        })
    }

    #[tracing::instrument(
        name = "Validating user credentials in SQLite",
        skip_all
    )]
    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<User, UserStoreError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, COALESCE(nombre, '') AS nombre, email, pass
            FROM usuarios
            WHERE email = ?1 AND pass = ?2
            "#,
        )
        .bind(email.as_ref())
        .bind(password.as_ref().expose_secret())
        .fetch_one(&self.pool)
        .await
        .map(User::from)
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => UserStoreError::InvalidCredentials,
            err => UserStoreError::UnexpectedError(eyre!(err)),
        })
    }

    #[tracing::instrument(name = "Listing users from SQLite", skip_all)]
    async fn get_users(&self) -> Result<Vec<User>, UserStoreError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, COALESCE(nombre, '') AS nombre,
                   COALESCE(email, '') AS email, COALESCE(pass, '') AS pass
            FROM usuarios
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(eyre!(e)))?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
