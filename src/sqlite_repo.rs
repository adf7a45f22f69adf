use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::doc_id::new_doc_id;
use crate::error::AppError;
use crate::models::account::{Account, AccountFields};
use crate::models::script::{Script, ScriptFields};
use crate::repository::DocumentStore;

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn list_scripts(&self) -> Result<Vec<Script>, AppError> {
        tracing::debug!("db: SELECT all scripts");

        let rows: Vec<Script> =
            sqlx::query_as("SELECT id, title, image, key FROM scripts ORDER BY rowid ASC")
                .fetch_all(&self.pool)
                .await?;

        tracing::debug!(rows_returned = rows.len(), "db: scripts fetched");

        Ok(rows)
    }

    async fn insert_script(&self, fields: &ScriptFields) -> Result<Script, AppError> {
        let id = new_doc_id();
        tracing::debug!(script_id = %id, title = %fields.title, "db: INSERT script");

        sqlx::query("INSERT INTO scripts (id, title, image, key) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&fields.title)
            .bind(&fields.image)
            .bind(&fields.key)
            .execute(&self.pool)
            .await?;

        tracing::debug!(script_id = %id, "db: script row inserted");

        Ok(Script {
            id,
            title: fields.title.clone(),
            image: fields.image.clone(),
            key: fields.key.clone(),
        })
    }

    async fn replace_script(&self, id: &str, fields: &ScriptFields) -> Result<bool, AppError> {
        tracing::debug!(script_id = %id, "db: UPDATE script");

        let result = sqlx::query("UPDATE scripts SET title = ?, image = ?, key = ? WHERE id = ?")
            .bind(&fields.title)
            .bind(&fields.image)
            .bind(&fields.key)
            .bind(id)
            .execute(&self.pool)
            .await?;

        let matched = result.rows_affected() > 0;
        tracing::debug!(
            script_id = %id,
            rows_affected = result.rows_affected(),
            matched,
            "db: script update result"
        );

        Ok(matched)
    }

    async fn delete_script(&self, id: &str) -> Result<bool, AppError> {
        tracing::debug!(script_id = %id, "db: DELETE script");

        let result = sqlx::query("DELETE FROM scripts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        tracing::debug!(
            script_id = %id,
            rows_affected = result.rows_affected(),
            deleted,
            "db: script delete result"
        );

        Ok(deleted)
    }

    async fn count_scripts(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scripts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        tracing::debug!("db: SELECT all accounts");

        let rows: Vec<Account> = sqlx::query_as(
            "SELECT id, name, image, username, password, accent_color \
             FROM accounts ORDER BY rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(rows_returned = rows.len(), "db: accounts fetched");

        Ok(rows)
    }

    async fn insert_account(&self, fields: &AccountFields) -> Result<Account, AppError> {
        let id = new_doc_id();
        tracing::debug!(account_id = %id, username = %fields.username, "db: INSERT account");

        sqlx::query(
            "INSERT INTO accounts (id, name, image, username, password, accent_color) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&fields.name)
        .bind(&fields.image)
        .bind(&fields.username)
        .bind(&fields.password)
        .bind(&fields.accent_color)
        .execute(&self.pool)
        .await?;

        tracing::debug!(account_id = %id, "db: account row inserted");

        Ok(Account {
            id,
            name: fields.name.clone(),
            image: fields.image.clone(),
            username: fields.username.clone(),
            password: fields.password.clone(),
            accent_color: fields.accent_color.clone(),
        })
    }

    async fn replace_account(&self, id: &str, fields: &AccountFields) -> Result<bool, AppError> {
        tracing::debug!(account_id = %id, "db: UPDATE account");

        let result = sqlx::query(
            "UPDATE accounts SET name = ?, image = ?, username = ?, password = ?, \
             accent_color = ? WHERE id = ?",
        )
        .bind(&fields.name)
        .bind(&fields.image)
        .bind(&fields.username)
        .bind(&fields.password)
        .bind(&fields.accent_color)
        .bind(id)
        .execute(&self.pool)
        .await?;

        let matched = result.rows_affected() > 0;
        tracing::debug!(
            account_id = %id,
            rows_affected = result.rows_affected(),
            matched,
            "db: account update result"
        );

        Ok(matched)
    }

    async fn delete_account(&self, id: &str) -> Result<bool, AppError> {
        tracing::debug!(account_id = %id, "db: DELETE account");

        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        tracing::debug!(
            account_id = %id,
            rows_affected = result.rows_affected(),
            deleted,
            "db: account delete result"
        );

        Ok(deleted)
    }

    async fn count_accounts(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
