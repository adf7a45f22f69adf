use async_trait::async_trait;

use crate::error::AppError;
use crate::models::account::{Account, AccountFields};
use crate::models::script::{Script, ScriptFields};

/// Typed access to the two document collections. Identifiers are generated
/// by the store on insert; replace/delete report whether a record matched.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list_scripts(&self) -> Result<Vec<Script>, AppError>;
    async fn insert_script(&self, fields: &ScriptFields) -> Result<Script, AppError>;
    async fn replace_script(&self, id: &str, fields: &ScriptFields) -> Result<bool, AppError>;
    async fn delete_script(&self, id: &str) -> Result<bool, AppError>;
    async fn count_scripts(&self) -> Result<i64, AppError>;

    async fn list_accounts(&self) -> Result<Vec<Account>, AppError>;
    async fn insert_account(&self, fields: &AccountFields) -> Result<Account, AppError>;
    async fn replace_account(&self, id: &str, fields: &AccountFields) -> Result<bool, AppError>;
    async fn delete_account(&self, id: &str) -> Result<bool, AppError>;
    async fn count_accounts(&self) -> Result<i64, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
