use std::path::Path;
use std::sync::Arc;

use crate::models::account::AccountFields;
use crate::models::script::ScriptFields;
use crate::repository::DocumentStore;

/// One-time fixture import: if a collection is empty and the matching
/// fixture file exists, load its entries. Failures are logged and never
/// abort startup; steady-state behavior is unaffected.
pub async fn seed_if_empty(repo: &Arc<dyn DocumentStore>, dir: &Path) {
    seed_scripts(repo, &dir.join("default_scripts.json")).await;
    seed_accounts(repo, &dir.join("default_accounts.json")).await;
}

async fn seed_scripts(repo: &Arc<dyn DocumentStore>, path: &Path) {
    let count = match repo.count_scripts().await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(error = %e, "Seed: could not count scripts, skipping");
            return;
        }
    };
    if count > 0 || !path.exists() {
        return;
    }

    let entries: Vec<ScriptFields> = match read_fixture(path) {
        Some(entries) => entries,
        None => return,
    };

    let mut imported = 0usize;
    for fields in &entries {
        match repo.insert_script(fields).await {
            Ok(_) => imported += 1,
            Err(e) => tracing::warn!(title = %fields.title, error = %e, "Seed: script insert failed"),
        }
    }

    tracing::info!(imported, fixture = %path.display(), "Default scripts imported");
}

async fn seed_accounts(repo: &Arc<dyn DocumentStore>, path: &Path) {
    let count = match repo.count_accounts().await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(error = %e, "Seed: could not count accounts, skipping");
            return;
        }
    };
    if count > 0 || !path.exists() {
        return;
    }

    let entries: Vec<AccountFields> = match read_fixture(path) {
        Some(entries) => entries,
        None => return,
    };

    let mut imported = 0usize;
    for fields in &entries {
        match repo.insert_account(fields).await {
            Ok(_) => imported += 1,
            Err(e) => {
                tracing::warn!(username = %fields.username, error = %e, "Seed: account insert failed")
            }
        }
    }

    tracing::info!(imported, fixture = %path.display(), "Default accounts imported");
}

fn read_fixture<T: serde::de::DeserializeOwned>(path: &Path) -> Option<Vec<T>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(fixture = %path.display(), error = %e, "Seed: fixture unreadable");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => Some(entries),
        Err(e) => {
            tracing::warn!(fixture = %path.display(), error = %e, "Seed: fixture is not valid JSON");
            None
        }
    }
}
