use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::config::ConfigManager;
use crate::core::utils::{app_data_dir, ensure_dir};
use crate::domain::{Budget, Category, Identifiable, MonthKey, Transaction, TransactionDraft};
use crate::errors::FiscalError;

use super::{BudgetStore, Result, TransactionStore};

const TRANSACTIONS_FILE: &str = "transactions.json";
const BUDGETS_FILE: &str = "budgets.json";
const TMP_SUFFIX: &str = "tmp";

/// Document-backed store: each collection lives in its own JSON file under
/// the data directory and every mutation rewrites that document atomically
/// (write to a temp file, then rename). The two documents are independent;
/// no write ever touches both.
#[derive(Debug, Clone)]
pub struct JsonStore {
    transactions_path: PathBuf,
    budgets_path: PathBuf,
}

impl JsonStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        Ok(Self {
            transactions_path: root.join(TRANSACTIONS_FILE),
            budgets_path: root.join(BUDGETS_FILE),
        })
    }

    /// Opens under the data directory from the persisted configuration,
    /// falling back to the default when no override is set.
    pub fn open_default() -> Result<Self> {
        let config = ConfigManager::new().load()?;
        Self::open(config.data_dir.unwrap_or_else(app_data_dir))
    }

    pub fn transactions_path(&self) -> &Path {
        &self.transactions_path
    }

    pub fn budgets_path(&self) -> &Path {
        &self.budgets_path
    }

    fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&data).map_err(|err| {
            FiscalError::Storage(format!(
                "document `{}` is unreadable: {err}",
                path.display()
            ))
        })
    }

    fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        let tmp = tmp_path(path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl TransactionStore for JsonStore {
    fn list(&self) -> Result<Vec<Transaction>> {
        let mut records: Vec<Transaction> = Self::read_collection(&self.transactions_path)?;
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    fn get(&self, id: Uuid) -> Result<Transaction> {
        let records: Vec<Transaction> = Self::read_collection(&self.transactions_path)?;
        let position = index_of(&records, id).ok_or(FiscalError::TransactionNotFound(id))?;
        Ok(records[position].clone())
    }

    fn insert(&self, draft: TransactionDraft) -> Result<Transaction> {
        let mut records: Vec<Transaction> = Self::read_collection(&self.transactions_path)?;
        let stored = draft.into_transaction(Uuid::new_v4());
        records.push(stored.clone());
        Self::write_collection(&self.transactions_path, &records)?;
        tracing::debug!(id = %stored.id, "transaction written");
        Ok(stored)
    }

    fn update(&self, id: Uuid, draft: TransactionDraft) -> Result<Transaction> {
        let mut records: Vec<Transaction> = Self::read_collection(&self.transactions_path)?;
        let position = index_of(&records, id).ok_or(FiscalError::TransactionNotFound(id))?;
        records[position] = draft.into_transaction(id);
        let stored = records[position].clone();
        Self::write_collection(&self.transactions_path, &records)?;
        Ok(stored)
    }

    fn delete(&self, id: Uuid) -> Result<()> {
        let mut records: Vec<Transaction> = Self::read_collection(&self.transactions_path)?;
        let position = index_of(&records, id).ok_or(FiscalError::TransactionNotFound(id))?;
        records.remove(position);
        Self::write_collection(&self.transactions_path, &records)?;
        tracing::debug!(%id, "transaction removed");
        Ok(())
    }
}

impl BudgetStore for JsonStore {
    fn list(&self) -> Result<Vec<Budget>> {
        Self::read_collection(&self.budgets_path)
    }

    fn get(&self, category: Category, month: MonthKey) -> Result<Option<Budget>> {
        Ok(Self::read_collection::<Budget>(&self.budgets_path)?
            .into_iter()
            .find(|budget| budget.key() == (category, month)))
    }

    fn upsert(&self, budget: Budget) -> Result<Budget> {
        let mut records: Vec<Budget> = Self::read_collection(&self.budgets_path)?;
        match records.iter_mut().find(|b| b.key() == budget.key()) {
            Some(slot) => *slot = budget.clone(),
            None => records.push(budget.clone()),
        }
        Self::write_collection(&self.budgets_path, &records)?;
        tracing::debug!(category = %budget.category, month = %budget.month, "budget written");
        Ok(budget)
    }

    fn delete(&self, category: Category, month: MonthKey) -> Result<()> {
        let mut records: Vec<Budget> = Self::read_collection(&self.budgets_path)?;
        let before = records.len();
        records.retain(|budget| budget.key() != (category, month));
        if records.len() == before {
            return Err(FiscalError::BudgetNotFound(category, month));
        }
        Self::write_collection(&self.budgets_path, &records)
    }
}

fn index_of<T: Identifiable>(records: &[T], id: Uuid) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::open(temp.path()).expect("json store");
        (store, temp)
    }

    fn sample_draft() -> TransactionDraft {
        TransactionDraft::new(
            12.0,
            NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            "Bus ticket",
            TransactionKind::Expense,
            Category::Transportation,
        )
    }

    #[test]
    fn insert_then_list_round_trips() {
        let (store, _guard) = store_with_temp_dir();
        let stored = TransactionStore::insert(&store, sample_draft()).unwrap();
        let listed = TransactionStore::list(&store).unwrap();
        assert_eq!(listed, vec![stored]);
    }

    #[test]
    fn missing_document_reads_as_empty() {
        let (store, _guard) = store_with_temp_dir();
        assert!(TransactionStore::list(&store).unwrap().is_empty());
        assert!(BudgetStore::list(&store).unwrap().is_empty());
    }

    #[test]
    fn corrupt_document_surfaces_a_storage_error() {
        let (store, _guard) = store_with_temp_dir();
        fs::write(store.transactions_path(), "{not json").unwrap();
        assert!(matches!(
            TransactionStore::list(&store),
            Err(FiscalError::Storage(_))
        ));
    }

    #[test]
    fn open_default_honors_the_configured_data_dir() {
        let base = TempDir::new().unwrap();
        let data = TempDir::new().unwrap();
        std::env::set_var("FISCALIZER_HOME", base.path());

        let config = crate::config::Config {
            data_dir: Some(data.path().to_path_buf()),
            ..Default::default()
        };
        ConfigManager::new().save(&config).unwrap();
        let store = JsonStore::open_default().unwrap();
        std::env::remove_var("FISCALIZER_HOME");

        assert_eq!(store.transactions_path(), data.path().join(TRANSACTIONS_FILE));
        assert_eq!(store.budgets_path(), data.path().join(BUDGETS_FILE));
    }

    #[test]
    fn budget_documents_are_independent_of_transactions() {
        let (store, _guard) = store_with_temp_dir();
        let month = MonthKey::new(2026, 3).unwrap();
        store
            .upsert(Budget::new(Category::Food, 120.0, month))
            .unwrap();
        assert!(!store.transactions_path().exists());
        assert!(store.budgets_path().exists());
    }
}
