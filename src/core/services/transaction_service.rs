use uuid::Uuid;

use crate::domain::{Displayable, Transaction, TransactionDraft};
use crate::store::TransactionStore;

use super::ServiceResult;

/// Transaction CRUD with validation in front of the store.
pub struct TransactionService;

impl TransactionService {
    /// Validates the draft and persists it. Nothing is written when
    /// validation fails.
    pub fn create(
        store: &dyn TransactionStore,
        draft: TransactionDraft,
    ) -> ServiceResult<Transaction> {
        draft.validate()?;
        let stored = store.insert(draft)?;
        tracing::info!(transaction = %stored.display_label(), "transaction created");
        Ok(stored)
    }

    /// Replaces every field of an existing transaction except its identifier.
    pub fn update(
        store: &dyn TransactionStore,
        id: Uuid,
        draft: TransactionDraft,
    ) -> ServiceResult<Transaction> {
        draft.validate()?;
        let stored = store.update(id, draft)?;
        tracing::info!(transaction = %stored.display_label(), "transaction updated");
        Ok(stored)
    }

    pub fn remove(store: &dyn TransactionStore, id: Uuid) -> ServiceResult<()> {
        store.delete(id)?;
        tracing::info!(%id, "transaction removed");
        Ok(())
    }

    pub fn list(store: &dyn TransactionStore) -> ServiceResult<Vec<Transaction>> {
        Ok(store.list()?)
    }
}
