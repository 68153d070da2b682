use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Transaction, TransactionStatus};
use crate::session::SessionGuard;
use crate::store::Store;
use crate::workflow;

/// Review operations over the transaction collection.
#[derive(Clone)]
pub struct TransactionService {
    api: ApiClient,
    session: SessionGuard,
    store: Store<Transaction>,
}

impl TransactionService {
    pub fn new(api: ApiClient, session: SessionGuard) -> Self {
        Self {
            api,
            session,
            store: Store::new("transactions"),
        }
    }

    /// The cache backing the transaction list view.
    pub fn store(&self) -> &Store<Transaction> {
        &self.store
    }

    pub async fn fetch_all(&self) -> Result<(), ApiError> {
        let api = self.api.clone();
        let result = self
            .store
            .refresh(|| async move { api.fetch_transactions().await })
            .await;
        super::intercept_auth(&self.session, result).await
    }

    /// Validates and submits a status transition for one transaction.
    ///
    /// `tx` carries the reviewer's edits to the mutable fields (bank
    /// reference, account number, holder name); everything else in it is
    /// ignored when the payload is built. On success the updated record is
    /// already in the cache and the caller may close its editor; on failure
    /// the cache data is untouched and the editor should stay open.
    pub async fn submit_transition(
        &self,
        tx: &Transaction,
        proposed: TransactionStatus,
        rejection_note: Option<&str>,
    ) -> Result<Transaction, ApiError> {
        let patch = workflow::build_status_patch(tx, proposed, rejection_note)?;

        let api = self.api.clone();
        let id = tx.id.clone();
        let result = self
            .store
            .apply_update(|| async move { api.update_transaction(&id, &patch).await })
            .await;
        super::intercept_auth(&self.session, result).await
    }
}
