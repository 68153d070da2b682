use super::ApiClient;
use crate::error::ApiError;
use crate::models::Transaction;
use crate::workflow::TransactionStatusPatch;

impl ApiClient {
    /// `GET /transactions` — the full collection, submitter embedded.
    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.execute(self.get("/transactions"), "Failed to fetch transactions")
            .await
    }

    /// `PATCH /transactions/{id}` with the minimal status payload.
    pub async fn update_transaction(
        &self,
        id: &str,
        patch: &TransactionStatusPatch,
    ) -> Result<Transaction, ApiError> {
        self.execute(
            self.patch(&format!("/transactions/{id}")).json(patch),
            "Failed to update transaction",
        )
        .await
    }
}
