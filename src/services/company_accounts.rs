use crate::api::{ApiClient, CompanyAccountInput};
use crate::error::ApiError;
use crate::filter::active_company_accounts;
use crate::models::CompanyAccount;
use crate::session::SessionGuard;
use crate::store::Store;

/// CRUD over the company payout/receiving accounts.
#[derive(Clone)]
pub struct CompanyAccountService {
    api: ApiClient,
    session: SessionGuard,
    store: Store<CompanyAccount>,
}

impl CompanyAccountService {
    pub fn new(api: ApiClient, session: SessionGuard) -> Self {
        Self {
            api,
            session,
            store: Store::new("company_accounts"),
        }
    }

    pub fn store(&self) -> &Store<CompanyAccount> {
        &self.store
    }

    /// Accounts the console actually lists: retired payment types are hidden.
    pub async fn visible(&self) -> Vec<CompanyAccount> {
        active_company_accounts(&self.store.data().await)
    }

    pub async fn fetch_all(&self) -> Result<(), ApiError> {
        let api = self.api.clone();
        let result = self
            .store
            .refresh(|| async move { api.fetch_company_accounts().await })
            .await;
        super::intercept_auth(&self.session, result).await
    }

    pub async fn create(&self, input: &CompanyAccountInput) -> Result<CompanyAccount, ApiError> {
        input.validate()?;

        let api = self.api.clone();
        let input = input.clone();
        let result = self
            .store
            .apply_create(|| async move { api.create_company_account(&input).await })
            .await;
        super::intercept_auth(&self.session, result).await
    }

    /// Full-replacement update; the caller closes its editor only on success.
    pub async fn update(
        &self,
        id: &str,
        input: &CompanyAccountInput,
    ) -> Result<CompanyAccount, ApiError> {
        input.validate()?;

        let api = self.api.clone();
        let input = input.clone();
        let id = id.to_string();
        let result = self
            .store
            .apply_update(|| async move { api.update_company_account(&id, &input).await })
            .await;
        super::intercept_auth(&self.session, result).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let api = self.api.clone();
        let owned = id.to_string();
        let result = self
            .store
            .apply_remove(id, || async move { api.delete_company_account(&owned).await })
            .await;
        super::intercept_auth(&self.session, result).await
    }
}
