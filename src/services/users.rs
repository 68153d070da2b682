use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::User;
use crate::session::SessionGuard;
use crate::store::Store;

/// Moderation operations over the user directory.
#[derive(Clone)]
pub struct UserDirectory {
    api: ApiClient,
    session: SessionGuard,
    store: Store<User>,
}

impl UserDirectory {
    pub fn new(api: ApiClient, session: SessionGuard) -> Self {
        Self {
            api,
            session,
            store: Store::new("users"),
        }
    }

    pub fn store(&self) -> &Store<User> {
        &self.store
    }

    pub async fn fetch_all(&self) -> Result<(), ApiError> {
        let api = self.api.clone();
        let result = self
            .store
            .refresh(|| async move { api.fetch_users().await })
            .await;
        super::intercept_auth(&self.session, result).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let api = self.api.clone();
        let owned = id.to_string();
        let result = self
            .store
            .apply_remove(id, || async move { api.delete_user(&owned).await })
            .await;
        super::intercept_auth(&self.session, result).await
    }
}
