use super::ApiClient;
use crate::error::ApiError;
use crate::models::User;

impl ApiClient {
    /// `GET /admin/users` — the full user directory.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.execute(self.get("/admin/users"), "Failed to fetch users")
            .await
    }

    /// `DELETE /admin/users/{id}`.
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.execute_empty(
            self.delete(&format!("/admin/users/{id}")),
            "Failed to delete user",
        )
        .await
    }
}
