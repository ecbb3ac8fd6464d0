use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::UserPayload;

impl ApiClient {
    pub async fn users(&self) -> Result<Vec<UserPayload>, ApiError> {
        self.get_json("/users").await
    }

    pub async fn create_user(&self, user: &UserPayload) -> Result<(), ApiError> {
        self.post_unit("/users", user).await
    }

    /// Update username and role. Callers pass `password: None` so the stored
    /// credential is untouched.
    pub async fn update_user(&self, id: i64, user: &UserPayload) -> Result<(), ApiError> {
        self.put_unit(&format!("/users/{id}"), user).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/users/{id}")).await
    }
}
