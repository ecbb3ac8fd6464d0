use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};

impl ApiClient {
    /// Exchange credentials for an identity. On success the caller persists
    /// the user and token through the session store; this method does not
    /// write the session itself.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login", &request).await
    }
}
