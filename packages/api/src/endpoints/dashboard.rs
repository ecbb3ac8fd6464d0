use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Dashboard;

impl ApiClient {
    pub async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        self.get_json("/dashboard").await
    }
}
