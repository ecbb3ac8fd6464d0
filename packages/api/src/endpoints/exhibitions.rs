use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Exhibition;

impl ApiClient {
    pub async fn exhibitions(&self) -> Result<Vec<Exhibition>, ApiError> {
        self.get_json("/exhibitions").await
    }

    /// Single exhibition through the unauthenticated endpoint backing the
    /// public registration form.
    pub async fn public_exhibition(&self, id: i64) -> Result<Exhibition, ApiError> {
        self.get_json(&format!("/exhibitions/public/{id}")).await
    }

    pub async fn create_exhibition(&self, exhibition: &Exhibition) -> Result<(), ApiError> {
        self.post_unit("/exhibitions", exhibition).await
    }

    pub async fn update_exhibition(&self, id: i64, exhibition: &Exhibition) -> Result<(), ApiError> {
        self.put_unit(&format!("/exhibitions/{id}"), exhibition).await
    }

    pub async fn delete_exhibition(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/exhibitions/{id}")).await
    }
}
