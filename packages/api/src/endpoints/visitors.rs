use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Visitor, VisitorCreateResponse};

impl ApiClient {
    /// Register a visitor. Used unauthenticated by the public form and
    /// authenticated by the admin "Add Visitor" flow.
    pub async fn create_visitor(
        &self,
        visitor: &Visitor,
    ) -> Result<VisitorCreateResponse, ApiError> {
        self.post_json("/visitors", visitor).await
    }

    pub async fn all_visitors(&self) -> Result<Vec<Visitor>, ApiError> {
        self.get_json("/visitors/all").await
    }

    pub async fn visitors_by_exhibition(&self, exhibition_id: i64) -> Result<Vec<Visitor>, ApiError> {
        self.get_json(&format!("/visitors/exhibition/{exhibition_id}"))
            .await
    }
}
