use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AttachmentUpload, Product, ProductPayload};

impl ApiClient {
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/products").await
    }

    /// Catalog as shown on the public registration form.
    pub async fn public_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/products/public").await
    }

    /// Create a product. The brochure travels in the same multipart body as
    /// the product fields.
    pub async fn create_product(
        &self,
        payload: &ProductPayload,
        attachment: Option<AttachmentUpload>,
    ) -> Result<(), ApiError> {
        self.post_multipart("/products", payload, attachment).await
    }

    /// Update a product. Omitting the attachment keeps the stored one.
    pub async fn update_product(
        &self,
        id: i64,
        payload: &ProductPayload,
        attachment: Option<AttachmentUpload>,
    ) -> Result<(), ApiError> {
        self.put_multipart(&format!("/products/{id}"), payload, attachment)
            .await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/products/{id}")).await
    }

    /// Inline preview URL for a stored attachment, for `iframe`/`img` use.
    pub fn product_preview_url(&self, file_name: &str) -> String {
        self.url(&format!("/products/preview/{file_name}"))
    }

    /// Download URL for a stored attachment.
    pub fn product_download_url(&self, file_name: &str) -> String {
        self.url(&format!("/products/download/{file_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiConfig;
    use session::{GlobalLoader, MemoryBackend, SessionStore};
    use std::sync::Arc;

    #[test]
    fn test_attachment_urls_include_the_base_path() {
        let client = ApiClient::new(
            ApiConfig::new("/api"),
            SessionStore::new(Arc::new(MemoryBackend::new())),
            GlobalLoader::new(),
        );
        assert_eq!(
            client.product_preview_url("brochure.pdf"),
            "/api/products/preview/brochure.pdf"
        );
        assert_eq!(
            client.product_download_url("brochure.pdf"),
            "/api/products/download/brochure.pdf"
        );
    }
}
