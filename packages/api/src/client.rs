//! # HTTP client wrapper
//!
//! Every request to the REST backend goes through [`ApiClient`]. The wrapper
//! owns the cross-cutting behavior so screens do not have to:
//!
//! - holds a [`session::GlobalLoader`] guard for the lifetime of each request,
//!   so the loading indicator pairs every start with a stop on all paths;
//! - attaches the stored bearer token when the session has one;
//! - intercepts 401 responses by clearing the session and invoking the
//!   configured unauthorized hook (the shell navigates to the login route);
//! - logs 403 responses and hands them back as ordinary server errors.
//!
//! Callers receive the decoded body or an [`ApiError`]; nothing is swallowed
//! beyond the 401 side effects above.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use session::{GlobalLoader, SessionStore};

use crate::config::ApiConfig;
use crate::error::{extract_server_message, ApiError};
use crate::models::{AttachmentUpload, ProductPayload};

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Shared REST client. Cloning is cheap and shares the session, loader and
/// connection pool.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
    session: SessionStore,
    loader: GlobalLoader,
    on_unauthorized: UnauthorizedHook,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SessionStore, loader: GlobalLoader) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            session,
            loader,
            on_unauthorized: Arc::new(|| {}),
        }
    }

    /// Install the handler invoked after a 401 has cleared the session.
    pub fn with_unauthorized_handler(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Arc::new(hook);
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn loader(&self) -> &GlobalLoader {
        &self.loader
    }

    /// Absolute URL for an API path. `path` always starts with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send one request while holding a loader guard, then apply the auth
    /// interceptor to the status.
    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let _guard = self.loader.guard();
        let response = builder.send().await?;
        self.check_status(response).await
    }

    async fn check_status(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::info!("received 401, clearing stored session");
            self.session.clear();
            (self.on_unauthorized)();
            return Err(ApiError::Unauthorized);
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            tracing::warn!("request forbidden for the current role");
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message: extract_server_message(&body),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.execute(self.request(Method::POST, path).json(body))
            .await?;
        Ok(())
    }

    pub(crate) async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await?;
        Ok(())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    /// Multipart body shared by product create and update: a `product` JSON
    /// part plus an optional `file` part for the brochure.
    fn product_form(
        payload: &ProductPayload,
        attachment: Option<AttachmentUpload>,
    ) -> Result<Form, ApiError> {
        let json = serde_json::to_string(payload)?;
        let mut form = Form::new().part("product", Part::text(json).mime_str("application/json")?);
        if let Some(upload) = attachment {
            form = form.part("file", Part::bytes(upload.bytes).file_name(upload.file_name));
        }
        Ok(form)
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        payload: &ProductPayload,
        attachment: Option<AttachmentUpload>,
    ) -> Result<(), ApiError> {
        let form = Self::product_form(payload, attachment)?;
        self.execute(self.request(Method::POST, path).multipart(form))
            .await?;
        Ok(())
    }

    pub(crate) async fn put_multipart(
        &self,
        path: &str,
        payload: &ProductPayload,
        attachment: Option<AttachmentUpload>,
    ) -> Result<(), ApiError> {
        let form = Self::product_form(payload, attachment)?;
        self.execute(self.request(Method::PUT, path).multipart(form))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::MemoryBackend;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(
            ApiConfig::new(base_url),
            SessionStore::new(Arc::new(MemoryBackend::new())),
            GlobalLoader::new(),
        )
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = client("https://expo.example.com/api");
        assert_eq!(
            client.url("/exhibitions"),
            "https://expo.example.com/api/exhibitions"
        );
    }

    #[test]
    fn test_url_tolerates_trailing_slash_in_base() {
        let client = client("https://expo.example.com/api/");
        assert_eq!(
            client.url("/auth/login"),
            "https://expo.example.com/api/auth/login"
        );
    }

    #[test]
    fn test_default_unauthorized_hook_is_a_no_op() {
        let client = client("/api");
        (client.on_unauthorized)();
    }

    #[test]
    fn test_unauthorized_handler_is_replaceable() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let fired = Arc::new(AtomicBool::new(false));
        let fired_ref = fired.clone();
        let client =
            client("/api").with_unauthorized_handler(move || fired_ref.store(true, Ordering::SeqCst));
        (client.on_unauthorized)();
        assert!(fired.load(Ordering::SeqCst));
    }
}
