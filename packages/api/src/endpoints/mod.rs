//! Typed wrappers over the backend REST endpoints, one module per resource.
//! All methods live on [`crate::ApiClient`] so every call inherits the auth
//! header, loader pairing and 401 interception.

mod auth;
mod dashboard;
mod employees;
mod exhibitions;
mod products;
mod users;
mod visitors;
