//! # Typed REST client for the exhibition backend
//!
//! Everything the admin console and the public registration form say to the
//! backend goes through this crate. It owns the wire types, the base-path
//! configuration, the error taxonomy and the [`ApiClient`] wrapper that
//! layers auth headers, loader bookkeeping and 401 interception over every
//! request.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: request execution, auth header, 401/403 interception, multipart upload |
//! | [`config`] | [`ApiConfig`]: where the backend is mounted |
//! | [`error`] | [`ApiError`] and server-message extraction |
//! | [`models`] | Wire types for every resource (exhibitions, products, users, employees, visitors, dashboard) |
//! | `endpoints` | One `impl ApiClient` block per resource with the typed endpoint methods |

pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
