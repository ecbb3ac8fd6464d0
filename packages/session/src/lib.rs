pub mod backend;
pub mod guard;
pub mod loader;
pub mod roles;
pub mod store;

pub use backend::{MemoryBackend, StorageBackend};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::LocalStorageBackend;

pub use guard::{evaluate_guard, GuardDecision};
pub use loader::{GlobalLoader, LoaderGuard};
pub use roles::{landing_route, validate_route_table, Role, RouteKey, RoutePolicy};
pub use store::{AuthUser, SessionStore};
