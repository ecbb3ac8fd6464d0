//! Wire types exchanged with the REST backend.
//!
//! Every struct here mirrors a backend JSON shape, so fields are camelCase on
//! the wire and optional wherever the backend may omit them.

mod auth;
mod dashboard;
mod employee;
mod exhibition;
mod product;
mod user;
mod visitor;

pub use auth::{LoginRequest, LoginResponse};
pub use dashboard::{Dashboard, DashboardAnalytics, DateCount, NameCount, RecentVisitor};
pub use employee::Employee;
pub use exhibition::Exhibition;
pub use product::{AttachmentUpload, Product, ProductPayload};
pub use user::UserPayload;
pub use visitor::{Visitor, VisitorCreateResponse, VisitorProduct};
