//! This crate contains all shared UI for the workspace: the auth context,
//! the route guard, notifications, the global loading overlay and the admin
//! layout chrome.

mod auth;
pub use auth::{sign_in, sign_out, use_api, use_auth, use_session, AuthProvider, AuthState};

mod guard;
pub use guard::{route_path, RouteGuard};

mod notifications;
pub use notifications::{
    use_notifications, use_notifier, Notification, NotificationKind, Notifications,
    NotificationsProvider, Notifier, Toaster,
};

mod loading;
pub use loading::GlobalLoadingOverlay;

mod modal;
pub use modal::{ConfirmDialog, ModalOverlay};

mod layout;
pub use layout::AdminLayout;
