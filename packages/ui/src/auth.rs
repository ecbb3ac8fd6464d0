//! Authentication context and hooks for the UI.
//!
//! The session services are plain values provided as context by the app
//! shell; components reach them through the `use_*` hooks below instead of
//! touching globals.

use api::ApiClient;
use dioxus::prelude::*;
use session::{AuthUser, SessionStore};

/// Authentication state for the application.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<AuthUser>,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role.is_admin())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared REST client installed by the app shell.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// The shared session store installed by the app shell.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

/// Provider component that owns the authentication signal.
/// Seeds it from the session store, so a stored login survives reloads.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_context::<SessionStore>();
    let auth_state = use_signal(|| AuthState {
        user: session.get_user(),
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Record a successful login: persist the identity and token, then flip the
/// auth signal so guards and layouts re-render.
pub fn sign_in(
    mut auth: Signal<AuthState>,
    session: &SessionStore,
    user: AuthUser,
    token: Option<&str>,
) {
    session.save(&user);
    if let Some(token) = token {
        session.save_token(token);
    }
    auth.set(AuthState { user: Some(user) });
}

/// Clear the stored session and the auth signal.
pub fn sign_out(mut auth: Signal<AuthState>, session: &SessionStore) {
    session.clear();
    auth.set(AuthState::default());
}
