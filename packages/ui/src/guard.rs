//! Route guard component wrapping every protected screen.
//!
//! The decision itself lives in `session::evaluate_guard`; this component
//! only wires it to the router. While a redirect is pending it renders
//! nothing, so protected content never flashes.

use dioxus::prelude::*;
use session::{evaluate_guard, GuardDecision, RouteKey};

use crate::auth::use_auth;

/// Browser path for each route key.
pub fn route_path(key: RouteKey) -> &'static str {
    match key {
        RouteKey::Dashboard => "/dashboard",
        RouteKey::Exhibitions => "/exhibitions",
        RouteKey::Products => "/products",
        RouteKey::Users => "/users",
        RouteKey::Employees => "/employees",
        RouteKey::Visitors => "/visitors",
        RouteKey::Login => "/login",
        RouteKey::Visit => "/visit",
    }
}

/// Gate `children` behind the authorization policy of `route`.
///
/// Re-evaluates whenever the auth state or the target route changes;
/// decisions are never cached across navigations.
#[component]
pub fn RouteGuard(route: RouteKey, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth.read();
        match evaluate_guard(state.user.as_ref(), route.allowed_roles()) {
            GuardDecision::Allow => {}
            GuardDecision::ToLogin => {
                tracing::debug!("no session, redirecting {route:?} to login");
                nav.replace(route_path(RouteKey::Login));
            }
            GuardDecision::ToLanding(landing) => {
                tracing::debug!("role not permitted on {route:?}, redirecting to {landing:?}");
                nav.replace(route_path(landing));
            }
        }
    });

    let state = auth();
    match evaluate_guard(state.user.as_ref(), route.allowed_roles()) {
        GuardDecision::Allow => rsx! {
            {children}
        },
        _ => rsx! {},
    }
}
