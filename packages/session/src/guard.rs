//! Pure navigation-guard decision, kept out of the UI layer so it can be
//! tested without a running renderer.

use crate::roles::{landing_route, Role, RouteKey};
use crate::store::AuthUser;

/// Outcome of one navigation attempt through the route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected children.
    Allow,
    /// No session: redirect to the login route.
    ToLogin,
    /// Signed in, but not permitted here: redirect to the role's landing
    /// route.
    ToLanding(RouteKey),
}

/// Decide a navigation attempt.
///
/// `allowed_roles = None` means any authenticated user may enter. The
/// decision is recomputed on every navigation; nothing is cached.
pub fn evaluate_guard(user: Option<&AuthUser>, allowed_roles: Option<&[Role]>) -> GuardDecision {
    let Some(user) = user else {
        return GuardDecision::ToLogin;
    };

    if let Some(allowed) = allowed_roles {
        if !allowed.contains(&user.role) {
            return GuardDecision::ToLanding(landing_route(user.role));
        }
    }

    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(role: Role) -> AuthUser {
        AuthUser {
            id: Some(7),
            email: None,
            username: "someone".to_string(),
            role,
        }
    }

    #[test]
    fn test_unauthenticated_always_goes_to_login() {
        assert_eq!(evaluate_guard(None, None), GuardDecision::ToLogin);
        assert_eq!(
            evaluate_guard(None, Some(&[Role::Admin])),
            GuardDecision::ToLogin
        );
        assert_eq!(
            evaluate_guard(None, Some(&[Role::Admin, Role::User])),
            GuardDecision::ToLogin
        );
    }

    #[test]
    fn test_user_turned_away_from_admin_route() {
        let user = user_with(Role::User);
        assert_eq!(
            evaluate_guard(Some(&user), Some(&[Role::Admin])),
            GuardDecision::ToLanding(RouteKey::Exhibitions)
        );
    }

    #[test]
    fn test_admin_turned_away_lands_on_dashboard() {
        let admin = user_with(Role::Admin);
        assert_eq!(
            evaluate_guard(Some(&admin), Some(&[Role::User])),
            GuardDecision::ToLanding(RouteKey::Dashboard)
        );
    }

    #[test]
    fn test_matching_role_is_allowed() {
        let admin = user_with(Role::Admin);
        assert_eq!(
            evaluate_guard(Some(&admin), Some(&[Role::Admin])),
            GuardDecision::Allow
        );

        let user = user_with(Role::User);
        assert_eq!(
            evaluate_guard(Some(&user), Some(&[Role::Admin, Role::User])),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_unrestricted_route_allows_any_session() {
        let user = user_with(Role::User);
        assert_eq!(evaluate_guard(Some(&user), None), GuardDecision::Allow);
    }
}
