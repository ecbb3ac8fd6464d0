//! # Route authorization table
//!
//! Maps every navigable route to the set of roles permitted to enter it.
//! The table is keyed by [`RouteKey`] so the compiler rejects a route without
//! a policy; [`validate_route_table`] additionally rejects an empty role set
//! at startup.

use serde::{Deserialize, Serialize};

/// Authorization roles controlling which screens are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "USER")]
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "ADMIN" => Some(Role::Admin),
            "USER" => Some(Role::User),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier for each route the application serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKey {
    Dashboard,
    Exhibitions,
    Products,
    Users,
    Employees,
    Visitors,
    Login,
    Visit,
}

/// Who may enter a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Reachable without a session (login page, QR registration form).
    Public,
    /// Reachable only by authenticated users holding one of these roles.
    Allowed(&'static [Role]),
}

impl RouteKey {
    pub const ALL: [RouteKey; 8] = [
        RouteKey::Dashboard,
        RouteKey::Exhibitions,
        RouteKey::Products,
        RouteKey::Users,
        RouteKey::Employees,
        RouteKey::Visitors,
        RouteKey::Login,
        RouteKey::Visit,
    ];

    /// The authorization policy for this route. Exhaustive: a new route
    /// cannot compile without an entry here.
    pub fn policy(self) -> RoutePolicy {
        match self {
            RouteKey::Dashboard => RoutePolicy::Allowed(&[Role::Admin]),
            RouteKey::Exhibitions => RoutePolicy::Allowed(&[Role::Admin, Role::User]),
            RouteKey::Visitors => RoutePolicy::Allowed(&[Role::Admin, Role::User]),
            RouteKey::Products => RoutePolicy::Allowed(&[Role::Admin]),
            RouteKey::Users => RoutePolicy::Allowed(&[Role::Admin]),
            RouteKey::Employees => RoutePolicy::Allowed(&[Role::Admin]),
            RouteKey::Login => RoutePolicy::Public,
            RouteKey::Visit => RoutePolicy::Public,
        }
    }

    /// The role set for a guarded route, or `None` for public routes.
    pub fn allowed_roles(self) -> Option<&'static [Role]> {
        match self.policy() {
            RoutePolicy::Public => None,
            RoutePolicy::Allowed(roles) => Some(roles),
        }
    }
}

/// Where a role lands after login, or when turned away from a screen it may
/// not enter.
pub fn landing_route(role: Role) -> RouteKey {
    match role {
        Role::Admin => RouteKey::Dashboard,
        Role::User => RouteKey::Exhibitions,
    }
}

/// Startup check: every route carries either a public marker or a non-empty
/// role set.
pub fn validate_route_table() -> Result<(), String> {
    for route in RouteKey::ALL {
        if let RoutePolicy::Allowed(roles) = route.policy() {
            if roles.is_empty() {
                return Err(format!("route {route:?} permits no role"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_roundtrip() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("USER"), Some(Role::User));
        assert_eq!(Role::parse("root"), None);
        assert_eq!(Role::Admin.as_str(), "ADMIN");
    }

    #[test]
    fn test_role_serde_uses_wire_names() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_table_is_valid() {
        validate_route_table().unwrap();
    }

    #[test]
    fn test_admin_only_routes() {
        for route in [RouteKey::Dashboard, RouteKey::Products, RouteKey::Users, RouteKey::Employees]
        {
            assert_eq!(route.allowed_roles(), Some(&[Role::Admin][..]), "{route:?}");
        }
    }

    #[test]
    fn test_shared_routes_allow_both_roles() {
        for route in [RouteKey::Exhibitions, RouteKey::Visitors] {
            let roles = route.allowed_roles().unwrap();
            assert!(roles.contains(&Role::Admin));
            assert!(roles.contains(&Role::User));
        }
    }

    #[test]
    fn test_public_routes() {
        assert_eq!(RouteKey::Login.policy(), RoutePolicy::Public);
        assert_eq!(RouteKey::Visit.policy(), RoutePolicy::Public);
    }

    #[test]
    fn test_landing_routes() {
        assert_eq!(landing_route(Role::Admin), RouteKey::Dashboard);
        assert_eq!(landing_route(Role::User), RouteKey::Exhibitions);
    }
}
