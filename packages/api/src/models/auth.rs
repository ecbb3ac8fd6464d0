use serde::{Deserialize, Serialize};
use session::{AuthUser, Role};

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload. The token is optional because cookie-based
/// deployments omit it.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    pub username: String,
    pub role: Role,
}

impl LoginResponse {
    /// The identity to persist in the session store.
    pub fn into_user(self) -> AuthUser {
        AuthUser {
            id: self.id,
            email: self.email,
            username: self.username,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_parses_full_payload() {
        let json = r#"{
            "token": "jwt-abc",
            "id": 3,
            "email": "admin@expo.test",
            "username": "admin",
            "role": "ADMIN"
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token.as_deref(), Some("jwt-abc"));
        assert_eq!(resp.role, Role::Admin);

        let user = resp.into_user();
        assert_eq!(user.username, "admin");
        assert_eq!(user.id, Some(3));
    }

    #[test]
    fn test_login_response_tolerates_missing_token() {
        let json = r#"{"username": "operator", "role": "USER"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(resp.token.is_none());
        assert!(resp.id.is_none());
        assert_eq!(resp.role, Role::User);
    }
}
