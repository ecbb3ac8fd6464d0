use serde::{Deserialize, Serialize};
use session::Role;

/// Console account record, used for both list rows and create/update bodies.
///
/// The password is write-only: the backend never returns it, and updates omit
/// it entirely so the existing credential is left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_payload_never_carries_a_password() {
        let user = UserPayload {
            id: Some(4),
            username: "operator".to_string(),
            password: None,
            role: Role::User,
        };
        let out = serde_json::to_value(&user).unwrap();
        assert!(out.get("password").is_none());
        assert_eq!(out["role"], "USER");
    }

    #[test]
    fn test_create_payload_carries_the_password() {
        let user = UserPayload {
            id: None,
            username: "newbie".to_string(),
            password: Some("hunter2".to_string()),
            role: Role::Admin,
        };
        let out = serde_json::to_value(&user).unwrap();
        assert_eq!(out["password"], "hunter2");
        assert!(out.get("id").is_none());
    }

    #[test]
    fn test_list_row_parses_without_password() {
        let user: UserPayload =
            serde_json::from_str(r#"{"id":1,"username":"admin","role":"ADMIN"}"#).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.password.is_none());
    }
}
