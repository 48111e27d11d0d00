use serde::{Deserialize, Serialize};

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub username: String,
    #[serde(default, alias = "fullName")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
    #[serde(default, alias = "phoneNumber")]
    pub phone: Option<String>,
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Domain user (business view). Has no password field, so it is safe to
/// hand back to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A user as persisted, password included.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: AuthUser,
    pub password: String,
}

impl From<models::user::Model> for StoredUser {
    fn from(m: models::user::Model) -> Self {
        StoredUser {
            user: AuthUser { username: m.username, name: m.name, email: m.email, phone: m.phone },
            password: m.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_accepts_frontend_field_names() {
        let input: RegisterInput = serde_json::from_str(
            r#"{"username":"jd","fullName":"Jane Doe","email":"jd@example.com","password":"pw","phoneNumber":"555"}"#,
        )
        .unwrap();
        assert_eq!(input.name.as_deref(), Some("Jane Doe"));
        assert_eq!(input.phone.as_deref(), Some("555"));
    }

    #[test]
    fn auth_user_never_serializes_a_password() {
        let stored = StoredUser::from(models::user::Model {
            username: "jd".into(),
            name: None,
            email: None,
            password: "secret".into(),
            phone: None,
        });
        let v = serde_json::to_value(&stored.user).unwrap();
        assert!(v.get("password").is_none());
        assert_eq!(v["username"], "jd");
    }
}
