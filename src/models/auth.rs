use serde::{Deserialize, Serialize};
use std::fmt;

/// Rol de la cuenta. Decide qué vistas puede ver una sesión.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Photographer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Photographer => "photographer",
            Role::Admin => "admin",
        }
    }

    /// Parse tolerante para valores que vienen de storage o de la red.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "customer" => Some(Role::Customer),
            "photographer" => Some(Role::Photographer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Respuesta de GET /api/auth/me.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MeResponse {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_as_lowercase_json() {
        let json = serde_json::to_string(&Role::Photographer).unwrap();
        assert_eq!(json, "\"photographer\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Photographer);
    }

    #[test]
    fn role_parse_tolerates_case_and_whitespace() {
        assert_eq!(Role::parse("  Customer "), Some(Role::Customer));
        assert_eq!(Role::parse("PHOTOGRAPHER"), Some(Role::Photographer));
        assert_eq!(Role::parse("driver"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn user_accepts_mongo_id_alias() {
        let user: User = serde_json::from_str(
            r#"{"_id":"abc123","name":"Asha","email":"asha@example.com","role":"customer"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "abc123");
        assert_eq!(user.role, Role::Customer);
    }

    #[test]
    fn login_response_tolerates_extra_fields() {
        // El backend a veces adjunta un token; con transporte por cookie se ignora
        let response: LoginResponse =
            serde_json::from_str(r#"{"role":"photographer","token":"abc"}"#).unwrap();
        assert_eq!(response.role, Some(Role::Photographer));
        assert_eq!(response.user, None);
    }
}
