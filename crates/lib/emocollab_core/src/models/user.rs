//! User models.
//!
//! Not produced by any endpoint yet; kept so chat participants have a shape.

use serde::{Deserialize, Serialize};

/// Role a user holds in the organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Hr,
}

/// Domain user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"employee\"");
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"hr\"");
    }

    #[test]
    fn user_deserializes_from_wire_shape() {
        let user: User =
            serde_json::from_str(r#"{"id":3,"name":"Sari","role":"hr"}"#).unwrap();
        assert_eq!(
            user,
            User {
                id: 3,
                name: "Sari".into(),
                role: Role::Hr,
            }
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        let res = serde_json::from_str::<User>(r#"{"id":3,"name":"x","role":"admin"}"#);
        assert!(res.is_err());
    }
}
