//! Domain models for the users API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! the JSON shapes are owned by the remote API. Required fields have no serde
//! defaults, so a response missing one fails to deserialize instead of
//! producing a half-filled `User`. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A single user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Support metadata attached to enveloped responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Support {
    pub url: String,
    pub text: String,
}

/// Generic wrapper the API puts around single-entity responses:
/// `{"data": {...}, "support": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<Support>,
}

/// One page of users plus the pagination counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPage {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub data: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<Support>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_rejects_missing_email() {
        let result: Result<User, _> =
            serde_json::from_str(r#"{"id":1,"first_name":"George","last_name":"Bluth"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn user_avatar_is_optional() {
        let user: User = serde_json::from_str(
            r#"{"id":2,"email":"janet.weaver@reqres.in","first_name":"Janet","last_name":"Weaver"}"#,
        )
        .unwrap();
        assert!(user.avatar.is_none());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("avatar").is_none());
    }

    #[test]
    fn envelope_ignores_unknown_fields() {
        let env: Envelope<User> = serde_json::from_str(
            r#"{"data":{"id":3,"email":"emma.wong@reqres.in","first_name":"Emma","last_name":"Wong","extra":true},"meta":{}}"#,
        )
        .unwrap();
        assert_eq!(env.data.id, 3);
        assert!(env.support.is_none());
    }

    #[test]
    fn page_rejects_wrong_counter_type() {
        let result: Result<UserPage, _> = serde_json::from_str(
            r#"{"page":"one","per_page":6,"total":0,"total_pages":0,"data":[]}"#,
        );
        assert!(result.is_err());
    }
}
