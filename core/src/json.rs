//! Shared JSON helpers used by the client and its handlers.

use serde::{de::DeserializeOwned, Serialize};

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}

/// Pretty-print JSON text for log output. Text that is not valid JSON is
/// returned unchanged.
pub fn make_pretty(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;

    #[test]
    fn make_pretty_indents_json() {
        assert_eq!(make_pretty(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn make_pretty_passes_through_non_json() {
        assert_eq!(make_pretty("<html>oops</html>"), "<html>oops</html>");
    }

    #[test]
    fn user_survives_to_and_from_json() {
        let user = User {
            id: 7,
            email: "michael.lawson@reqres.in".to_string(),
            first_name: "Michael".to_string(),
            last_name: "Lawson".to_string(),
            avatar: Some("https://reqres.in/img/faces/7-image.jpg".to_string()),
        };
        let text = to_json(&user).unwrap();
        let back: User = from_json(&text).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn from_json_reports_malformed_input() {
        assert!(from_json::<User>("{\"id\":").is_err());
    }
}
