//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a new user.
///
/// Accepted as JSON or as an URL-encoded form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// A user's public information. Never carries the password or internal revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// `{ "users": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

/// `{ "user": {...} }`, with `null` when the user does not exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleUserResponse {
    pub user: Option<UserResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_user_serializes_as_null() {
        let body = serde_json::to_value(SingleUserResponse { user: None }).unwrap();
        assert_eq!(body, json!({ "user": null }));
    }

    #[test]
    fn test_create_request_rejects_missing_password() {
        let result = serde_json::from_value::<CreateUserRequest>(json!({
            "first_name": "John",
            "last_name": "Doe",
            "email": "johndoe@gmail.com"
        }));
        assert!(result.is_err());
    }
}
