use serde::Serialize;

use crate::domain::auth::AdminUser;

/// Body returned by the login and logout endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponseDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AdminUser>,
}

impl AuthResponseDto {
    pub fn success(message: impl Into<String>, user: Option<AdminUser>) -> Self {
        Self {
            success: true,
            message: message.into(),
            user,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
        }
    }
}

/// Body returned by the session read endpoint; `user` is always present,
/// `null` when the session did not validate.
#[derive(Debug, Clone, Serialize)]
pub struct SessionDto {
    pub user: Option<AdminUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
