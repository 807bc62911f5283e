use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;
use crate::domain::user::User;

/// Administrator identity carried inside the signed session cookie.
///
/// The session is not self-certifying: privileged operations re-check
/// `is_admin` against the record store on every request, so this struct is
/// only a claim about who logged in, never an authorization proof.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub name: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<User> for AdminUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            name: user.name,
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
