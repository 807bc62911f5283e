use crate::domain::auth::AdminUser;
use crate::forms::auth::LoginFormPayload;
use crate::repository::UserReader;

use super::{ServiceError, ServiceResult};

/// Work factor for stored password hashes.
const BCRYPT_COST: u32 = 10;

/// Hashes a plaintext password for storage.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| {
        log::error!("Failed to hash password: {e}");
        ServiceError::Internal
    })
}

/// Verifies credentials and returns the administrator identity to store in
/// the session.
///
/// An unknown identifier and a wrong password produce the same error; a
/// valid non-administrator account gets a distinct one.
pub fn login_admin<R>(payload: &LoginFormPayload, repo: &R) -> ServiceResult<AdminUser>
where
    R: UserReader,
{
    let user = match repo.get_user_by_email_or_username(&payload.identifier) {
        Ok(Some(user)) => user,
        Ok(None) => return Err(ServiceError::InvalidCredentials),
        Err(e) => {
            log::error!("Failed to look up user: {e}");
            return Err(ServiceError::Repository(e.to_string()));
        }
    };

    match bcrypt::verify(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::InvalidCredentials),
        Err(e) => {
            log::error!("Failed to verify password: {e}");
            return Err(ServiceError::Internal);
        }
    }

    if !user.is_admin {
        return Err(ServiceError::NotAnAdmin);
    }

    Ok(user.into())
}

/// Re-validates a session claim against the user store.
///
/// The stored record wins over the cookie: a user deleted or demoted since
/// login is rejected here regardless of what the claim says.
pub fn authenticate_admin<R>(claim: &AdminUser, repo: &R) -> ServiceResult<AdminUser>
where
    R: UserReader,
{
    let user = match repo.get_user_by_id(claim.id) {
        Ok(Some(user)) => user,
        Ok(None) => return Err(ServiceError::Unauthorized),
        Err(e) => {
            log::error!("Failed to look up session user: {e}");
            return Err(ServiceError::Repository(e.to_string()));
        }
    };

    if !user.is_admin {
        return Err(ServiceError::Unauthorized);
    }

    Ok(user.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::UserId;
    use crate::domain::user::User;
    use crate::repository::test::TestRepository;
    use chrono::Utc;

    fn user(id: i32, email: &str, password: &str, is_admin: bool) -> User {
        let now = Utc::now().naive_utc();
        User {
            id: UserId::new(id).unwrap(),
            email: email.to_string(),
            username: email.split('@').next().unwrap().to_string(),
            name: "Test User".to_string(),
            password_hash: hash_password(password).unwrap(),
            is_admin,
            created_at: now,
            updated_at: now,
        }
    }

    fn payload(identifier: &str, password: &str) -> LoginFormPayload {
        LoginFormPayload {
            identifier: identifier.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn unknown_user_and_wrong_password_are_indistinguishable() {
        let repo = TestRepository::new().with_users(vec![user(1, "admin@example.com", "pw", true)]);

        let unknown = login_admin(&payload("ghost@example.com", "pw"), &repo);
        let wrong = login_admin(&payload("admin@example.com", "nope"), &repo);

        assert_eq!(unknown, Err(ServiceError::InvalidCredentials));
        assert_eq!(wrong, Err(ServiceError::InvalidCredentials));
    }

    #[test]
    fn valid_non_admin_gets_distinct_error() {
        let repo = TestRepository::new().with_users(vec![user(1, "user@example.com", "pw", false)]);

        let result = login_admin(&payload("user@example.com", "pw"), &repo);
        assert_eq!(result, Err(ServiceError::NotAnAdmin));
    }

    #[test]
    fn admin_can_log_in_by_email_or_username() {
        let repo = TestRepository::new().with_users(vec![user(1, "admin@example.com", "pw", true)]);

        let by_email = login_admin(&payload("admin@example.com", "pw"), &repo).unwrap();
        let by_username = login_admin(&payload("admin", "pw"), &repo).unwrap();

        assert_eq!(by_email.id.get(), 1);
        assert_eq!(by_username.id.get(), 1);
        assert!(by_email.is_admin);
    }

    #[test]
    fn stale_claim_loses_to_store_state() {
        let admin = user(1, "admin@example.com", "pw", true);
        let claim = AdminUser::from(admin.clone());

        let mut demoted = admin;
        demoted.is_admin = false;
        let repo = TestRepository::new().with_users(vec![demoted]);

        assert_eq!(
            authenticate_admin(&claim, &repo),
            Err(ServiceError::Unauthorized)
        );
    }

    #[test]
    fn deleted_user_claim_is_rejected() {
        let admin = user(1, "admin@example.com", "pw", true);
        let claim = AdminUser::from(admin);
        let repo = TestRepository::new();

        assert_eq!(
            authenticate_admin(&claim, &repo),
            Err(ServiceError::Unauthorized)
        );
    }

    #[test]
    fn live_admin_claim_passes() {
        let admin = user(1, "admin@example.com", "pw", true);
        let claim = AdminUser::from(admin.clone());
        let repo = TestRepository::new().with_users(vec![admin]);

        let validated = authenticate_admin(&claim, &repo).unwrap();
        assert_eq!(validated.id, claim.id);
    }
}
