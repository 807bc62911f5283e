use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(rename = "emailOrUsername", alias = "email_or_username")]
    #[validate(length(min = 1))]
    pub email_or_username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginFormPayload {
    /// Either the email address or the username of the account.
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum LoginFormError {
    #[error("Login form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for LoginFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<LoginForm> for LoginFormPayload {
    type Error = LoginFormError;

    fn try_from(value: LoginForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            identifier: value.email_or_username.trim().to_string(),
            password: value.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_trims_identifier() {
        let form = LoginForm {
            email_or_username: " admin@example.com ".to_string(),
            password: "secret".to_string(),
        };

        let payload: LoginFormPayload = form.try_into().unwrap();
        assert_eq!(payload.identifier, "admin@example.com");
    }

    #[test]
    fn login_form_rejects_blank_password() {
        let form = LoginForm {
            email_or_username: "admin".to_string(),
            password: String::new(),
        };

        let payload: Result<LoginFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn login_form_accepts_camel_case_key() {
        let form: LoginForm =
            serde_json::from_str(r#"{"emailOrUsername":"admin","password":"pw"}"#).unwrap();
        assert_eq!(form.email_or_username, "admin");
    }
}
