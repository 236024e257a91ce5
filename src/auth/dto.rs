use serde::Deserialize;

use crate::error::ApiError;

/// Request body for user registration. Fields are optional at the wire level
/// so a missing key and an empty value fail validation the same way.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Validated registration input. Email is kept exactly as submitted; lookups
/// are case-sensitive.
#[derive(Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Validated login input.
#[derive(Debug)]
pub struct Login {
    pub email: String,
    pub password: String,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl RegisterRequest {
    pub fn validate(self) -> Result<Registration, ApiError> {
        match (
            present(self.name),
            present(self.email),
            present(self.password),
        ) {
            (Some(name), Some(email), Some(password)) => Ok(Registration {
                name,
                email,
                password,
            }),
            _ => Err(ApiError::Validation("All fields are required.")),
        }
    }
}

impl LoginRequest {
    pub fn validate(self) -> Result<Login, ApiError> {
        match (present(self.email), present(self.password)) {
            (Some(email), Some(password)) => Ok(Login { email, password }),
            _ => Err(ApiError::Validation("Email and password are required.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn register(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            name: name.map(String::from),
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn register_accepts_full_input() {
        let input = register(Some("Ada"), Some("ada@example.com"), Some("hunter22"))
            .validate()
            .expect("full input should validate");
        assert_eq!(input.name, "Ada");
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.password, "hunter22");
    }

    #[test]
    fn register_rejects_each_missing_field() {
        let cases = [
            register(None, Some("ada@example.com"), Some("hunter22")),
            register(Some("Ada"), None, Some("hunter22")),
            register(Some("Ada"), Some("ada@example.com"), None),
        ];
        for case in cases {
            let err = case.validate().unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.to_string(), "All fields are required.");
        }
    }

    #[test]
    fn register_treats_empty_strings_as_missing() {
        let err = register(Some(""), Some("ada@example.com"), Some("hunter22"))
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "All fields are required.");
    }

    #[test]
    fn email_case_is_preserved() {
        let input = register(Some("Ada"), Some("Ada@Example.COM"), Some("hunter22"))
            .validate()
            .expect("mixed-case email is valid input");
        assert_eq!(input.email, "Ada@Example.COM");
    }

    #[test]
    fn login_rejects_missing_fields() {
        let cases = [
            LoginRequest {
                email: None,
                password: Some("hunter22".into()),
            },
            LoginRequest {
                email: Some("ada@example.com".into()),
                password: Some("".into()),
            },
        ];
        for case in cases {
            let err = case.validate().unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.to_string(), "Email and password are required.");
        }
    }

    #[test]
    fn login_accepts_full_input() {
        let input = LoginRequest {
            email: Some("ada@example.com".into()),
            password: Some("hunter22".into()),
        }
        .validate()
        .expect("full input should validate");
        assert_eq!(input.email, "ada@example.com");
    }
}
