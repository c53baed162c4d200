use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use validator::Validate;

use crate::entities::auth::{LoginRequest, LoginResponse};
use crate::errors::AppError;
use crate::settings::AppConfig;

/// Single-admin credential exchange.
///
/// Tokens are `base64(username ":" unix_millis)` and carry no signature;
/// verification checks shape and username only. A deliberate placeholder,
/// not an authentication scheme.
pub struct AuthHandler {
    username: String,
    password: String,
}

impl AuthHandler {
    pub fn new(config: &AppConfig) -> Self {
        AuthHandler {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        }
    }

    pub fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        if request.username != self.username || request.password != self.password {
            tracing::warn!("rejected login attempt for {:?}", request.username);
            return Err(AppError::UnauthorizedAccess);
        }

        Ok(LoginResponse {
            success: true,
            token: self.mint_token(),
            message: "Login successful".into(),
        })
    }

    pub fn mint_token(&self) -> String {
        BASE64.encode(format!("{}:{}", self.username, Utc::now().timestamp_millis()))
    }

    /// Accepts any well-formed token minted for the configured admin user.
    pub fn verify_token(&self, token: &str) -> bool {
        let Ok(decoded) = BASE64.decode(token) else {
            return false;
        };
        let Ok(decoded) = String::from_utf8(decoded) else {
            return false;
        };
        match decoded.split_once(':') {
            Some((name, millis)) => name == self.username && millis.parse::<i64>().is_ok(),
            None => false,
        }
    }

    pub fn admin_username(&self) -> &str {
        &self.username
    }
}
