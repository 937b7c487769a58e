//! HTTP Basic Authentication Middleware
//!
//! Extracts and verifies Basic credentials against the user store.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{
        header::{AUTHORIZATION, WWW_AUTHENTICATE},
        request::Parts,
        StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose, Engine as _};

use crate::domain::gateways::UserRepository;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ErrorDetail, ErrorResponse};

/// Authenticated identity passed explicitly into every handler
#[derive(Debug, Clone)]
pub struct Principal {
    pub name: String,
}

/// Extractor that authenticates the caller with HTTP Basic credentials and
/// requires the CARD-OWNER role
pub struct CardOwner(pub Principal);

/// Error type for authentication and authorization failures
pub enum AuthError {
    /// Missing, malformed, or invalid credentials
    Unauthorized(String),
    /// Authenticated, but without the role the resource requires
    Forbidden,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Unauthorized(message) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Access denied".to_string(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
            request_id: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                WWW_AUTHENTICATE,
                axum::http::HeaderValue::from_static("Basic realm=\"cashcards\""),
            );
        }
        response
    }
}

/// Parse a Basic Authorization header into username and password
fn decode_basic_credentials(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;
    let (username, password) = credentials.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[async_trait]
impl<S> FromRequestParts<S> for CardOwner
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the user store from request extensions
        let users = parts
            .extensions
            .get::<Arc<dyn UserRepository>>()
            .ok_or_else(|| AuthError::Unauthorized("User store not available".to_string()))?
            .clone();

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AuthError::Unauthorized("Missing Authorization header".to_string()))?;

        let (username, password) = decode_basic_credentials(auth_header).ok_or_else(|| {
            AuthError::Unauthorized("Invalid Authorization header format".to_string())
        })?;

        // A missing user and a wrong password produce the same rejection.
        let user = users
            .find_by_username(&username)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "User lookup failed during authentication");
                AuthError::Unauthorized("Invalid credentials".to_string())
            })?
            .filter(|user| user.verify_password(&password))
            .ok_or_else(|| AuthError::Unauthorized("Invalid credentials".to_string()))?;

        if !user.is_card_owner() {
            tracing::debug!(username = %username, role = %user.role(), "Principal lacks card owner role");
            return Err(AuthError::Forbidden);
        }

        Ok(CardOwner(Principal {
            name: user.username().to_string(),
        }))
    }
}

/// Middleware layer that adds the user store to request extensions for the
/// authentication extractor
pub async fn add_user_store_extension(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request.extensions_mut().insert(state.user_repository.clone());
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic_credentials() {
        // "jay:abc1234"
        let header = format!("Basic {}", general_purpose::STANDARD.encode("jay:abc1234"));
        let (username, password) = decode_basic_credentials(&header).unwrap();
        assert_eq!(username, "jay");
        assert_eq!(password, "abc1234");
    }

    #[test]
    fn test_decode_rejects_non_basic_scheme() {
        assert!(decode_basic_credentials("Bearer abc").is_none());
    }

    #[test]
    fn test_decode_rejects_missing_separator() {
        let header = format!("Basic {}", general_purpose::STANDARD.encode("no-colon-here"));
        assert!(decode_basic_credentials(&header).is_none());
    }

    #[test]
    fn test_password_may_contain_colons() {
        let header = format!("Basic {}", general_purpose::STANDARD.encode("jay:a:b:c"));
        let (_, password) = decode_basic_credentials(&header).unwrap();
        assert_eq!(password, "a:b:c");
    }
}
