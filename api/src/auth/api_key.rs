//! Admin API key authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Hash an API key for comparison
fn hash_api_key(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(hasher.finalize())
}

/// The admin credential mutating routes are checked against
///
/// Only the hash of the configured key is held. Without a configured key
/// every mutating request is refused.
#[derive(Clone, Default)]
pub struct AdminAuth {
    key_hash: Option<String>,
}

impl AdminAuth {
    pub fn new(admin_key: Option<&str>) -> Self {
        Self {
            key_hash: admin_key.map(hash_api_key),
        }
    }

    fn accepts(&self, api_key: &str) -> bool {
        self.key_hash
            .as_deref()
            .is_some_and(|expected| expected == hash_api_key(api_key))
    }
}

/// Extract the API key from the Authorization header
fn extract_api_key(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware for mutating routes
pub async fn require_admin(
    State(auth): State<AdminAuth>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = extract_api_key(&request).ok_or(AppError::Unauthorized)?;

    if !auth.accepts(api_key) {
        tracing::debug!(path = %request.uri().path(), "Rejected admin API key");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
