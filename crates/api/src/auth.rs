use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

const ADMIN_ROLE: &str = "admin";

/// Claims carried by session tokens issued to portal users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: u64,
}

/// Extractor that only admits a valid bearer token with the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub subject: String,
}

pub fn decode_claims(token: &str, secret: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| {
        tracing::debug!(error = %err, "rejected bearer token");
        ApiError::Unauthorized
    })
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Unauthorized)?;

        let claims = decode_claims(bearer.token(), &state.config().jwt_secret)?;
        if claims.role != ADMIN_ROLE {
            tracing::warn!(subject = %claims.sub, role = %claims.role, "non-admin write attempt");
            return Err(ApiError::Forbidden("admin role required".to_string()));
        }
        Ok(AdminUser {
            subject: claims.sub,
        })
    }
}
