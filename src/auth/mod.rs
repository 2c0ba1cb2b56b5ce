pub mod extractors;
pub mod password;
pub mod service;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::BearerToken;
pub use password::{hash_password, verify_password};
pub use service::AuthService;
pub use token::{create_access_token, verify_access_token, Claims};

/// Payload for the sign-up endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Display name, free-form but not empty.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Form payload for the token (sign-in) endpoint.
///
/// The field is called `username` on the wire, following the OAuth2 password
/// flow, but it carries the user's email.
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[serde(rename = "username")]
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Query payload for the verify-token endpoint.
#[derive(Debug, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

/// Response after successful authentication (sign-up or sign-in).
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Email identifying the authenticated user.
    pub email: String,
    /// The signed access token for subsequent requests.
    pub access_token: String,
    pub token_type: String,
}

impl AuthResponse {
    pub fn bearer(email: String, access_token: String) -> Self {
        Self {
            email,
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
