use crate::error::AppError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Signing algorithm for access tokens.
pub const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Environment variable holding the signing secret. Read at call time, never
/// cached at startup.
pub const JWT_SECRET_VAR: &str = "JWT_SECRET_KEY";

/// Token lifetime from issuance.
const TOKEN_TTL_MINUTES: i64 = 30;

/// The claims encoded within an access token. These are the only two claims
/// a token carries.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Issued-at timestamp (seconds since epoch, UTC).
    pub iat: usize,
    /// Expiration timestamp (seconds since epoch, UTC).
    pub exp: usize,
}

/// Issues a fresh access token.
///
/// The token expires 30 minutes after issuance and is signed with
/// HMAC-SHA256 using the secret from `JWT_SECRET_KEY`.
///
/// # Returns
/// A `Result` containing the token string if successful.
/// Returns `AppError::SecretNotProvided` if the secret is unset (there is no
/// fallback default) and `AppError::Internal` if encoding fails.
pub fn create_access_token() -> Result<String, AppError> {
    let issued_at = chrono::Utc::now();
    let expires_at = issued_at
        .checked_add_signed(chrono::Duration::minutes(TOKEN_TTL_MINUTES))
        .expect("valid timestamp");

    let claims = Claims {
        iat: issued_at.timestamp() as usize,
        exp: expires_at.timestamp() as usize,
    };

    let secret = secret_from_env()?;

    encode(
        &Header::new(JWT_ALGORITHM),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to encode token: {}", e)))
}

/// Verifies an access token's signature and expiry.
///
/// # Returns
/// `true` if the token is valid.
/// Returns `AppError::SecretNotProvided` if the secret is unset and
/// `AppError::TokenVerification` if the token is malformed, its signature is
/// invalid, or it has expired.
pub fn verify_access_token(token: &str) -> Result<bool, AppError> {
    let secret = secret_from_env()?;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(JWT_ALGORITHM),
    )?;

    Ok(true)
}

fn secret_from_env() -> Result<String, AppError> {
    std::env::var(JWT_SECRET_VAR).map_err(|_| AppError::SecretNotProvided)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::JWT_SECRET_VAR;
    use lazy_static::lazy_static;

    lazy_static! {
        // Single lock for every test that touches JWT_SECRET_KEY, across
        // modules; cargo runs tests on parallel threads.
        pub static ref JWT_ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    }

    // Helper to run test logic with JWT_SECRET_KEY temporarily set or unset.
    pub fn run_with_temp_jwt_secret<F>(secret_value: Option<&str>, test_logic: F)
    where
        F: FnOnce(),
    {
        let _guard = JWT_ENV_LOCK.lock().unwrap();

        let original_secret_val = std::env::var(JWT_SECRET_VAR).ok();
        match secret_value {
            Some(value) => std::env::set_var(JWT_SECRET_VAR, value),
            None => std::env::remove_var(JWT_SECRET_VAR),
        }

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(test_logic));

        if let Some(original) = original_secret_val {
            std::env::set_var(JWT_SECRET_VAR, original);
        } else {
            std::env::remove_var(JWT_SECRET_VAR);
        }

        if let Err(panic_payload) = result {
            std::panic::resume_unwind(panic_payload);
        }
    }
}
