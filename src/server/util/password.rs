//! Argon2 password hashing.
//!
//! Hashing is CPU-bound, so both operations run on tokio's blocking pool instead of
//! the request task.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a plaintext password into a PHC string.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted argon2 hash including the salt
/// - `Err(AppError::InternalErr(PasswordHash))` - Hashing failed
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| InternalError::PasswordHash(e.to_string()))?
    .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash)
}

/// Checks a plaintext password against a stored PHC hash.
///
/// A stored value that is not a valid PHC string never verifies.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match or the stored hash is malformed
/// - `Err(AppError::InternalErr(PasswordHash))` - The blocking task failed
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(matches)
}
