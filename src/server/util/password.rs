//! Password hashing and verification.
//!
//! Passwords are stored as Argon2id PHC strings with a per-hash random salt.
//! The stored hash never crosses the wire, so the choice of algorithm is
//! invisible to the game client.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a plaintext password for storage.
///
/// # Arguments
/// - `password` - The plaintext password to hash
///
/// # Returns
/// - `Ok(String)` - Argon2id PHC string with embedded salt and parameters
/// - `Err(AppError::PasswordHashErr)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC string.
///
/// # Arguments
/// - `password` - The plaintext password presented at login
/// - `password_hash` - The stored PHC string to verify against
///
/// # Returns
/// - `Ok(true)` - Password matches the stored hash
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::PasswordHashErr)` - Stored hash failed to parse
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(password_hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(err.into()),
    }
}
