// SPDX-License-Identifier: Apache-2.0

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dose_certa_model::PasswordHash;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

pub const SALT_LEN: usize = 16;

#[must_use]
pub fn new_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

fn keyed(salt: &[u8]) -> Result<HmacSha256, AuthError> {
    HmacSha256::new_from_slice(salt)
        .map_err(|e| AuthError::Validation(format!("invalid credential salt: {e}")))
}

/// HMAC-SHA256 of the password keyed by the salt, both base64 encoded.
pub fn hash_password(password: &str, salt: &[u8]) -> Result<PasswordHash, AuthError> {
    let mut mac = keyed(salt)?;
    mac.update(password.as_bytes());
    Ok(PasswordHash {
        salt: STANDARD.encode(salt),
        digest: STANDARD.encode(mac.finalize().into_bytes()),
    })
}

/// Constant-time check; malformed stored hashes never verify.
#[must_use]
pub fn verify_password(password: &str, stored: &PasswordHash) -> bool {
    let (Ok(salt), Ok(digest)) = (STANDARD.decode(&stored.salt), STANDARD.decode(&stored.digest))
    else {
        return false;
    };
    let Ok(mut mac) = keyed(&salt) else {
        return false;
    };
    mac.update(password.as_bytes());
    mac.verify_slice(&digest).is_ok()
}
