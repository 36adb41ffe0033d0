use argon2::{
    password_hash::{self, rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use once_cell::sync::Lazy;

use crate::{error::Result, Error};

/// Verified against when the email is unknown, so both failure paths cost the same.
static DUMMY_HASH: Lazy<Option<String>> = Lazy::new(|| hash("not a real password").ok());

/// Hashes a password into an argon2id PHC string.
pub fn hash(password: &str) -> std::result::Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Checks a password against a stored PHC string. Unparsable hashes never match.
pub fn verify(hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        warn!("stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub async fn hash_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash(&password))
        .await
        .map_err(Error::internal)?
        .map_err(Error::internal)
}

/// Runs [`verify`] off the async workers. `None` burns the same time on a dummy hash.
pub async fn verify_blocking(hash: Option<String>, password: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || match hash {
        Some(hash) => verify(&hash, &password),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                verify(dummy, &password);
            }
            false
        }
    })
    .await
    .map_err(Error::internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hashed = hash("correct horse").unwrap();

        assert!(hashed.starts_with("$argon2id$"));
        assert!(verify(&hashed, "correct horse"));
        assert!(!verify(&hashed, "battery staple"));
    }

    #[test]
    fn same_password_gets_different_salts() {
        assert_ne!(hash("secret").unwrap(), hash("secret").unwrap());
    }

    #[test]
    fn garbage_hash_never_matches() {
        assert!(!verify("plaintext-password", "plaintext-password"));
    }

    #[tokio::test]
    async fn unknown_user_is_rejected() {
        assert!(!verify_blocking(None, "whatever".to_owned()).await.unwrap());
    }
}
