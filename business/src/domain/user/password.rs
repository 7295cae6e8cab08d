use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use rand::RngCore;
use sha2::{Digest, Sha256};

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;

/// Hashes a password with a fresh random salt.
///
/// Stored format: `sha256$<base64 salt>$<base64 digest>`. Every write path
/// (registration and reset) goes through this function.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    let digest = digest_with_salt(&salt, password);
    format!(
        "{}${}${}",
        SCHEME,
        BASE64.encode(salt),
        BASE64.encode(digest)
    )
}

/// Checks a password against a stored hash. Malformed stored values never
/// verify.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(scheme), Some(salt_b64), Some(digest_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if scheme != SCHEME {
        return false;
    }
    let (Ok(salt), Ok(digest)) = (BASE64.decode(salt_b64), BASE64.decode(digest_b64)) else {
        return false;
    };
    digest_with_salt(&salt, password) == digest
}

fn digest_with_salt(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_verify_password_against_its_own_hash() {
        let stored = hash_password("hunter2");
        assert!(verify_password(&stored, "hunter2"));
    }

    #[test]
    fn should_reject_wrong_password() {
        let stored = hash_password("hunter2");
        assert!(!verify_password(&stored, "hunter3"));
    }

    #[test]
    fn should_salt_each_hash_independently() {
        let first = hash_password("same-password");
        let second = hash_password("same-password");
        assert_ne!(first, second);
        assert!(verify_password(&first, "same-password"));
        assert!(verify_password(&second, "same-password"));
    }

    #[test]
    fn should_reject_malformed_stored_values() {
        assert!(!verify_password("", "anything"));
        assert!(!verify_password("plaintext-leftover", "plaintext-leftover"));
        assert!(!verify_password("md5$abc$def", "anything"));
        assert!(!verify_password("sha256$not-base64!$zzz", "anything"));
    }

    proptest! {
        #[test]
        fn hash_then_verify_round_trips(password in ".{0,64}") {
            let stored = hash_password(&password);
            prop_assert!(verify_password(&stored, &password));
        }
    }
}
