//! Decryption collaborator.
//!
//! Credential secrets are stored as sealed tokens:
//!
//! ```text
//! base64( salt[16] || nonce[12] || ChaCha20-Poly1305(ciphertext || tag) )
//! ```
//!
//! The key is derived from the passphrase with Argon2id and the token's salt.
//! Authenticated encryption means a wrong passphrase or a corrupted record is
//! rejected instead of decrypting to garbage.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::Engine;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use zeroize::Zeroizing;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Failure of the decryption collaborator.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The token is not valid base64 or is too short to hold salt, nonce and tag.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Authentication failed: wrong passphrase or corrupted ciphertext.
    #[error("authentication failed")]
    Rejected,

    /// Decrypted bytes are not UTF-8.
    #[error("plaintext is not valid UTF-8")]
    Encoding,

    /// Key derivation failed.
    #[error("key derivation failed: {0}")]
    Kdf(String),
}

/// Decrypts one ciphertext field of the credential file.
pub trait Cipher {
    /// Returns the plaintext secret for a sealed token.
    ///
    /// # Errors
    ///
    /// Returns a [`CipherError`] when the token cannot be authenticated.
    fn decrypt(&self, token: &str) -> Result<Zeroizing<String>, CipherError>;
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory cost in KiB.
    pub m_cost: u32,
    /// Iterations.
    pub t_cost: u32,
    /// Parallelism.
    pub p_cost: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            m_cost: 19 * 1024,
            t_cost: 2,
            p_cost: 1,
        }
    }
}

/// Passphrase-based ChaCha20-Poly1305 cipher.
///
/// Derived keys are cached per salt, so a credential file sealed with a single
/// salt costs one key derivation no matter how many records it holds.
pub struct SealedCipher {
    passphrase: Zeroizing<String>,
    params: KdfParams,
    keys: RefCell<HashMap<[u8; SALT_LEN], Zeroizing<[u8; KEY_LEN]>>>,
}

impl SealedCipher {
    /// Creates a cipher with the default cost parameters.
    #[must_use]
    pub fn new(passphrase: &str) -> Self {
        Self::with_params(passphrase, KdfParams::default())
    }

    /// Creates a cipher with explicit cost parameters.
    #[must_use]
    pub fn with_params(passphrase: &str, params: KdfParams) -> Self {
        Self {
            passphrase: Zeroizing::new(passphrase.to_string()),
            params,
            keys: RefCell::new(HashMap::new()),
        }
    }

    /// Seals a secret into a token.
    ///
    /// Reusing the salt of an existing record keeps the file at a single key
    /// derivation; `None` draws a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Kdf`] if key derivation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use passvault::infrastructure::cipher::{Cipher, KdfParams, SealedCipher};
    ///
    /// let params = KdfParams { m_cost: 64, t_cost: 1, p_cost: 1 };
    /// let cipher = SealedCipher::with_params("correct horse", params);
    /// let token = cipher.seal("s3cret", None)?;
    /// assert_eq!(cipher.decrypt(&token)?.as_str(), "s3cret");
    /// # Ok::<(), passvault::infrastructure::cipher::CipherError>(())
    /// ```
    pub fn seal(&self, plaintext: &str, salt: Option<[u8; SALT_LEN]>) -> Result<String, CipherError> {
        let salt = salt.unwrap_or_else(|| {
            let mut fresh = [0u8; SALT_LEN];
            OsRng.fill_bytes(&mut fresh);
            fresh
        });
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);

        let key = self.key_for(&salt)?;
        let cipher = ChaCha20Poly1305::new(Key::from_slice(&key[..]));
        let sealed = cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|_| CipherError::Rejected)?;

        let mut raw = Vec::with_capacity(SALT_LEN + NONCE_LEN + sealed.len());
        raw.extend_from_slice(&salt);
        raw.extend_from_slice(&nonce);
        raw.extend_from_slice(&sealed);
        Ok(base64::engine::general_purpose::STANDARD.encode(raw))
    }

    /// Extracts the salt of a token, if it is well formed.
    #[must_use]
    pub fn salt_of(token: &str) -> Option<[u8; SALT_LEN]> {
        let raw = base64::engine::general_purpose::STANDARD
            .decode(token.trim())
            .ok()?;
        raw.get(..SALT_LEN)?.try_into().ok()
    }

    fn key_for(&self, salt: &[u8; SALT_LEN]) -> Result<Zeroizing<[u8; KEY_LEN]>, CipherError> {
        if let Some(key) = self.keys.borrow().get(salt) {
            return Ok(key.clone());
        }

        tracing::debug!("deriving key for new salt");
        let params = Params::new(
            self.params.m_cost,
            self.params.t_cost,
            self.params.p_cost,
            Some(KEY_LEN),
        )
        .map_err(|e| CipherError::Kdf(e.to_string()))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        argon2
            .hash_password_into(self.passphrase.as_bytes(), salt, &mut key[..])
            .map_err(|e| CipherError::Kdf(e.to_string()))?;

        self.keys.borrow_mut().insert(*salt, key.clone());
        Ok(key)
    }
}

impl Cipher for SealedCipher {
    fn decrypt(&self, token: &str) -> Result<Zeroizing<String>, CipherError> {
        let raw = base64::engine::general_purpose::STANDARD
            .decode(token.trim())
            .map_err(|e| CipherError::Malformed(e.to_string()))?;
        if raw.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
            return Err(CipherError::Malformed(format!("{} bytes", raw.len())));
        }

        let (salt, rest) = raw.split_at(SALT_LEN);
        let (nonce, sealed) = rest.split_at(NONCE_LEN);
        let salt: [u8; SALT_LEN] = salt
            .try_into()
            .map_err(|_| CipherError::Malformed("salt".to_string()))?;

        let key = self.key_for(&salt)?;
        let cipher = ChaCha20Poly1305::new(Key::from_slice(&key[..]));
        let plain = Zeroizing::new(
            cipher
                .decrypt(Nonce::from_slice(nonce), sealed)
                .map_err(|_| CipherError::Rejected)?,
        );

        let text = std::str::from_utf8(&plain).map_err(|_| CipherError::Encoding)?;
        Ok(Zeroizing::new(text.to_string()))
    }
}

impl std::fmt::Debug for SealedCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealedCipher")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: KdfParams = KdfParams {
        m_cost: 64,
        t_cost: 1,
        p_cost: 1,
    };

    #[test]
    fn wrong_passphrase_is_rejected() {
        let token = SealedCipher::with_params("right", FAST).seal("pw", None).unwrap();
        let err = SealedCipher::with_params("wrong", FAST).decrypt(&token).unwrap_err();
        assert!(matches!(err, CipherError::Rejected));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let cipher = SealedCipher::with_params("right", FAST);
        let token = cipher.seal("pw", None).unwrap();

        let mut raw = base64::engine::general_purpose::STANDARD.decode(&token).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let tampered = base64::engine::general_purpose::STANDARD.encode(raw);

        assert!(matches!(cipher.decrypt(&tampered), Err(CipherError::Rejected)));
    }

    #[test]
    fn short_or_garbage_tokens_are_malformed() {
        let cipher = SealedCipher::with_params("right", FAST);
        assert!(matches!(cipher.decrypt("AAAA"), Err(CipherError::Malformed(_))));
        assert!(matches!(cipher.decrypt("not base64!"), Err(CipherError::Malformed(_))));
        assert!(matches!(cipher.decrypt(""), Err(CipherError::Malformed(_))));
    }

    #[test]
    fn shared_salt_is_derived_once() {
        let cipher = SealedCipher::with_params("right", FAST);
        let first = cipher.seal("one", None).unwrap();
        let salt = SealedCipher::salt_of(&first);
        let second = cipher.seal("two", salt).unwrap();

        assert_eq!(SealedCipher::salt_of(&second), salt);
        assert_eq!(cipher.keys.borrow().len(), 1);
        assert_eq!(cipher.decrypt(&second).unwrap().as_str(), "two");
    }
}
