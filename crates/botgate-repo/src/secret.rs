//! Manifest secrets: AES-256-CBC with PKCS#7 padding.
//!
//! The secret is a base64 encoded 256-bit key. Encrypted values are stored as
//! `base64(ciphertext)!base64(iv)`.

use aes::cipher::{BlockDecryptMut, KeyIvInit, block_padding::Pkcs7};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const KEY_SIZE: usize = 32;
const IV_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SecretError {
    #[error("secret is not a base64 encoded 256-bit key")]
    InvalidKey,

    #[error("value is not in `ciphertext!iv` form")]
    InvalidValue,

    #[error("secret does not unlock the value")]
    Mismatch,
}

/// A decoded manifest key.
pub struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    pub fn parse(secret: &str) -> Result<Self, SecretError> {
        let bytes = STANDARD
            .decode(secret.trim())
            .map_err(|_| SecretError::InvalidKey)?;
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| SecretError::InvalidKey)?;
        Ok(Self(key))
    }

    pub fn decrypt(&self, value: &str) -> Result<String, SecretError> {
        let (cipher_b64, iv_b64) = value.split_once('!').ok_or(SecretError::InvalidValue)?;
        let ciphertext = STANDARD
            .decode(cipher_b64)
            .map_err(|_| SecretError::InvalidValue)?;
        let iv = STANDARD.decode(iv_b64).map_err(|_| SecretError::InvalidValue)?;
        if iv.len() != IV_SIZE {
            return Err(SecretError::InvalidValue);
        }

        let decryptor =
            Aes256CbcDec::new_from_slices(&self.0, &iv).map_err(|_| SecretError::InvalidValue)?;
        let plain = decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| SecretError::Mismatch)?;
        String::from_utf8(plain).map_err(|_| SecretError::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "07OTex5hk15MsGHgKKtaHiqya0ZfCXvsNBjosONZoXM=";
    const WRONG_SECRET: &str = "XKuCo+IWcidsdWzxMnrXi+S8DaMRGYiK0KBxXHoz6CI=";
    const PADLOCK: &str =
        "tcWjtqmkJC5lW+BpGDP+kJ4I2tEwIP/t5UaE+2TT4a3GoNvC+9kOPhY2+EyuD45C!AAECAwQFBgcICQoLDA0ODw==";
    const NLU_KEY: &str = "napOeztCpl/A1vl0uP5JbcuAATN2dsylD/yTXssHegE=!EBESExQVFhcYGRobHB0eHw==";

    #[test]
    fn decrypts_with_matching_key() {
        let key = SecretKey::parse(SECRET).expect("key");
        assert_eq!(
            key.decrypt(PADLOCK).expect("padlock"),
            "3f2c9a1e-6b7d-4e58-9c0a-2d4b8e1f7a65"
        );
        assert_eq!(key.decrypt(NLU_KEY).expect("nlu key"), "nlu-subscription-key");
    }

    #[test]
    fn wrong_key_is_a_mismatch() {
        let key = SecretKey::parse(WRONG_SECRET).expect("key");
        assert_eq!(key.decrypt(PADLOCK), Err(SecretError::Mismatch));
    }

    #[test]
    fn keys_must_be_base64_and_256_bits() {
        assert!(matches!(SecretKey::parse("s3cr3t"), Err(SecretError::InvalidKey)));
        assert!(matches!(SecretKey::parse("c2hvcnQ="), Err(SecretError::InvalidKey)));
    }

    #[test]
    fn values_need_ciphertext_and_iv() {
        let key = SecretKey::parse(SECRET).expect("key");
        assert_eq!(key.decrypt("no-separator"), Err(SecretError::InvalidValue));
        assert_eq!(key.decrypt("AAAA!AAAA"), Err(SecretError::InvalidValue));
        assert_eq!(key.decrypt("%%%!AAECAwQFBgcICQoLDA0ODw=="), Err(SecretError::InvalidValue));
    }
}
