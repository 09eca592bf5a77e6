use crate::error::{Result, WalletError};
use crate::utils::{base64_decode, base64_encode, decimal_decode, decimal_encode, fill_random};
use p256::ecdsa::{SigningKey, VerifyingKey};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// Redraws before giving up on the entropy source; a uniform 32-byte draw
// lands outside the P-256 scalar range with probability about 2^-32.
const MAX_KEYGEN_ATTEMPTS: usize = 8;

/// A caller-held P-256 key pair in its transport encoding.
///
/// The private key is the secret scalar in base-10 digits; the public key is
/// standard base64 of the uncompressed SEC1 point. The private key string is
/// wiped when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    private_key: String,
    public_key: String,
}

impl KeyPair {
    /// Generate a fresh key pair from the operating system CSPRNG.
    pub fn generate() -> Result<KeyPair> {
        for _ in 0..MAX_KEYGEN_ATTEMPTS {
            let mut scalar = Zeroizing::new([0u8; 32]);
            fill_random(&mut scalar[..])?;
            if let Ok(signing_key) = SigningKey::from_slice(&scalar[..]) {
                log::debug!("Generated new P-256 key pair");
                return Ok(Self::from_signing_key(&signing_key));
            }
        }
        Err(WalletError::Crypto(
            "Entropy source produced no valid scalar".to_string(),
        ))
    }

    /// Wrap caller-held key strings. Nothing is validated until signing.
    pub fn from_parts(private_key: impl Into<String>, public_key: impl Into<String>) -> KeyPair {
        KeyPair {
            private_key: private_key.into(),
            public_key: public_key.into(),
        }
    }

    /// Rebuild a key pair from its private key alone.
    pub fn from_private_key(private_key: &str) -> Result<KeyPair> {
        let signing_key = parse_private_key(private_key)?;
        Ok(Self::from_signing_key(&signing_key))
    }

    /// Derive the encoded public key for an encoded private key.
    pub fn derive_public_key(private_key: &str) -> Result<String> {
        let signing_key = parse_private_key(private_key)?;
        Ok(encode_public_key(signing_key.verifying_key()))
    }

    fn from_signing_key(signing_key: &SigningKey) -> KeyPair {
        let mut scalar = Zeroizing::new([0u8; 32]);
        scalar.copy_from_slice(&signing_key.to_bytes());
        KeyPair {
            private_key: decimal_encode(&scalar[..]),
            public_key: encode_public_key(signing_key.verifying_key()),
        }
    }

    pub fn get_private_key(&self) -> &str {
        self.private_key.as_str()
    }

    pub fn get_public_key(&self) -> &str {
        self.public_key.as_str()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

pub fn encode_public_key(verifying_key: &VerifyingKey) -> String {
    base64_encode(verifying_key.to_encoded_point(false).as_bytes())
}

/// Parse a base-10 private scalar into a signing key.
pub fn parse_private_key(private_key: &str) -> Result<SigningKey> {
    if private_key.is_empty() {
        return Err(WalletError::InvalidKey("private key is empty".to_string()));
    }
    let scalar = Zeroizing::new(
        decimal_decode::<32>(private_key)
            .map_err(|e| WalletError::InvalidKey(format!("malformed private key: {e}")))?,
    );
    SigningKey::from_slice(&scalar[..]).map_err(|_| {
        WalletError::InvalidKey("private key is not a valid P-256 scalar".to_string())
    })
}

/// Parse a base64 SEC1 point into a verifying key.
pub fn parse_public_key(public_key: &str) -> Result<VerifyingKey> {
    if public_key.is_empty() {
        return Err(WalletError::InvalidKey("public key is empty".to_string()));
    }
    let point = base64_decode(public_key)
        .map_err(|e| WalletError::InvalidKey(format!("malformed public key: {e}")))?;
    VerifyingKey::from_sec1_bytes(&point)
        .map_err(|_| WalletError::InvalidKey("public key is not a P-256 point".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_distinct_pairs() {
        let a = KeyPair::generate().unwrap();
        let b = KeyPair::generate().unwrap();
        assert_ne!(a.get_private_key(), b.get_private_key());
        assert_ne!(a.get_public_key(), b.get_public_key());
    }

    #[test]
    fn test_public_key_is_uncompressed_sec1() {
        let pair = KeyPair::generate().unwrap();
        let point = base64_decode(pair.get_public_key()).unwrap();
        assert_eq!(point.len(), 65);
        assert_eq!(point[0], 0x04);
        assert!(pair.get_private_key().bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_public_key_derivable_from_private_key() {
        let pair = KeyPair::generate().unwrap();
        let derived = KeyPair::derive_public_key(pair.get_private_key()).unwrap();
        assert_eq!(derived, pair.get_public_key());

        let rebuilt = KeyPair::from_private_key(pair.get_private_key()).unwrap();
        assert_eq!(rebuilt.get_public_key(), pair.get_public_key());
    }

    #[test]
    fn test_small_scalar_round_trips() {
        // d = 1 gives the generator point
        let pair = KeyPair::from_private_key("1").unwrap();
        let point = base64_decode(pair.get_public_key()).unwrap();
        assert_eq!(
            data_encoding::HEXLOWER.encode(&point[1..33]),
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        );
        assert_eq!(pair.get_private_key(), "1");
    }

    #[test]
    fn test_parse_private_key_rejects_bad_input() {
        assert!(matches!(
            parse_private_key(""),
            Err(WalletError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_private_key("0"),
            Err(WalletError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_private_key("not-a-number"),
            Err(WalletError::InvalidKey(_))
        ));
        // The curve order n itself is out of range
        assert!(matches!(
            parse_private_key(
                "115792089210356248762697446949407573529996955224135760342422259061068512044369"
            ),
            Err(WalletError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_parse_public_key_rejects_bad_input() {
        assert!(parse_public_key("").is_err());
        assert!(parse_public_key("PUB1").is_err());
        assert!(parse_public_key(&base64_encode(&[4u8; 65])).is_err());
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let pair = KeyPair::from_parts("12345", "PUB");
        let shown = format!("{pair:?}");
        assert!(!shown.contains("12345"));
        assert!(shown.contains("PUB"));
    }
}
