//! ECDSA P-256 signatures over digests
//!
//! The digest bytes are signed as a prehash (they are not hashed again), and
//! nonces follow RFC 6979, so identical inputs always give identical
//! signatures. The transport form of a signature is `"<r>-<s>"` with both
//! components in base-10.

use crate::core::Digest;
use crate::error::{Result, WalletError};
use crate::utils::{decimal_decode, decimal_encode};
use crate::wallet::{parse_private_key, parse_public_key, KeyPair};
use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p256::ecdsa::Signature as EcdsaSignature;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const SCALAR_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(EcdsaSignature);

/// Sign `digest` with `private_key`.
///
/// When `public_key` is non-empty it must be the point belonging to
/// `private_key`; a mismatch is reported as `InvalidKey` rather than
/// producing a signature that will not verify under it.
pub fn sign(digest: &Digest, private_key: &str, public_key: &str) -> Result<Signature> {
    let signing_key = parse_private_key(private_key)?;
    if !public_key.is_empty() {
        let claimed = parse_public_key(public_key)?;
        if claimed.to_encoded_point(false) != signing_key.verifying_key().to_encoded_point(false)
        {
            return Err(WalletError::InvalidKey(
                "public key does not belong to private key".to_string(),
            ));
        }
    }
    let signature: EcdsaSignature = signing_key
        .sign_prehash(digest.as_bytes())
        .map_err(|e| WalletError::Crypto(format!("Failed to sign digest: {e}")))?;
    Ok(Signature(signature))
}

/// Sign with both halves of a caller-held key pair; both must be present.
pub fn sign_with(digest: &Digest, key_pair: &KeyPair) -> Result<Signature> {
    if key_pair.get_public_key().is_empty() {
        return Err(WalletError::InvalidKey("public key is empty".to_string()));
    }
    sign(digest, key_pair.get_private_key(), key_pair.get_public_key())
}

/// Check `signature` over `digest` under `public_key`. Malformed keys yield
/// `false`.
pub fn verify(digest: &Digest, public_key: &str, signature: &Signature) -> bool {
    match parse_public_key(public_key) {
        Ok(verifying_key) => verifying_key
            .verify_prehash(digest.as_bytes(), &signature.0)
            .is_ok(),
        Err(_) => false,
    }
}

/// [`verify`] over the transport encodings of digest and signature.
pub fn verify_encoded(digest: &str, public_key: &str, signature: &str) -> bool {
    match (digest.parse::<Digest>(), signature.parse::<Signature>()) {
        (Ok(digest), Ok(signature)) => verify(&digest, public_key, &signature),
        _ => false,
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.to_bytes();
        let (r, s) = bytes.split_at(SCALAR_LEN);
        write!(f, "{}-{}", decimal_encode(r), decimal_encode(s))
    }
}

impl FromStr for Signature {
    type Err = WalletError;

    fn from_str(text: &str) -> Result<Self> {
        let (r, s) = text
            .split_once('-')
            .ok_or_else(|| WalletError::Encoding("Signature must be <r>-<s>".to_string()))?;
        let r = decimal_decode::<SCALAR_LEN>(r)?;
        let s = decimal_decode::<SCALAR_LEN>(s)?;
        let mut bytes = [0u8; 2 * SCALAR_LEN];
        bytes[..SCALAR_LEN].copy_from_slice(&r);
        bytes[SCALAR_LEN..].copy_from_slice(&s);
        let signature = EcdsaSignature::from_slice(&bytes)
            .map_err(|_| WalletError::Encoding("Signature scalars out of range".to_string()))?;
        Ok(Signature(signature))
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash;

    #[test]
    fn test_sign_then_verify() {
        let pair = KeyPair::generate().unwrap();
        let digest = hash("PUB1PUB2101000");
        let signature = sign(&digest, pair.get_private_key(), pair.get_public_key()).unwrap();
        assert!(verify(&digest, pair.get_public_key(), &signature));
    }

    #[test]
    fn test_signatures_are_deterministic() {
        let pair = KeyPair::generate().unwrap();
        let digest = hash("PUB12000");
        let a = sign_with(&digest, &pair).unwrap();
        let b = sign_with(&digest, &pair).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_verify_rejects_other_key() {
        let signer = KeyPair::generate().unwrap();
        let other = KeyPair::generate().unwrap();
        let digest = hash("message");
        let signature = sign_with(&digest, &signer).unwrap();
        assert!(!verify(&digest, other.get_public_key(), &signature));
    }

    #[test]
    fn test_verify_rejects_mutated_digest() {
        let pair = KeyPair::generate().unwrap();
        let digest = hash("message");
        let signature = sign_with(&digest, &pair).unwrap();

        let mut bytes = *digest.as_bytes();
        bytes[0] ^= 0x01;
        assert!(!verify(&Digest::from_bytes(bytes), pair.get_public_key(), &signature));
    }

    #[test]
    fn test_verify_rejects_malformed_public_key() {
        let pair = KeyPair::generate().unwrap();
        let digest = hash("message");
        let signature = sign_with(&digest, &pair).unwrap();
        assert!(!verify(&digest, "", &signature));
        assert!(!verify(&digest, "PUB1", &signature));
    }

    #[test]
    fn test_sign_rejects_bad_private_key() {
        let digest = hash("message");
        for key in ["", "abc", "0", "-5"] {
            assert!(
                matches!(sign(&digest, key, ""), Err(WalletError::InvalidKey(_))),
                "key {key:?}"
            );
        }
    }

    #[test]
    fn test_sign_rejects_mismatched_public_key() {
        let pair = KeyPair::generate().unwrap();
        let other = KeyPair::generate().unwrap();
        let digest = hash("message");
        let result = sign(&digest, pair.get_private_key(), other.get_public_key());
        assert!(matches!(result, Err(WalletError::InvalidKey(_))));
    }

    #[test]
    fn test_sign_with_requires_public_key() {
        let pair = KeyPair::generate().unwrap();
        let partial = KeyPair::from_parts(pair.get_private_key(), "");
        let result = sign_with(&hash("message"), &partial);
        assert!(matches!(result, Err(WalletError::InvalidKey(_))));
    }

    #[test]
    fn test_signature_text_form() {
        let pair = KeyPair::generate().unwrap();
        let digest = hash("message");
        let signature = sign_with(&digest, &pair).unwrap();
        let text = signature.to_string();

        let (r, s) = text.split_once('-').unwrap();
        assert!(r.bytes().all(|b| b.is_ascii_digit()));
        assert!(s.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(text.parse::<Signature>().unwrap(), signature);
        assert!(verify_encoded(&digest.to_string(), pair.get_public_key(), &text));
    }

    #[test]
    fn test_signature_parse_rejects_garbage() {
        assert!("".parse::<Signature>().is_err());
        assert!("123".parse::<Signature>().is_err());
        assert!("0-0".parse::<Signature>().is_err());
        assert!("1-2-3".parse::<Signature>().is_err());
        assert!("a-b".parse::<Signature>().is_err());
        assert!(!verify_encoded("not a digest", "PUB1", "1-2"));
    }
}
