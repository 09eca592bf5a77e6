// Text encodings used on the wire: standard base64 for keys and digests,
// base-10 integers for the private scalar and signature components.
use crate::error::{Result, WalletError};
use data_encoding::BASE64;
use num_bigint::BigUint;

pub fn base64_encode(data: &[u8]) -> String {
    BASE64.encode(data)
}

pub fn base64_decode(data: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(data.as_bytes())
        .map_err(|e| WalletError::Encoding(format!("Invalid base64 encoding: {e}")))
}

/// Render big-endian bytes as an unsigned base-10 integer.
pub fn decimal_encode(bytes: &[u8]) -> String {
    BigUint::from_bytes_be(bytes).to_str_radix(10)
}

/// Parse an unsigned base-10 integer into exactly `N` big-endian bytes.
///
/// Values wider than `N` bytes are rejected; narrower values are
/// left-padded with zeros.
pub fn decimal_decode<const N: usize>(text: &str) -> Result<[u8; N]> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WalletError::Encoding(format!(
            "Not an unsigned decimal integer: {text:?}"
        )));
    }
    let value = BigUint::parse_bytes(text.as_bytes(), 10)
        .ok_or_else(|| WalletError::Encoding(format!("Invalid decimal integer: {text:?}")))?;
    let bytes = value.to_bytes_be();
    if bytes.len() > N {
        return Err(WalletError::Encoding(format!(
            "Decimal integer does not fit in {N} bytes"
        )));
    }
    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}
