use ring::digest::{Context, SHA256};
use ring::rand::{SecureRandom, SystemRandom};

use crate::error::{Result, WalletError};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn current_timestamp() -> Result<i64> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| WalletError::Crypto(format!("System time error: {e}")))?
        .as_millis();

    // Ensure the timestamp fits in i64
    if duration > i64::MAX as u128 {
        return Err(WalletError::Crypto("Timestamp overflow".to_string()));
    }

    Ok(duration as i64)
}

pub fn sha256_digest(data: &[u8]) -> [u8; 32] {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    let mut out = [0u8; 32];
    out.copy_from_slice(digest.as_ref());
    out
}

/// Fill `buf` from the operating system CSPRNG.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    let rng = SystemRandom::new();
    rng.fill(buf)
        .map_err(|_| WalletError::Crypto("Entropy source unavailable".to_string()))
}
