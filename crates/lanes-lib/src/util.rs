//! ID generation utilities.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

const MIN_HASH_LENGTH: usize = 3;
const MAX_HASH_LENGTH: usize = 8;
const FALLBACK_HASH_LENGTH: usize = 12;
const MAX_COLLISION_PROB: f64 = 0.25;

/// Generate a unique ID of the form `<prefix>-<hash>`.
///
/// Uses SHA256 hashing with base36 encoding. The hash length grows with
/// `existing_count`, and the `exists` closure checks for collisions.
pub fn generate_id<F>(
    prefix: &str,
    seed_text: &str,
    created_at: DateTime<Utc>,
    existing_count: usize,
    exists: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    let mut length = optimal_hash_length(existing_count);

    loop {
        for nonce in 0..10 {
            let seed = generate_id_seed(seed_text, created_at, nonce);
            let id = format!("{prefix}-{}", compute_id_hash(&seed, length));
            if !exists(&id) {
                return id;
            }
        }

        if length < MAX_HASH_LENGTH {
            length += 1;
        } else {
            // Fallback: use longer hash with increasing nonces
            let mut nonce = 10u32;
            loop {
                let seed = generate_id_seed(seed_text, created_at, nonce);
                let hash_str = compute_id_hash(&seed, FALLBACK_HASH_LENGTH);
                let id = format!("{prefix}-{hash_str}");
                if !exists(&id) {
                    return id;
                }
                nonce += 1;
                if nonce > 1000 {
                    let id = format!("{prefix}-{hash_str}{nonce}");
                    if !exists(&id) {
                        return id;
                    }
                }
            }
        }
    }
}

/// Compute the optimal hash length for a collection of the given size.
///
/// Birthday problem: P(collision) ≈ 1 - e^(-n²/2d).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn optimal_hash_length(existing_count: usize) -> usize {
    let n = existing_count as f64;

    for len in MIN_HASH_LENGTH..=MAX_HASH_LENGTH {
        let space = 36_f64.powi(len as i32);
        let prob = 1.0 - (-n * n / (2.0 * space)).exp();
        if prob < MAX_COLLISION_PROB {
            return len;
        }
    }
    MAX_HASH_LENGTH
}

fn generate_id_seed(seed_text: &str, created_at: DateTime<Utc>, nonce: u32) -> String {
    format!(
        "{}|{}|{}",
        seed_text,
        created_at.timestamp_nanos_opt().unwrap_or(0),
        nonce
    )
}

fn compute_id_hash(input: &str, length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();

    let mut num = 0u64;
    for &byte in result.iter().take(8) {
        num = (num << 8) | u64::from(byte);
    }

    let mut encoded = base36_encode(num);
    if encoded.len() < length {
        encoded = format!("{encoded:0>length$}");
    }
    encoded.chars().take(length).collect()
}

fn base36_encode(mut num: u64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if num == 0 {
        return "0".to_string();
    }
    let mut chars = Vec::new();
    while num > 0 {
        chars.push(ALPHABET[(num % 36) as usize] as char);
        num /= 36;
    }
    chars.into_iter().rev().collect()
}
