//! Order number generation
//!
//! Numbers look like `CMD-20260823-7KQ2ZD`: a fixed prefix, the creation
//! date, and six random characters from an uppercase alphanumeric
//! alphabet. The suffix space (36^6) makes same-day collisions negligible;
//! the order store still enforces uniqueness as a backstop.

use chrono::{DateTime, Utc};
use rand::Rng;

const PREFIX: &str = "CMD";
const SUFFIX_LEN: usize = 6;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate an order number for an order created at `now`
pub(crate) fn generate(now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}-{}-{}", PREFIX, now.format("%Y%m%d"), suffix)
}
