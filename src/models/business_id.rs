//! Human-facing business identifiers: `PREFIX-<base36 timestamp>-<random>`.
//!
//! The timestamp component keeps ids roughly sortable by creation time; the
//! random suffix disambiguates ids minted in the same millisecond. Callers
//! still verify uniqueness against the store before inserting.

use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Attempts a caller makes at generate-then-uniqueness-check before giving up.
pub const MAX_ID_ATTEMPTS: u32 = 10;

pub fn customer_id() -> String {
    generate("CUST", 4)
}

pub fn case_id() -> String {
    generate("CASE", 4)
}

pub fn engagement_id() -> String {
    generate("ENG", 4)
}

pub fn document_id() -> String {
    generate("DOC", 6)
}

fn generate(prefix: &str, random_len: usize) -> String {
    let millis = chrono::Utc::now().timestamp_millis().unsigned_abs();
    let mut rng = rand::thread_rng();
    let random: String = (0..random_len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect();
    format!("{}-{}-{}", prefix, base36(millis), random)
}

fn base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // The alphabet is ASCII, so the bytes are valid UTF-8.
    String::from_utf8(digits).unwrap_or_default()
}
