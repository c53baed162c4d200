use chrono::Utc;
use rand::Rng;

const ID_SUFFIX_LEN: usize = 8;

/// Generates a record identifier: the current Unix time in milliseconds,
/// base-36 encoded, followed by a short random base-36 suffix.
///
/// Uniqueness is probabilistic only; no collision check happens at insertion.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut id = to_base36(millis);

    let mut rng = rand::thread_rng();
    for _ in 0..ID_SUFFIX_LEN {
        let digit = rng.gen_range(0..36);
        id.push(base36_digit(digit));
    }
    id
}

/// Derives a URL-safe slug from a title.
///
/// Lowercases, strips every character that is not an ASCII word character,
/// whitespace, or hyphen, collapses runs of whitespace/underscore/hyphen
/// into a single hyphen, and trims hyphens from both ends. Idempotent:
/// applying it to its own output is a no-op.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut gap = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '_' || c == '-' {
            gap = true;
        }
        // Everything else is stripped outright.
    }

    slug
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(base36_digit((value % 36) as u32));
        value /= 36;
    }
    digits.iter().rev().collect()
}

fn base36_digit(d: u32) -> char {
    char::from_digit(d, 36).unwrap_or('0')
}
