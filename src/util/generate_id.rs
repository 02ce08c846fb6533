use sha2::{Digest, Sha256};

/// Derive a stable 20-character base62 id for a catalog entry that ships
/// without one. Hashing title + release date keeps ids identical across
/// reloads of the same catalog file.
pub fn generate_id(title: &str, release_date: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(b"\0");
    hasher.update(release_date.as_bytes());
    let hash = hasher.finalize();

    let mut num = [0u8; 16];
    num.copy_from_slice(&hash[..16]);

    // 119 bits fit into 20 base62 characters.
    let mut value = u128::from_be_bytes(num);
    value >>= 9;

    let mut id = String::with_capacity(20);
    for _ in 0..20 {
        let remainder = (value % 62) as u8;
        value /= 62;

        let c = if remainder < 10 {
            (remainder + 48) as char // 0-9
        } else if remainder < 36 {
            (remainder + 65 - 10) as char // A-Z
        } else {
            (remainder + 97 - 36) as char // a-z
        };
        id.push(c);
    }

    id
}
