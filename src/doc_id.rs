use rand::Rng;

/// Validate that a string is a well-formed document identifier:
/// 24 hex chars, case-insensitive, the format the store generates.
pub fn is_valid_doc_id(id: &str) -> bool {
    id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
}

/// Generate a fresh document identifier: 12 random bytes, hex-encoded.
pub fn new_doc_id() -> String {
    let bytes: [u8; 12] = rand::thread_rng().gen();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_doc_id() {
        // 24 hex chars
        assert!(is_valid_doc_id("65b2f0a1c3d4e5f60718293a"));
        assert!(is_valid_doc_id("000000000000000000000000"));
    }

    #[test]
    fn test_invalid_doc_id() {
        assert!(!is_valid_doc_id("tooshort"));
        // 24 chars but non-hex
        assert!(!is_valid_doc_id("zzzzzzzzzzzzzzzzzzzzzzzz"));
        // 23 hex chars (too short by one)
        assert!(!is_valid_doc_id("65b2f0a1c3d4e5f60718293"));
        assert!(!is_valid_doc_id(""));
    }

    #[test]
    fn test_generated_ids_are_valid_and_unique() {
        let a = new_doc_id();
        let b = new_doc_id();
        assert!(is_valid_doc_id(&a));
        assert!(is_valid_doc_id(&b));
        assert_ne!(a, b);
    }
}
