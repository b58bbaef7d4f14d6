//! CRC32 integrity checks over frame payloads.
//!
//! Both ends of a link must agree on the variant. The one used here is
//! CRC-32/ISO-HDLC (the IEEE 802.3 / zlib checksum): reflected polynomial
//! `0xEDB88320`, initial value and final XOR `0xFFFFFFFF`.

/// Standard check value: CRC32 of the ASCII bytes `"123456789"`.
pub const CHECK_VALUE: u32 = 0xCBF4_3926;

/// Compute the CRC32 of `bytes`.
pub fn compute(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Returns true if `bytes` hashes to `expected`.
pub fn verify(bytes: &[u8], expected: u32) -> bool {
    compute(bytes) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_value_matches_pinned_variant() {
        assert_eq!(compute(b"123456789"), CHECK_VALUE);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(compute(b""), 0);
    }

    #[test]
    fn verify_detects_change() {
        let crc = compute(b"AB1CD");
        assert!(verify(b"AB1CD", crc));
        assert!(!verify(b"AB1CE", crc));
    }
}
