//! Word codec
//!
//! Protocol words are unsigned 16-bit values transmitted big-endian. The
//! two functions here are exact inverses of each other.

/// Split a word into its wire representation, high byte first.
pub const fn split_word(word: u16) -> [u8; 2] {
    word.to_be_bytes()
}

/// Reassemble a word from its wire bytes.
pub const fn join_word(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_word() {
        assert_eq!(split_word(0), [0, 0]);
        assert_eq!(split_word(1), [0, 1]);
        assert_eq!(split_word(255), [0, 255]);
        assert_eq!(split_word(256), [1, 0]);
        assert_eq!(split_word(300), [1, 44]);
        assert_eq!(split_word(0xFFCD), [0xFF, 0xCD]);
        assert_eq!(split_word(u16::MAX), [255, 255]);
    }

    #[test]
    fn test_join_word() {
        assert_eq!(join_word(0, 0), 0);
        assert_eq!(join_word(0, 42), 42);
        assert_eq!(join_word(1, 0), 256);
        assert_eq!(join_word(1, 44), 300);
        assert_eq!(join_word(255, 255), u16::MAX);
    }

    #[test]
    fn test_roundtrip_exhaustive() {
        for word in 0..=u16::MAX {
            let [high, low] = split_word(word);
            assert_eq!(join_word(high, low), word);
        }
    }

    proptest! {
        #[test]
        fn split_inverts_join(high in any::<u8>(), low in any::<u8>()) {
            prop_assert_eq!(split_word(join_word(high, low)), [high, low]);
        }
    }
}
