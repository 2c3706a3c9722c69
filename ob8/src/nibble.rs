//! Recombination of nibble-split data bytes
//!
//! Sysex data bytes have to keep their top bit clear, so the OB-8 sends every 8-bit value as two
//! consecutive bytes: first the low nibble, then the high nibble.

/// Combine a low and high nibble into one byte
///
/// Only the low 4 bits of `msb` are used. `lsb` is taken as-is, so any stray upper bits it
/// carries end up in the result.
pub const fn combine(lsb: u8, msb: u8) -> u8 {
    lsb | ((msb & 0xF) << 4)
}

/// Iterate over a slice of transmitted nibble pairs, yielding the combined bytes
///
/// A trailing byte without a partner is ignored.
pub fn combine_pairs(bytes: &[u8]) -> impl Iterator<Item = u8> + '_ {
    bytes.chunks_exact(2).map(|pair| combine(pair[0], pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibbles() {
        assert_eq!(combine(0x0A, 0x03), 0x3A);
        assert_eq!(combine(0x00, 0x0F), 0xF0);
        assert_eq!(combine(0x0F, 0x0F), 0xFF);
    }

    #[test]
    fn msb_is_masked() {
        assert_eq!(combine(0x01, 0xF2), 0x21);
    }

    #[test]
    fn lsb_is_not_masked() {
        assert_eq!(combine(0xFF, 0x00), 0xFF);
        assert_eq!(combine(0x30, 0x01), 0x30);
    }

    #[test]
    fn pairs() {
        let combined: Vec<u8> = combine_pairs(&[0x0A, 0x03, 0x01, 0x00, 0x07]).collect();
        assert_eq!(combined, [0x3A, 0x01]);
    }
}
