//! Tweak derivation and the multiplication by α between blocks.

use crate::block::{Block16, BLOCK_SIZE};
use cipher::{consts::U16, BlockEncrypt};

/// Low byte of the reduction polynomial x^128 + x^7 + x^2 + x + 1.
const GF_128_FDBK: u64 = 0x87;

/// Encode a data-unit sequence number as an IEEE 1619 tweak
/// (128-bit little-endian).
#[inline]
pub fn get_tweak_default(sector_index: u128) -> [u8; BLOCK_SIZE] {
    sector_index.to_le_bytes()
}

/// `T_0 = E_K2(tweak)`
#[inline]
pub(crate) fn initial<T>(tweak_cipher: &T, tweak: &[u8; BLOCK_SIZE]) -> Block16
where
    T: BlockEncrypt<BlockSize = U16>,
{
    let mut t = Block16::from_bytes(*tweak);
    tweak_cipher.encrypt_block(t.as_generic_mut());
    t
}

/// `T = α·T` in GF(2^128), without branching on the value of `T`.
#[inline]
pub(crate) fn advance(t: &mut Block16) {
    let [lo, hi] = t.lanes();
    let carry = hi >> 63;
    let lo_carry = lo >> 63;
    let lo = (lo << 1) ^ (GF_128_FDBK & carry.wrapping_neg());
    let hi = (hi << 1) | lo_carry;
    t.set_lanes([lo, hi]);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bytewise reference: shift the little-endian integer left by one bit.
    fn advance_bytewise(bytes: &mut [u8; BLOCK_SIZE]) {
        let mut carry = 0u8;
        for b in bytes.iter_mut() {
            let next = *b >> 7;
            *b = (*b << 1) | carry;
            carry = next;
        }
        if carry != 0 {
            bytes[0] ^= 0x87;
        }
    }

    fn advanced(bytes: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut t = Block16::from_bytes(bytes);
        advance(&mut t);
        *t.as_bytes()
    }

    #[test]
    fn top_bit_wraps_to_reduction_constant() {
        let mut t = [0u8; BLOCK_SIZE];
        t[15] = 0x80;
        let mut expected = [0u8; BLOCK_SIZE];
        expected[0] = 0x87;
        assert_eq!(advanced(t), expected);
    }

    #[test]
    fn carry_crosses_lane_boundary() {
        let mut t = [0u8; BLOCK_SIZE];
        t[7] = 0x80;
        let mut expected = [0u8; BLOCK_SIZE];
        expected[8] = 0x01;
        assert_eq!(advanced(t), expected);
    }

    #[test]
    fn one_doubles() {
        let mut t = [0u8; BLOCK_SIZE];
        t[0] = 1;
        let mut expected = [0u8; BLOCK_SIZE];
        expected[0] = 2;
        assert_eq!(advanced(t), expected);
    }

    #[test]
    fn all_ones() {
        let mut expected = [0xffu8; BLOCK_SIZE];
        expected[0] = 0xfe ^ 0x87;
        assert_eq!(advanced([0xff; BLOCK_SIZE]), expected);
    }

    #[test]
    fn matches_bytewise_reference() {
        let mut state = 0x9e37_79b9_7f4a_7c15u64;
        for _ in 0..1000 {
            let mut bytes = [0u8; BLOCK_SIZE];
            for chunk in bytes.chunks_mut(8) {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                chunk.copy_from_slice(&state.to_le_bytes());
            }
            for top in [0x00, 0x80] {
                bytes[15] = (bytes[15] & 0x7f) | top;
                let mut reference = bytes;
                advance_bytewise(&mut reference);
                assert_eq!(advanced(bytes), reference);
            }
        }
    }

    #[test]
    fn default_tweak_is_little_endian() {
        let t = get_tweak_default(0x12_3456_789a);
        assert_eq!(&t[..5], &[0x9a, 0x78, 0x56, 0x34, 0x12]);
        assert!(t[5..].iter().all(|&b| b == 0));
    }
}
