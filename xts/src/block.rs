//! 16-byte block with a byte view and a two-lane `u64` view.

use cipher::{consts::U16, generic_array::GenericArray};
use memxor::{memxor, memxor3};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// XTS only works with 128-bit block ciphers.
pub const BLOCK_SIZE: usize = 16;

/// A 16-byte value, aligned for lane access.
///
/// Lanes are always read and written little-endian, so lane 0 holds bytes
/// `0..8` and lane 1 bytes `8..16` on every host.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[repr(C, align(16))]
pub(crate) struct Block16([u8; BLOCK_SIZE]);

impl Block16 {
    #[inline(always)]
    pub(crate) const fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub(crate) fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8; BLOCK_SIZE] {
        &mut self.0
    }

    /// View as the array type the block cipher traits operate on.
    #[inline(always)]
    pub(crate) fn as_generic_mut(&mut self) -> &mut GenericArray<u8, U16> {
        GenericArray::from_mut_slice(&mut self.0)
    }

    #[inline(always)]
    pub(crate) fn lanes(&self) -> [u64; 2] {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&self.0[..8]);
        hi.copy_from_slice(&self.0[8..]);
        [u64::from_le_bytes(lo), u64::from_le_bytes(hi)]
    }

    #[inline(always)]
    pub(crate) fn set_lanes(&mut self, [lo, hi]: [u64; 2]) {
        self.0[..8].copy_from_slice(&lo.to_le_bytes());
        self.0[8..].copy_from_slice(&hi.to_le_bytes());
    }

    /// `self ^= other`
    #[inline(always)]
    pub(crate) fn xor_in(&mut self, other: &Self) {
        memxor(&mut self.0, &other.0);
    }

    /// `self = src ^ other`, where `src` is exactly one block.
    #[inline(always)]
    pub(crate) fn load_xor(&mut self, src: &[u8], other: &Self) {
        memxor3(&mut self.0, src, &other.0);
    }

    /// Overwrite intermediate material before the block goes out of scope.
    #[inline(always)]
    pub(crate) fn wipe(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}
