//! XOR of byte regions.
//!
//! Both routines touch every byte of their operands exactly once and never
//! branch on the data, so the amount of work depends only on the length.
//!
//! Aliasing is expressed through the borrow checker rather than by pointer
//! equality: the in-place form of `memxor3(dst, dst, b)` is simply
//! [`memxor`]`(dst, b)`.
//!
//! # Example
//! ```
//! use memxor::{memxor, memxor3};
//!
//! let a = [0x0f; 20];
//! let b = [0xff; 20];
//!
//! let mut c = [0u8; 20];
//! memxor3(&mut c, &a, &b);
//! assert_eq!(c, [0xf0; 20]);
//!
//! memxor(&mut c, &b);
//! assert_eq!(c, a);
//! ```

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

/// Width of the word used for the bulk of the work.
const WORD: usize = core::mem::size_of::<u64>();

/// XOR `src` into `dst`: `dst[i] ^= src[i]`.
///
/// Zero-length operands are a no-op.
///
/// # Panics
/// If `dst` and `src` have different lengths.
#[inline]
pub fn memxor(dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len(), "memxor operands differ in length");

    let mut dst_words = dst.chunks_exact_mut(WORD);
    let mut src_words = src.chunks_exact(WORD);
    for (d, s) in (&mut dst_words).zip(&mut src_words) {
        let w = load(d) ^ load(s);
        d.copy_from_slice(&w.to_ne_bytes());
    }

    let tail = dst_words.into_remainder();
    for (d, s) in tail.iter_mut().zip(src_words.remainder()) {
        *d ^= *s;
    }
}

/// XOR two regions into a third: `dst[i] = a[i] ^ b[i]`.
///
/// When the destination is one of the inputs use [`memxor`] instead.
///
/// # Panics
/// If the three operands do not all have the same length.
#[inline]
pub fn memxor3(dst: &mut [u8], a: &[u8], b: &[u8]) {
    assert_eq!(dst.len(), a.len(), "memxor3 operands differ in length");
    assert_eq!(dst.len(), b.len(), "memxor3 operands differ in length");

    let mut dst_words = dst.chunks_exact_mut(WORD);
    let mut a_words = a.chunks_exact(WORD);
    let mut b_words = b.chunks_exact(WORD);
    for ((d, x), y) in (&mut dst_words).zip(&mut a_words).zip(&mut b_words) {
        let w = load(x) ^ load(y);
        d.copy_from_slice(&w.to_ne_bytes());
    }

    let tail = dst_words.into_remainder();
    for ((d, x), y) in tail
        .iter_mut()
        .zip(a_words.remainder())
        .zip(b_words.remainder())
    {
        *d = *x ^ *y;
    }
}

#[inline(always)]
fn load(bytes: &[u8]) -> u64 {
    let mut w = [0u8; WORD];
    w.copy_from_slice(bytes);
    u64::from_ne_bytes(w)
}
