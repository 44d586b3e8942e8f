//! The byte-wide shift register driving CFB8.
//!
//! The register lives in a window twice the block size: the cipher input for
//! output byte `p` is `window[p..p + bs]`, and ciphertext bytes are appended
//! at `window[p + bs]`. Once the window is exhausted its upper half slides
//! down and becomes the new register.

use cipher::{
    consts::U32,
    inout::InOutBuf,
    typenum::{IsLessOrEqual, True, Unsigned},
    Block, BlockEncrypt,
};
use memxor::memxor3;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Largest block size, in bytes, of a cipher usable with CFB8.
pub const MAX_BLOCK_SIZE: usize = 32;

/// Encrypt `buf` in place, advancing `iv`.
#[inline]
pub fn encrypt<C>(cipher: &C, iv: &mut Block<C>, buf: &mut [u8])
where
    C: BlockEncrypt,
    C::BlockSize: IsLessOrEqual<U32, Output = True>,
{
    encrypt_inout(cipher, iv, buf.into());
}

/// Decrypt `buf` in place, advancing `iv`.
#[inline]
pub fn decrypt<C>(cipher: &C, iv: &mut Block<C>, buf: &mut [u8])
where
    C: BlockEncrypt,
    C::BlockSize: IsLessOrEqual<U32, Output = True>,
{
    decrypt_inout(cipher, iv, buf.into());
}

/// Encrypt the input half of `buf` into its output half.
///
/// One block encryption is performed per byte. On return `iv` holds the last
/// block-size bytes of the register, so a later call continues the stream
/// exactly where this one stopped. An empty buffer leaves `iv` untouched.
pub fn encrypt_inout<C>(cipher: &C, iv: &mut Block<C>, mut buf: InOutBuf<'_, '_, u8>)
where
    C: BlockEncrypt,
    C::BlockSize: IsLessOrEqual<U32, Output = True>,
{
    if buf.is_empty() {
        return;
    }

    let bs = C::BlockSize::USIZE;
    let mut window = [0u8; 2 * MAX_BLOCK_SIZE];
    let mut block = Block::<C>::default();
    window[..bs].copy_from_slice(&iv[..]);

    let mut pos = 0;
    for i in 0..buf.len() {
        if pos == bs {
            window.copy_within(bs..2 * bs, 0);
            pos = 0;
        }

        block.copy_from_slice(&window[pos..pos + bs]);
        cipher.encrypt_block(&mut block);

        let c = buf.get_in()[i] ^ block[0];
        buf.get_out()[i] = c;
        window[pos + bs] = c;
        pos += 1;
    }

    iv.copy_from_slice(&window[pos..pos + bs]);

    #[cfg(feature = "zeroize")]
    {
        window.zeroize();
        block[..].zeroize();
    }
}

/// Decrypt the input half of `buf` into its output half.
///
/// The ciphertext is known up front, so up to one block of keystream bytes
/// is produced before any output is written. One block encryption is
/// performed per byte. On return `iv` holds the last block-size ciphertext
/// bytes consumed.
pub fn decrypt_inout<C>(cipher: &C, iv: &mut Block<C>, mut buf: InOutBuf<'_, '_, u8>)
where
    C: BlockEncrypt,
    C::BlockSize: IsLessOrEqual<U32, Output = True>,
{
    if buf.is_empty() {
        return;
    }

    let bs = C::BlockSize::USIZE;
    let mut window = [0u8; 2 * MAX_BLOCK_SIZE];
    let mut keystream = [0u8; MAX_BLOCK_SIZE];
    let mut block = Block::<C>::default();
    window[..bs].copy_from_slice(&iv[..]);

    let len = buf.len();
    let mut pos = 0;
    while pos < len {
        let n = core::cmp::min(bs, len - pos);

        // Feedback must come from the input: with `dst == src` it is about
        // to be overwritten.
        window[bs..bs + n].copy_from_slice(&buf.get_in()[pos..pos + n]);

        for j in 0..n {
            block.copy_from_slice(&window[j..j + bs]);
            cipher.encrypt_block(&mut block);
            keystream[j] = block[0];
        }

        memxor3(
            &mut buf.get_out()[pos..pos + n],
            &window[bs..bs + n],
            &keystream[..n],
        );

        window.copy_within(n..n + bs, 0);
        pos += n;
    }

    iv.copy_from_slice(&window[..bs]);

    #[cfg(feature = "zeroize")]
    {
        window.zeroize();
        keystream.zeroize();
        block[..].zeroize();
    }
}
