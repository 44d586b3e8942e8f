//! Generic [8-bit Cipher Feedback (CFB8)][1] mode implementation.
//!
//! This crate implements CFB8 as a [self-synchronizing stream cipher][2]:
//! every ciphertext byte is shifted into a block-sized register which is
//! encrypted to produce the keystream byte for the next position. Both
//! directions only use the forward block cipher.
//!
//! Two layers are provided:
//! - [`encrypt`], [`decrypt`] and their `_inout` forms, which take a
//!   borrowed cipher and the caller's IV register and update it in place;
//! - [`Cfb8`], which owns the cipher and the register so a message can be
//!   processed in arbitrary chunks.
//!
//! Block ciphers with blocks of up to [`MAX_BLOCK_SIZE`] bytes are supported.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate does not ensure ciphertexts are authentic! Thus ciphertext integrity
//! is not verified, which can lead to serious vulnerabilities!
//!
//! # Examples
//! ```
//! use aes::Aes128;
//! use cfb8::Cfb8;
//! use hex_literal::hex;
//!
//! type AesCfb8 = Cfb8<Aes128>;
//!
//! let key = b"very secret key.";
//! let iv = b"unique init vect";
//! let plaintext = b"The quick brown fox jumps over the lazy dog.";
//! let ciphertext = hex!("
//!     8fb603d8 66a1181c 08506c75 37ee9cad
//!     35be8ff8 e0c79526 9d735d04 c0a93017
//!     b1a748e0 25146b68 23fc9ad3
//! ");
//!
//! let mut buffer = plaintext.to_vec();
//! // encrypt plaintext
//! AesCfb8::new_from_slices(key, iv).unwrap().encrypt(&mut buffer);
//! assert_eq!(buffer, &ciphertext[..]);
//! // and decrypt it back
//! AesCfb8::new_from_slices(key, iv).unwrap().decrypt(&mut buffer);
//! assert_eq!(buffer, &plaintext[..]);
//!
//! // CFB mode can be used with streaming messages
//! let mut cipher = AesCfb8::new_from_slices(key, iv).unwrap();
//! for chunk in buffer.chunks_mut(3) {
//!     cipher.encrypt(chunk);
//! }
//! assert_eq!(buffer, &ciphertext[..]);
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#CFB
//! [2]: https://en.wikipedia.org/wiki/Stream_cipher#Self-synchronizing_stream_ciphers

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use cipher;

mod errors;
mod feedback;

pub use errors::InvalidKeyIvLength;
pub use feedback::{decrypt, decrypt_inout, encrypt, encrypt_inout, MAX_BLOCK_SIZE};

use cipher::{
    consts::U32,
    inout::InOutBuf,
    typenum::{IsLessOrEqual, True, Unsigned},
    Block, BlockEncrypt, Key, KeyInit,
};
use core::fmt;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// CFB8 self-synchronizing stream cipher instance.
pub struct Cfb8<C: BlockEncrypt> {
    cipher: C,
    iv: Block<C>,
}

impl<C> Cfb8<C>
where
    C: BlockEncrypt,
    C::BlockSize: IsLessOrEqual<U32, Output = True>,
{
    /// Create a new CFB8 instance from a keyed cipher and an IV.
    pub fn from_cipher(cipher: C, iv: &Block<C>) -> Self {
        Self {
            cipher,
            iv: iv.clone(),
        }
    }

    /// Encrypt data in place.
    pub fn encrypt(&mut self, buffer: &mut [u8]) {
        encrypt(&self.cipher, &mut self.iv, buffer);
    }

    /// Decrypt data in place.
    pub fn decrypt(&mut self, buffer: &mut [u8]) {
        decrypt(&self.cipher, &mut self.iv, buffer);
    }

    /// Encrypt data, in place or buffer-to-buffer.
    pub fn encrypt_inout(&mut self, buf: InOutBuf<'_, '_, u8>) {
        encrypt_inout(&self.cipher, &mut self.iv, buf);
    }

    /// Decrypt data, in place or buffer-to-buffer.
    pub fn decrypt_inout(&mut self, buf: InOutBuf<'_, '_, u8>) {
        decrypt_inout(&self.cipher, &mut self.iv, buf);
    }

    /// Current shift register, i.e. the IV a fresh instance would need to
    /// continue this stream.
    pub fn iv(&self) -> &Block<C> {
        &self.iv
    }
}

impl<C> Cfb8<C>
where
    C: BlockEncrypt + KeyInit,
    C::BlockSize: IsLessOrEqual<U32, Output = True>,
{
    /// Create a new CFB8 instance with generic array key and IV.
    pub fn new(key: &Key<C>, iv: &Block<C>) -> Self {
        Self::from_cipher(C::new(key), iv)
    }

    /// Create a new CFB8 instance with sliced key and IV.
    ///
    /// # Errors
    /// Returns [`InvalidKeyIvLength`] if key or IV have incorrect size.
    pub fn new_from_slices(key: &[u8], iv: &[u8]) -> Result<Self, InvalidKeyIvLength> {
        if iv.len() != C::BlockSize::USIZE {
            return Err(InvalidKeyIvLength);
        }
        let cipher = C::new_from_slice(key).map_err(|_| InvalidKeyIvLength)?;
        let iv = Block::<C>::clone_from_slice(iv);
        Ok(Self::from_cipher(cipher, &iv))
    }
}

impl<C: BlockEncrypt> fmt::Debug for Cfb8<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cfb8 { ... }")
    }
}

#[cfg(feature = "zeroize")]
impl<C: BlockEncrypt> Drop for Cfb8<C> {
    fn drop(&mut self) {
        self.iv[..].zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl<C: BlockEncrypt + ZeroizeOnDrop> ZeroizeOnDrop for Cfb8<C> {}
