//! [XEX-based tweaked-codebook mode with ciphertext stealing][1] (XTS), as
//! specified in IEEE Std 1619-2007.
//!
//! XTS encrypts a *data unit* (typically a disk sector) with two keys: the
//! data key K1 encrypts the message blocks and the tweak key K2 turns the
//! 16-byte tweak into the per-block whitening value. Messages need not be a
//! multiple of the block size; the last partial block is handled with
//! ciphertext stealing, so the ciphertext is exactly as long as the plaintext.
//!
//! Any 128-bit block cipher implementing the traits of the re-exported
//! [`cipher`] crate can be used.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate does not ensure ciphertexts are authentic! Thus ciphertext integrity
//! is not verified, which can lead to serious vulnerabilities!
//!
//! # Example
//! ```
//! use aes::Aes128;
//! use xts::{get_tweak_default, Xts};
//!
//! // 32-byte key: first half is the data key, second half the tweak key.
//! let key = [0x42; 32];
//! let xts = Xts::<Aes128>::new_from_slice(&key).unwrap();
//!
//! let plaintext = *b"ciphertext stealing keeps 34 bytes";
//! let tweak = get_tweak_default(7);
//!
//! let mut buf = plaintext;
//! xts.encrypt_message(&tweak, &mut buf).unwrap();
//! assert_ne!(buf, plaintext);
//!
//! xts.decrypt_message(&tweak, &mut buf).unwrap();
//! assert_eq!(buf, plaintext);
//!
//! // Whole areas made of consecutive sectors.
//! let mut disk = [0u8; 1024];
//! xts.encrypt_area(&mut disk, 512, 0, get_tweak_default).unwrap();
//! xts.decrypt_area(&mut disk, 512, 0, get_tweak_default).unwrap();
//! assert_eq!(disk, [0u8; 1024]);
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Disk_encryption_theory#XTS

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

mod block;
mod errors;
mod message;
mod tweak;

pub use block::BLOCK_SIZE;
pub use errors::{InvalidKeyLength, InvalidMessageLength};
pub use message::{decrypt_message, decrypt_message_inout, encrypt_message, encrypt_message_inout};
pub use tweak::get_tweak_default;

use cipher::{
    consts::U16, inout::InOutBuf, typenum::Unsigned, BlockDecrypt, BlockEncrypt, KeyInit,
};
use core::fmt;

/// XTS-AES-128 keyed for encryption (`xts_aes128_set_encrypt_key`).
#[cfg(feature = "aes")]
pub type XtsAes128Enc = Xts<aes::Aes128Enc, aes::Aes128Enc>;

/// XTS-AES-128 keyed for decryption (`xts_aes128_set_decrypt_key`).
///
/// The tweak cipher stays a forward cipher.
#[cfg(feature = "aes")]
pub type XtsAes128Dec = Xts<aes::Aes128Dec, aes::Aes128Enc>;

/// XTS-AES-256 keyed for encryption.
#[cfg(feature = "aes")]
pub type XtsAes256Enc = Xts<aes::Aes256Enc, aes::Aes256Enc>;

/// XTS-AES-256 keyed for decryption.
///
/// The tweak cipher stays a forward cipher.
#[cfg(feature = "aes")]
pub type XtsAes256Dec = Xts<aes::Aes256Dec, aes::Aes256Enc>;

/// A data cipher (K1) paired with a tweak cipher (K2).
///
/// `D` only needs [`BlockDecrypt`] for decryption and [`BlockEncrypt`] for
/// encryption; `T` always needs [`BlockEncrypt`].
#[derive(Clone)]
pub struct Xts<D, T = D> {
    data: D,
    tweak: T,
}

impl<D, T> Xts<D, T> {
    /// Pair two already keyed ciphers.
    pub fn new(data_cipher: D, tweak_cipher: T) -> Self {
        Self {
            data: data_cipher,
            tweak: tweak_cipher,
        }
    }

    /// Cipher used on the message blocks.
    pub fn data_cipher(&self) -> &D {
        &self.data
    }

    /// Cipher used to derive the initial tweak.
    pub fn tweak_cipher(&self) -> &T {
        &self.tweak
    }
}

impl<D: KeyInit, T: KeyInit> Xts<D, T> {
    /// Key both ciphers from one concatenated key: the first half keys the
    /// data cipher, the second half the tweak cipher.
    ///
    /// # Errors
    /// Returns [`InvalidKeyLength`] unless `key` is exactly two keys long and
    /// both ciphers use the same key size.
    pub fn new_from_slice(key: &[u8]) -> Result<Self, InvalidKeyLength> {
        let key_size = D::KeySize::USIZE;
        if T::KeySize::USIZE != key_size || key.len() != 2 * key_size {
            return Err(InvalidKeyLength);
        }

        let (data_key, tweak_key) = key.split_at(key_size);
        let data = D::new_from_slice(data_key).map_err(|_| InvalidKeyLength)?;
        let tweak = T::new_from_slice(tweak_key).map_err(|_| InvalidKeyLength)?;
        Ok(Self { data, tweak })
    }
}

impl<D, T> Xts<D, T>
where
    D: BlockEncrypt<BlockSize = U16>,
    T: BlockEncrypt<BlockSize = U16>,
{
    /// Encrypt one data unit in place.
    ///
    /// # Errors
    /// Returns [`InvalidMessageLength`] if `buf` is shorter than one block;
    /// `buf` is zeroed in that case.
    pub fn encrypt_message(
        &self,
        tweak: &[u8; BLOCK_SIZE],
        buf: &mut [u8],
    ) -> Result<(), InvalidMessageLength> {
        encrypt_message(&self.data, &self.tweak, tweak, buf)
    }

    /// Encrypt one data unit, in place or buffer-to-buffer.
    ///
    /// # Errors
    /// Returns [`InvalidMessageLength`] if the message is shorter than one
    /// block; the output is zeroed in that case.
    pub fn encrypt_message_inout(
        &self,
        tweak: &[u8; BLOCK_SIZE],
        buf: InOutBuf<'_, '_, u8>,
    ) -> Result<(), InvalidMessageLength> {
        encrypt_message_inout(&self.data, &self.tweak, tweak, buf)
    }

    /// Encrypt an area made of consecutive data units of `sector_size` bytes.
    ///
    /// Sector `i` of the area is encrypted with `get_tweak(first_sector + i)`.
    /// The last sector may be shorter than `sector_size`.
    ///
    /// # Errors
    /// Returns [`InvalidMessageLength`] if `sector_size` or the trailing
    /// sector is shorter than one block. Nothing is encrypted and the whole
    /// area is zeroed in that case.
    pub fn encrypt_area(
        &self,
        area: &mut [u8],
        sector_size: usize,
        first_sector: u128,
        get_tweak: impl Fn(u128) -> [u8; BLOCK_SIZE],
    ) -> Result<(), InvalidMessageLength> {
        check_area(area, sector_size)?;
        let mut sector = first_sector;
        for unit in area.chunks_mut(sector_size) {
            self.encrypt_message(&get_tweak(sector), unit)?;
            sector = sector.wrapping_add(1);
        }
        Ok(())
    }
}

impl<D, T> Xts<D, T>
where
    D: BlockDecrypt<BlockSize = U16>,
    T: BlockEncrypt<BlockSize = U16>,
{
    /// Decrypt one data unit in place.
    ///
    /// # Errors
    /// Returns [`InvalidMessageLength`] if `buf` is shorter than one block;
    /// `buf` is zeroed in that case.
    pub fn decrypt_message(
        &self,
        tweak: &[u8; BLOCK_SIZE],
        buf: &mut [u8],
    ) -> Result<(), InvalidMessageLength> {
        decrypt_message(&self.data, &self.tweak, tweak, buf)
    }

    /// Decrypt one data unit, in place or buffer-to-buffer.
    ///
    /// # Errors
    /// Returns [`InvalidMessageLength`] if the message is shorter than one
    /// block; the output is zeroed in that case.
    pub fn decrypt_message_inout(
        &self,
        tweak: &[u8; BLOCK_SIZE],
        buf: InOutBuf<'_, '_, u8>,
    ) -> Result<(), InvalidMessageLength> {
        decrypt_message_inout(&self.data, &self.tweak, tweak, buf)
    }

    /// Decrypt an area made of consecutive data units of `sector_size` bytes.
    ///
    /// See [`Xts::encrypt_area`].
    ///
    /// # Errors
    /// Returns [`InvalidMessageLength`] if `sector_size` or the trailing
    /// sector is shorter than one block. Nothing is decrypted and the whole
    /// area is zeroed in that case.
    pub fn decrypt_area(
        &self,
        area: &mut [u8],
        sector_size: usize,
        first_sector: u128,
        get_tweak: impl Fn(u128) -> [u8; BLOCK_SIZE],
    ) -> Result<(), InvalidMessageLength> {
        check_area(area, sector_size)?;
        let mut sector = first_sector;
        for unit in area.chunks_mut(sector_size) {
            self.decrypt_message(&get_tweak(sector), unit)?;
            sector = sector.wrapping_add(1);
        }
        Ok(())
    }
}

impl<D, T> fmt::Debug for Xts<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Xts { ... }")
    }
}

/// Every sector of the area, including a short trailing one, must hold at
/// least one full block.
fn check_area(area: &mut [u8], sector_size: usize) -> Result<(), InvalidMessageLength> {
    let tail = if sector_size == 0 { 0 } else { area.len() % sector_size };
    if sector_size < BLOCK_SIZE || (tail != 0 && tail < BLOCK_SIZE) {
        area.fill(0);
        return Err(InvalidMessageLength);
    }
    Ok(())
}
