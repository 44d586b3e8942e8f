//! Encryption and decryption of a single XTS data unit.

use crate::{
    block::{Block16, BLOCK_SIZE},
    errors::InvalidMessageLength,
    tweak,
};
use cipher::{consts::U16, inout::InOutBuf, BlockDecrypt, BlockEncrypt};

/// Direction of cipher operation.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Encrypt one data unit in place.
///
/// `data_cipher` keys the message blocks (K1), `tweak_cipher` encrypts the
/// tweak (K2). Messages of any length from one block upwards are accepted;
/// a trailing partial block is handled with ciphertext stealing.
///
/// # Errors
/// Returns [`InvalidMessageLength`] if `buf` is shorter than 16 bytes. The
/// buffer is zeroed in that case.
#[inline]
pub fn encrypt_message<D, T>(
    data_cipher: &D,
    tweak_cipher: &T,
    tweak: &[u8; BLOCK_SIZE],
    buf: &mut [u8],
) -> Result<(), InvalidMessageLength>
where
    D: BlockEncrypt<BlockSize = U16>,
    T: BlockEncrypt<BlockSize = U16>,
{
    encrypt_message_inout(data_cipher, tweak_cipher, tweak, buf.into())
}

/// Decrypt one data unit in place.
///
/// The tweak cipher is always used in the forward direction, so it must be
/// keyed for encryption even though the message is being decrypted.
///
/// # Errors
/// Returns [`InvalidMessageLength`] if `buf` is shorter than 16 bytes. The
/// buffer is zeroed in that case.
#[inline]
pub fn decrypt_message<D, T>(
    data_cipher: &D,
    tweak_cipher: &T,
    tweak: &[u8; BLOCK_SIZE],
    buf: &mut [u8],
) -> Result<(), InvalidMessageLength>
where
    D: BlockDecrypt<BlockSize = U16>,
    T: BlockEncrypt<BlockSize = U16>,
{
    decrypt_message_inout(data_cipher, tweak_cipher, tweak, buf.into())
}

/// Encrypt one data unit from the input half of `buf` into its output half.
///
/// Works both in place and buffer-to-buffer.
///
/// # Errors
/// Returns [`InvalidMessageLength`] if the message is shorter than 16 bytes.
/// The output is zeroed in that case and no data block is encrypted.
pub fn encrypt_message_inout<D, T>(
    data_cipher: &D,
    tweak_cipher: &T,
    tweak: &[u8; BLOCK_SIZE],
    buf: InOutBuf<'_, '_, u8>,
) -> Result<(), InvalidMessageLength>
where
    D: BlockEncrypt<BlockSize = U16>,
    T: BlockEncrypt<BlockSize = U16>,
{
    process(tweak_cipher, tweak, buf, Direction::Encrypt, |block| {
        data_cipher.encrypt_block(block.as_generic_mut());
    })
}

/// Decrypt one data unit from the input half of `buf` into its output half.
///
/// Works both in place and buffer-to-buffer.
///
/// # Errors
/// Returns [`InvalidMessageLength`] if the message is shorter than 16 bytes.
/// The output is zeroed in that case and no data block is decrypted.
pub fn decrypt_message_inout<D, T>(
    data_cipher: &D,
    tweak_cipher: &T,
    tweak: &[u8; BLOCK_SIZE],
    buf: InOutBuf<'_, '_, u8>,
) -> Result<(), InvalidMessageLength>
where
    D: BlockDecrypt<BlockSize = U16>,
    T: BlockEncrypt<BlockSize = U16>,
{
    process(tweak_cipher, tweak, buf, Direction::Decrypt, |block| {
        data_cipher.decrypt_block(block.as_generic_mut());
    })
}

fn process<T, F>(
    tweak_cipher: &T,
    tweak: &[u8; BLOCK_SIZE],
    mut buf: InOutBuf<'_, '_, u8>,
    direction: Direction,
    mut cipher_fn: F,
) -> Result<(), InvalidMessageLength>
where
    T: BlockEncrypt<BlockSize = U16>,
    F: FnMut(&mut Block16),
{
    let len = buf.len();
    if len < BLOCK_SIZE {
        buf.get_out().fill(0);
        return Err(InvalidMessageLength);
    }

    let mut t = tweak::initial(tweak_cipher, tweak);
    let mut block = Block16::default();
    let mut pos = 0;

    // Every block not taking part in ciphertext stealing.
    while len - pos >= 2 * BLOCK_SIZE || len - pos == BLOCK_SIZE {
        block.load_xor(&buf.get_in()[pos..pos + BLOCK_SIZE], &t);
        cipher_fn(&mut block);
        block.xor_in(&t);
        buf.get_out()[pos..pos + BLOCK_SIZE].copy_from_slice(block.as_bytes());

        pos += BLOCK_SIZE;
        if pos != len {
            tweak::advance(&mut t);
        }
    }

    if pos != len {
        let rem = len - pos - BLOCK_SIZE;
        debug_assert!((1..BLOCK_SIZE).contains(&rem));

        // Encryption uses T_{m-1} for the last full block and T_m for the
        // stolen one; decryption needs them the other way around.
        let mut t_next = t;
        tweak::advance(&mut t_next);
        let (t_full, t_stolen) = match direction {
            Direction::Encrypt => (&t, &t_next),
            Direction::Decrypt => (&t_next, &t),
        };

        let mut stolen = Block16::default();
        {
            let input = buf.get_in();
            block.load_xor(&input[pos..pos + BLOCK_SIZE], t_full);
            stolen.as_bytes_mut()[..rem].copy_from_slice(&input[pos + BLOCK_SIZE..]);
        }
        cipher_fn(&mut block);
        block.xor_in(t_full);

        stolen.as_bytes_mut()[rem..].copy_from_slice(&block.as_bytes()[rem..]);
        stolen.xor_in(t_stolen);
        cipher_fn(&mut stolen);
        stolen.xor_in(t_stolen);

        // The full block goes out first: with `dst == src` the partial
        // input has been consumed above, so nothing unread is overwritten.
        let out = buf.get_out();
        out[pos..pos + BLOCK_SIZE].copy_from_slice(stolen.as_bytes());
        out[pos + BLOCK_SIZE..].copy_from_slice(&block.as_bytes()[..rem]);

        t_next.wipe();
        stolen.wipe();
    }

    t.wipe();
    block.wipe();
    Ok(())
}
