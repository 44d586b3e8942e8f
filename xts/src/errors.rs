//! Error types.
use core::fmt;

/// The message handed to XTS was shorter than one cipher block.
///
/// By the time this is returned the destination has already been zeroed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidMessageLength;

/// The combined key was not exactly one data key followed by one tweak key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidKeyLength;

impl fmt::Display for InvalidMessageLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("XTS message is shorter than one cipher block")
    }
}

impl fmt::Display for InvalidKeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid length of XTS key pair")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidMessageLength {}

#[cfg(feature = "std")]
impl std::error::Error for InvalidKeyLength {}
