//! Error types.
use core::fmt;

/// Error type used to indicate invalid length of key or IV.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidKeyIvLength;

impl fmt::Display for InvalidKeyIvLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid length of key or IV")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidKeyIvLength {}
