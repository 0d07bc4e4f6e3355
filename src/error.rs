use core::fmt::{Display, Formatter};

/// `LastSeenError` is the errors of this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LastSeenError {
    /// The requested capacity cannot be backed by [`DEPTH`] prime rows
    /// that fit in the 16-bit modulus domain.
    ///
    /// [`DEPTH`]: constant.DEPTH.html
    UnsupportedSize(usize),
}

impl Display for LastSeenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            LastSeenError::UnsupportedSize(size) => {
                write!(f, "unsupported last-seen sketch size {}", *size)
            }
        }
    }
}

cfg_std!(
    impl std::error::Error for LastSeenError {}
);
