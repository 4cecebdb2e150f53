//! The error shared by all primitive codecs.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::{error, fmt};


//------------ ContentError --------------------------------------------------

/// An error happened while encoding or interpreting a single value.
///
/// The error carries a human readable message only. Position information is
/// added by the wrapping error types of the [`decode`] and [`encode`]
/// modules, since the primitive codecs don’t know where their input came
/// from.
///
/// [`decode`]: crate::decode
/// [`encode`]: crate::encode
pub struct ContentError {
    message: ErrorMessage,
}

impl ContentError {
    /// Creates a content error from a static error message.
    pub fn from_static(msg: &'static str) -> Self {
        ContentError { message: ErrorMessage::Static(msg) }
    }

    /// Creates a content error from a boxed trait object.
    pub fn from_boxed(
        msg: Box<dyn fmt::Display + Send + Sync + 'static>
    ) -> Self {
        ContentError { message: ErrorMessage::Boxed(msg) }
    }
}

impl From<&'static str> for ContentError {
    fn from(msg: &'static str) -> Self {
        Self::from_static(msg)
    }
}

impl From<String> for ContentError {
    fn from(msg: String) -> Self {
        Self::from_boxed(Box::new(msg))
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.message {
            ErrorMessage::Static(msg) => f.write_str(msg),
            ErrorMessage::Boxed(ref msg) => msg.fmt(f),
        }
    }
}

impl fmt::Debug for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ContentError")
            .field(&format_args!("{}", self))
            .finish()
    }
}

impl error::Error for ContentError { }


//------------ ErrorMessage --------------------------------------------------

enum ErrorMessage {
    Static(&'static str),
    Boxed(Box<dyn fmt::Display + Send + Sync + 'static>),
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            ContentError::from_static("bad tag").to_string(), "bad tag"
        );
        assert_eq!(
            ContentError::from(format!("bad tag {}", 12)).to_string(),
            "bad tag 12"
        );
        assert_eq!(
            format!("{:?}", ContentError::from("x")), "ContentError(x)"
        );
    }
}
