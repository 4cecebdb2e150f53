//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::{error, fmt};
use crate::error::ContentError;
use super::source::Pos;


//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding data.
///
/// The error wraps the [`ContentError`] describing what went wrong together
/// with the position in the input where it was detected.
#[derive(Debug)]
pub struct DecodeError {
    /// The actual error.
    error: ContentError,

    /// The logical position of the error.
    pos: Pos,
}

impl DecodeError {
    /// Creates a decode error from a content error and a position.
    pub fn content(error: impl Into<ContentError>, pos: Pos) -> Self {
        DecodeError { error: error.into(), pos }
    }

    /// Returns the position of the error.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Returns the content error.
    pub fn content_error(&self) -> &ContentError {
        &self.error
    }

    /// Converts the error into the content error, dropping the position.
    pub fn into_content_error(self) -> ContentError {
        self.error
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (at {})", self.error, self.pos)
    }
}

impl error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}
