//! Custom error type for all printer operations.
use std::{fmt, io, str};
use thiserror::Error;

use crate::error::{NilArgError, NilPropError, NilTargetError, OverflowsIntError};

/// Errors returned by printers.
///
/// Errors coming from the backing resource are passed through unchanged. The
/// misuse and overflow variants render exactly the message of the wrapped
/// descriptor.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The output accepted `accepted` bytes and then failed.
    #[error("I/O error after {accepted} bytes were accepted: {source}")]
    PartialWrite {
        accepted: usize,
        #[source]
        source: io::Error,
    },

    #[error("Formatting error: {0}")]
    Fmt(#[from] fmt::Error),

    /// The buffered bytes can't be read out as text.
    #[error("Buffer contents are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] str::Utf8Error),

    #[error(transparent)]
    NilTarget(#[from] NilTargetError),

    #[error(transparent)]
    NilArg(#[from] NilArgError),

    #[error(transparent)]
    NilProp(#[from] NilPropError),

    #[error(transparent)]
    OverflowsInt(#[from] OverflowsIntError),
}

impl Error {
    /// The output failed after accepting `accepted` bytes, or before
    /// accepting any.
    pub(crate) fn from_output(accepted: usize, source: io::Error) -> Self {
        if accepted == 0 {
            Error::Io(source)
        } else {
            Error::PartialWrite { accepted, source }
        }
    }

    /// Returns the number of bytes the output accepted before the error.
    #[must_use]
    pub fn accepted(&self) -> usize {
        match self {
            Error::PartialWrite { accepted, .. } => *accepted,
            _ => 0,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(err) | Error::PartialWrite { source: err, .. } => err,
            other => io::Error::other(other),
        }
    }
}
