//! A printer that appends everything to an in-memory buffer.
//!
//! The buffer is only allocated on the first write. Nothing is counted: the
//! buffer length is the number of bytes accepted.
use std::{fmt, io, str};

use log::trace;

use super::{
    error::Error,
    printer::{nil_target, Method, Named, Printer},
};

/// A printer backed by a growable byte buffer.
///
/// It is not meant to be shared between threads without external
/// synchronization.
#[derive(Debug, Default, Clone)]
pub struct BufferPrinter {
    /// The buffer. It's created on first use when not provided.
    buffer: Option<Vec<u8>>,
}

impl BufferPrinter {
    /// Creates a printer appending to `buffer`, or to a new buffer when
    /// `None`.
    #[must_use]
    pub fn new(buffer: Option<Vec<u8>>) -> Self {
        Self { buffer }
    }

    /// Returns the buffered bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_deref().unwrap_or_default()
    }

    /// Returns the buffer, empty if nothing was ever written.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer.unwrap_or_default()
    }

    fn buffer(&mut self) -> &mut Vec<u8> {
        self.buffer.get_or_insert_with(|| {
            trace!("allocating the backing buffer of {}", Self::TYPE_NAME);
            Vec::new()
        })
    }
}

impl Named for BufferPrinter {
    const TYPE_NAME: &'static str = "BufferPrinter";
}

impl From<Vec<u8>> for BufferPrinter {
    fn from(buffer: Vec<u8>) -> Self {
        Self::new(Some(buffer))
    }
}

impl Printer for BufferPrinter {
    fn write(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        self.buffer().extend_from_slice(bytes);

        Ok(bytes.len())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.buffer().push(byte);

        Ok(())
    }

    fn write_rune(&mut self, rune: char) -> Result<usize, Error> {
        let mut encoded = [0; 4];

        let encoded = rune.encode_utf8(&mut encoded);

        self.buffer().extend_from_slice(encoded.as_bytes());

        Ok(encoded.len())
    }

    fn write_string(&mut self, value: &str) -> Result<usize, Error> {
        self.buffer().extend_from_slice(value.as_bytes());

        Ok(value.len())
    }

    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn grow(&mut self, additional: usize) {
        let additional = additional.min(isize::MAX.unsigned_abs());

        if let Err(err) = self.buffer().try_reserve(additional) {
            trace!("ignoring grow hint of {additional} bytes: {err}");
        }
    }
}

/// Reading out what a buffer-backed printer holds.
pub trait Contents {
    /// It returns the buffered bytes as text.
    ///
    /// Raw bytes can be written, so the buffer may hold invalid UTF-8. A
    /// `String` can't carry that, so this fails where [`Contents::bytes`]
    /// still returns the exact contents.
    ///
    /// # Errors
    ///
    /// Will return an error if the printer is absent, or
    /// [`Error::InvalidUtf8`] if the bytes are not valid UTF-8.
    fn string(&self) -> Result<String, Error>;

    /// It returns the buffered bytes.
    ///
    /// # Errors
    ///
    /// Will return an error if the printer is absent.
    fn bytes(&self) -> Result<&[u8], Error>;
}

impl Contents for BufferPrinter {
    fn string(&self) -> Result<String, Error> {
        Ok(str::from_utf8(self.as_bytes())?.to_owned())
    }

    fn bytes(&self) -> Result<&[u8], Error> {
        Ok(self.as_bytes())
    }
}

impl Contents for Option<BufferPrinter> {
    fn string(&self) -> Result<String, Error> {
        self.as_ref()
            .ok_or_else(|| nil_target::<BufferPrinter>(Method::String))?
            .string()
    }

    fn bytes(&self) -> Result<&[u8], Error> {
        self.as_ref()
            .ok_or_else(|| nil_target::<BufferPrinter>(Method::Bytes))?
            .bytes()
    }
}

impl fmt::Write for BufferPrinter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s).map(|_| ()).map_err(|_| fmt::Error)
    }
}

impl io::Write for BufferPrinter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Printer::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
