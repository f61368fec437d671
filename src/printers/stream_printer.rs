//! A printer that forwards bytes to an output.
//!
//! The output is any type that implements the `std::io::Write` trait. When no
//! output is given, bytes go to `std::io::Sink`, which accepts everything and
//! does nothing.
use std::io::{self, Write};

use log::{debug, trace, warn};

use super::{
    error::Error,
    printer::{Named, Printer},
};
use crate::error::OverflowsIntError;

/// Size of the scratch buffer: enough for one UTF-8 encoded char.
const SCRATCH_LEN: usize = 4;

bitflags::bitflags! {
    /// Options for a [`StreamPrinter`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StreamPrinterFlags: u32 {
        /// Stage single bytes and chars in a fresh scratch buffer on every
        /// call instead of the one kept in the printer.
        const PRIVATE_BUFFER = 0b0000_0001;
    }
}

/// A printer forwarding to an output implementing `std::io::Write`.
///
/// It keeps a running count of the bytes the output accepted. The count
/// never wraps: a write that would push it past `usize::MAX` fails with an
/// [`OverflowsIntError`] for the `written` property and leaves it unchanged.
///
/// Writes take `&mut self`, so one printer can't be used from several threads
/// at once. Several printers may share one output (for example `&File`) from
/// different threads as long as the output tolerates concurrent writes.
#[derive(Debug)]
pub struct StreamPrinter<W: Write = io::Sink> {
    output: Output<W>,

    flags: StreamPrinterFlags,

    /// Scratch buffer for single bytes and chars, unless
    /// `PRIVATE_BUFFER` is set.
    scratch: [u8; SCRATCH_LEN],

    /// Number of bytes accepted by the output.
    written: usize,
}

#[derive(Debug)]
enum Output<W> {
    Discard(io::Sink),
    Stream(W),
}

impl<W: Write> Output<W> {
    /// Writes all `bytes` and returns how many were accepted, even when the
    /// write failed half way.
    fn forward(&mut self, bytes: &[u8]) -> (usize, io::Result<()>) {
        match self {
            Output::Discard(sink) => write_counted(sink, bytes),
            Output::Stream(writer) => write_counted(writer, bytes),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Discard(sink) => sink.flush(),
            Output::Stream(writer) => writer.flush(),
        }
    }
}

fn write_counted<S: Write + ?Sized>(sink: &mut S, bytes: &[u8]) -> (usize, io::Result<()>) {
    let mut accepted = 0;

    while accepted < bytes.len() {
        match sink.write(&bytes[accepted..]) {
            Ok(0) => {
                return (accepted, Err(io::Error::from(io::ErrorKind::WriteZero)));
            }
            Ok(count) => accepted += count,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return (accepted, Err(err)),
        }
    }

    (accepted, Ok(()))
}

impl<W: Write> StreamPrinter<W> {
    /// Creates a printer forwarding to `output`.
    ///
    /// `written` is the initial byte count, to resume accounting for an
    /// output that already holds data.
    pub fn new(output: Option<W>, flags: StreamPrinterFlags, written: usize) -> Self {
        let output = match output {
            Some(writer) => Output::Stream(writer),
            None => {
                trace!("no output given to {}, discarding", Self::TYPE_NAME);
                Output::Discard(io::sink())
            }
        };

        Self {
            output,
            flags,
            scratch: [0; SCRATCH_LEN],
            written,
        }
    }

    /// Returns the number of bytes accepted by the output.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flags(&self) -> StreamPrinterFlags {
        self.flags
    }

    /// Returns the output, or `None` when bytes are discarded.
    pub fn get_ref(&self) -> Option<&W> {
        match &self.output {
            Output::Discard(_) => None,
            Output::Stream(writer) => Some(writer),
        }
    }

    /// Returns the output, or `None` when bytes are discarded.
    pub fn into_inner(self) -> Option<W> {
        match self.output {
            Output::Discard(_) => None,
            Output::Stream(writer) => Some(writer),
        }
    }

    /// Writes the bytes `stage` puts in a scratch buffer; `stage` returns
    /// how many it put.
    fn write_staged(
        &mut self,
        stage: impl FnOnce(&mut [u8; SCRATCH_LEN]) -> usize,
    ) -> Result<usize, Error> {
        let mut private = [0; SCRATCH_LEN];

        let scratch = if self.flags.contains(StreamPrinterFlags::PRIVATE_BUFFER) {
            &mut private
        } else {
            &mut self.scratch
        };

        let len = stage(&mut *scratch);

        let (count, result) = self.output.forward(&scratch[..len]);

        let result = result.map_err(|err| Error::from_output(count, err));

        self.advance(result, count)?;

        Ok(count)
    }

    fn write_all_counted(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        let (count, result) = self.output.forward(bytes);

        let result = result.map_err(|err| Error::from_output(count, err));

        self.advance(result, count)?;

        Ok(count)
    }

    /// Adds `count` accepted bytes to the counter.
    ///
    /// On overflow the counter is left unchanged. The overflow is reported
    /// only if the write itself succeeded: an earlier error always wins.
    fn advance(&mut self, result: Result<(), Error>, count: usize) -> Result<(), Error> {
        if count == 0 {
            return result;
        }

        match self.written.checked_add(count) {
            Some(next) => {
                self.written = next;
                result
            }
            None => match result {
                Ok(()) => {
                    warn!(
                        "{} byte counter overflow: {} + {count}",
                        Self::TYPE_NAME,
                        self.written
                    );

                    Err(Error::OverflowsInt(OverflowsIntError::for_property(
                        "written",
                        Some(Self::TYPE_NAME),
                        self.written as i128,
                        count as i128,
                    )))
                }
                Err(err) => {
                    debug!(
                        "{} byte counter overflow not reported, write already failed: {err}",
                        Self::TYPE_NAME
                    );

                    Err(err)
                }
            },
        }
    }
}

impl StreamPrinter {
    /// Creates a printer that discards everything but still counts.
    #[must_use]
    pub fn discard() -> Self {
        Self::new(None, StreamPrinterFlags::empty(), 0)
    }
}

impl<W: Write> Named for StreamPrinter<W> {
    const TYPE_NAME: &'static str = "StreamPrinter";
}

impl<W: Write> Printer for StreamPrinter<W> {
    fn write(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        self.write_all_counted(bytes)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.write_staged(|scratch| {
            scratch[0] = byte;
            1
        })
        .map(|_| ())
    }

    fn write_rune(&mut self, rune: char) -> Result<usize, Error> {
        self.write_staged(|scratch| rune.encode_utf8(scratch).len())
    }

    fn write_string(&mut self, value: &str) -> Result<usize, Error> {
        self.write_all_counted(value.as_bytes())
    }

    fn len(&self) -> usize {
        self.written
    }

    /// There is nothing to reserve in front of a stream.
    fn grow(&mut self, _additional: usize) {}
}

impl<W: Write> std::fmt::Write for StreamPrinter<W> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.write_string(s)
            .map(|_| ())
            .map_err(|_| std::fmt::Error)
    }
}

impl<W: Write> Write for StreamPrinter<W> {
    /// Bytes the output accepted before failing are reported as a short
    /// write; the output's error comes back on the next call.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match Printer::write(self, buf) {
            Ok(count) => Ok(count),
            Err(Error::PartialWrite { accepted, source }) => {
                debug!("short write of {accepted} bytes, deferring: {source}");
                Ok(accepted)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
