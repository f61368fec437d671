//! This lib contains printers: writers with a uniform API over either an
//! in-memory buffer or any `std::io::Write` output.
//!
//! - [`BufferPrinter`] appends to a growable buffer that can be read out as
//!   text.
//! - [`StreamPrinter`] forwards to an output and counts the accepted bytes,
//!   failing instead of letting the counter wrap.
//!
//! Both implement [`Printer`]. So does `Option<P>`, where `None` is a printer
//! that was never created: every write on it fails with a
//! [`NilTargetError`](error::NilTargetError).
//!
//! ```rust
//! use printkit::{BufferPrinter, Contents, Printer};
//!
//! let mut printer = BufferPrinter::new(None);
//!
//! printer.print(&[&"spam", &42]).unwrap();
//! printer.write_rune('!').unwrap();
//!
//! assert_eq!(printer.string().unwrap(), "spam 42!");
//! ```
pub mod error;
pub mod printers;

pub use printers::buffer_printer::{BufferPrinter, Contents};
pub use printers::error::Error;
pub use printers::printer::{Method, Named, Printer};
pub use printers::stream_printer::{StreamPrinter, StreamPrinterFlags};

/// It prints the contents of a buffer printer created from `values` with
/// `Printer::print`.
///
/// # Errors
///
/// Will return an error if a value can't be formatted.
pub fn sprint(values: &[&dyn std::fmt::Display]) -> Result<String, Error> {
    let mut printer = BufferPrinter::new(None);

    printer.print(values)?;

    printer.string()
}
