//! This module contains the `Printer` trait.
//!
//! A printer is written to with raw bytes, single bytes, single chars, plain
//! strings and formatted values, and it knows how many bytes it has accepted.
//!
//! `Printer` is also implemented for `Option<P>`: `None` stands for a printer
//! that was never created. Every write on it fails with a
//! [`NilTargetError`] naming the printer type and the operation; it never
//! panics.
use std::fmt::{self, Write as _};

use derive_more::derive::Display;

use super::error::Error;
use crate::error::NilTargetError;

pub trait Printer {
    /// It writes all the bytes to the output.
    ///
    /// Returns the number of bytes accepted, which is `bytes.len()` on
    /// success.
    ///
    /// # Errors
    ///
    /// Will return an error if the output can't accept the bytes. When the
    /// output took some of them first, the error is
    /// [`Error::PartialWrite`] and [`Error::accepted`] tells how many.
    fn write(&mut self, bytes: &[u8]) -> Result<usize, Error>;

    /// It writes one byte to the output.
    ///
    /// # Errors
    ///
    /// Will return an error if it can't write the byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), Error>;

    /// It writes the UTF-8 encoding of one char to the output.
    ///
    /// Returns the encoded length, from 1 to 4 bytes.
    ///
    /// # Errors
    ///
    /// Will return an error if it can't write the encoded char.
    fn write_rune(&mut self, rune: char) -> Result<usize, Error>;

    /// It writes a string to the output, without any formatting.
    ///
    /// # Errors
    ///
    /// Will return an error if it can't write the string.
    fn write_string(&mut self, value: &str) -> Result<usize, Error>;

    /// It writes the values separated by one space.
    ///
    /// # Errors
    ///
    /// Will return an error if a value can't be formatted or the text can't
    /// be written.
    fn print(&mut self, values: &[&dyn fmt::Display]) -> Result<(), Error> {
        let text = sprint(values)?;

        self.write_string(&text).map(|_| ())
    }

    /// It writes pre-formatted arguments, usually built with `format_args!`.
    ///
    /// # Errors
    ///
    /// Will return an error if the arguments can't be formatted or the text
    /// can't be written.
    fn printf(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        let mut text = String::new();

        text.write_fmt(args)?;

        self.write_string(&text).map(|_| ())
    }

    /// It writes the values separated by one space, followed by a newline.
    ///
    /// # Errors
    ///
    /// Will return an error if a value can't be formatted or the text can't
    /// be written.
    fn println(&mut self, values: &[&dyn fmt::Display]) -> Result<(), Error> {
        let mut text = sprint(values)?;

        text.push('\n');

        self.write_string(&text).map(|_| ())
    }

    /// It returns the number of bytes the printer has accepted.
    fn len(&self) -> usize;

    /// It returns `true` if the printer has not accepted any bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// It hints that at least `additional` more bytes will be written.
    ///
    /// Implementations are free to ignore the hint.
    fn grow(&mut self, additional: usize);
}

/// A printer type with a static name used in diagnostics.
pub trait Named {
    const TYPE_NAME: &'static str;
}

/// The printer operations, as named in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Method {
    #[display("write")]
    Write,
    #[display("write_byte")]
    WriteByte,
    #[display("write_rune")]
    WriteRune,
    #[display("write_string")]
    WriteString,
    #[display("print")]
    Print,
    #[display("printf")]
    Printf,
    #[display("println")]
    Println,
    #[display("string")]
    String,
    #[display("bytes")]
    Bytes,
}

/// The error for `method` invoked on an absent printer of type `P`.
#[must_use]
pub fn nil_target<P: Named>(method: Method) -> Error {
    Error::NilTarget(NilTargetError::new(Some(P::TYPE_NAME), method.to_string()))
}

/// It returns the printer in `slot`, or the nil-target error for `method`.
///
/// # Errors
///
/// Will return a [`NilTargetError`] if the slot is empty.
pub fn target<P: Named>(slot: &mut Option<P>, method: Method) -> Result<&mut P, Error> {
    slot.as_mut().ok_or_else(|| nil_target::<P>(method))
}

fn sprint(values: &[&dyn fmt::Display]) -> Result<String, fmt::Error> {
    let mut text = String::new();

    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            text.push(' ');
        }
        write!(text, "{value}")?;
    }

    Ok(text)
}

impl<P: Printer + Named> Printer for Option<P> {
    fn write(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        target(self, Method::Write)?.write(bytes)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        target(self, Method::WriteByte)?.write_byte(byte)
    }

    fn write_rune(&mut self, rune: char) -> Result<usize, Error> {
        target(self, Method::WriteRune)?.write_rune(rune)
    }

    fn write_string(&mut self, value: &str) -> Result<usize, Error> {
        target(self, Method::WriteString)?.write_string(value)
    }

    fn print(&mut self, values: &[&dyn fmt::Display]) -> Result<(), Error> {
        target(self, Method::Print)?.print(values)
    }

    fn printf(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        target(self, Method::Printf)?.printf(args)
    }

    fn println(&mut self, values: &[&dyn fmt::Display]) -> Result<(), Error> {
        target(self, Method::Println)?.println(values)
    }

    fn len(&self) -> usize {
        self.as_ref().map_or(0, |printer| printer.len())
    }

    fn grow(&mut self, additional: usize) {
        if let Some(printer) = self {
            printer.grow(additional);
        }
    }
}

impl<P: Printer + ?Sized> Printer for &mut P {
    fn write(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        (**self).write(bytes)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        (**self).write_byte(byte)
    }

    fn write_rune(&mut self, rune: char) -> Result<usize, Error> {
        (**self).write_rune(rune)
    }

    fn write_string(&mut self, value: &str) -> Result<usize, Error> {
        (**self).write_string(value)
    }

    fn print(&mut self, values: &[&dyn fmt::Display]) -> Result<(), Error> {
        (**self).print(values)
    }

    fn printf(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        (**self).printf(args)
    }

    fn println(&mut self, values: &[&dyn fmt::Display]) -> Result<(), Error> {
        (**self).println(values)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn grow(&mut self, additional: usize) {
        (**self).grow(additional);
    }
}
