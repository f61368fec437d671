//! Printers: one trait, two outputs.
pub mod buffer_printer;
pub mod error;
pub mod printer;
pub mod stream_printer;
