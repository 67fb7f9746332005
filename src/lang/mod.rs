/*!
## Rust Language Module

This Rust module provides the error model shared across the BASIC
runtime.

*/

pub type Column = std::ops::Range<usize>;
pub type LineNumber = Option<u16>;

#[macro_use]
mod error;

pub use error::range_check;
pub use error::throw_if;
pub use error::Error;
pub use error::ErrorCode;
