//! Line protocol
//!
//! One command per line. The leading integer selects the command:
//!
//! 1 <timestamp>;<type>;<severity>        insert a record
//! 2 <type>                               stats for a type
//! 3 BEFORE|AFTER <timestamp>             stats on one side of a timestamp
//! 4 BEFORE|AFTER <type> <timestamp>      same, scoped to a type
//!
//! Only queries produce output. Lines that are not commands are reported as
//! [`Ignored`] instead of failing, so the caller decides how loud to be.

mod error;
mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use error::ProtocolError;
pub use parse::parse_command;
pub use types::{Command, Ignored};
