//! Console Command Protocol
//!
//! Line reading, tokenizing and command dispatch for the console link.

pub mod command;
pub mod fields;
pub mod line;
