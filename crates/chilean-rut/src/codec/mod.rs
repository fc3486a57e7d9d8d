//! Checksum, parsing, and rendering for RUTs.
//!
//! - Checksum: weighted modulus-11 check character
//! - Parsing: body/check grammar and combined-string notations
//! - Formatting: full, dash-only, and escaped renderings

pub mod checksum;
pub mod format;
pub mod parse;

pub use checksum::compute_check_character;
pub use format::{format, group_thousands};
pub use parse::{construct, from_number, parse};
