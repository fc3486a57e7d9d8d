//! Data model types for RUTs.
//!
//! - [`Rut`]: immutable body + check character value
//! - [`RutFormat`]: rendering mode

pub mod format;
pub mod rut;

pub use format::RutFormat;
pub use rut::Rut;
