//! Chilean RUT: parsing, validation, formatting, and generation.
//!
//! A RUT (Rol Único Tributario) is a numeric body followed by a check
//! character (`0-9` or `k`) computed from the body with a weighted
//! modulus-11 checksum.
//!
//! # Quick Start
//!
//! ```rust
//! use chilean_rut::{Rut, RutFormat};
//!
//! // Any of the usual notations parse to the same value
//! let rut = Rut::parse("15.605.286-8").unwrap();
//! assert_eq!(rut, Rut::parse("156052868").unwrap());
//! assert!(rut.is_valid());
//!
//! // Render in each format
//! assert_eq!(rut.format(RutFormat::Full), "15.605.286-8");
//! assert_eq!(rut.format(RutFormat::OnlyDash), "15605286-8");
//! assert_eq!(rut.format(RutFormat::Escaped), "156052868");
//!
//! // Well-formed but wrong check character
//! let typo = Rut::new("15605286", "7").unwrap();
//! assert!(!typo.is_valid());
//! assert!(typo.ensure_valid().is_err());
//! ```
//!
//! # Modules
//!
//! - [`model`]: The [`Rut`] value and [`RutFormat`] rendering modes
//! - [`codec`]: Checksum, parsing grammar, and rendering
//! - [`generate`]: Random valid RUTs, optionally seeded
//! - [`validate`]: Checked validity and field-level validation rules
//! - [`error`]: Error types
//! - [`limits`]: Grammar and generator bounds
//!
//! # Accepted Notations
//!
//! `12345678-5`, `123456785`, `12.345.678-5` and `12.345.6785`, with `k`
//! accepted in either case. Empty or whitespace-only input parses to
//! [`Rut::EMPTY`]; anything else outside the grammar is rejected with a
//! [`RutError`].

pub mod codec;
pub mod error;
pub mod generate;
pub mod limits;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::compute_check_character;
pub use error::{ErrorCode, RutError, ValidationError};
pub use generate::{random_many, random_one, unique_many, GeneratorConfig, RutGenerator};
pub use model::{Rut, RutFormat};
pub use validate::{validate_rut_pair, FieldValue, RutRule};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
