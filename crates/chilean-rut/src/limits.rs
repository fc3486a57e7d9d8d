//! Numeric limits for RUT bodies and generation.

/// Largest body expressible in the body grammar (8 significant digits).
pub const MAX_BODY: u32 = 99_999_999;

/// Default lower bound (inclusive) for generated bodies.
pub const DEFAULT_MIN_BODY: u32 = 4_000_000;

/// Default upper bound (exclusive) for generated bodies.
pub const DEFAULT_MAX_BODY: u32 = 80_000_000;

/// Weights applied to body digits, least-significant first, cycling.
pub const CHECK_WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Modulus of the check digit algorithm.
pub const CHECK_MODULUS: u32 = 11;
