//! Random generation of valid RUTs.
//!
//! Every generated RUT carries the check character computed from its body, so
//! it is always valid. Bodies are drawn uniformly from `[min, max)`.
//!
//! Generation is deterministic when a seed is given; otherwise each generator
//! owns a fresh entropy-seeded RNG, so nothing is shared between callers.
//!
//! ```rust
//! use chilean_rut::generate::{unique_many, GeneratorConfig};
//!
//! let config = GeneratorConfig::new(1_000, 2_000).with_seed(42);
//! let ruts = unique_many(10, &config).unwrap();
//! assert_eq!(ruts.len(), 10);
//! assert!(ruts.iter().all(|r| r.is_valid()));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::codec::compute_check_character;
use crate::error::RutError;
use crate::limits::{DEFAULT_MAX_BODY, DEFAULT_MIN_BODY, MAX_BODY};
use crate::model::Rut;

/// Range and seed for RUT generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Smallest body that may be drawn.
    pub min: u32,
    /// Bodies are drawn strictly below this.
    pub max: u32,
    /// Fixed seed for reproducible output, or None for entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_BODY,
            max: DEFAULT_MAX_BODY,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates an unseeded config over `[min, max)`.
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max,
            seed: None,
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that `[min, max)` is non-empty and holds only grammar-valid bodies.
    pub fn validate(&self) -> Result<(), RutError> {
        if self.min == 0 || self.min >= self.max || self.max > MAX_BODY + 1 {
            return Err(RutError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Number of distinct bodies in the range.
    pub fn range_len(&self) -> u32 {
        self.max.saturating_sub(self.min)
    }
}

/// Source of random valid RUTs.
///
/// Also an endless [`Iterator`] of RUTs.
#[derive(Debug, Clone)]
pub struct RutGenerator {
    rng: StdRng,
    min: u32,
    max: u32,
}

impl RutGenerator {
    /// Creates a generator from a config.
    pub fn new(config: &GeneratorConfig) -> Result<Self, RutError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(
            min = config.min,
            max = config.max,
            seed = ?config.seed,
            "created rut generator"
        );
        Ok(Self {
            rng,
            min: config.min,
            max: config.max,
        })
    }

    /// Creates a seeded generator over the default range.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min: DEFAULT_MIN_BODY,
            max: DEFAULT_MAX_BODY,
        }
    }

    /// Draws one RUT.
    pub fn next_rut(&mut self) -> Rut {
        let body = self.rng.gen_range(self.min..self.max);
        // range was validated, so body is in grammar
        Rut::from_raw(body, compute_check_character(body))
    }

    /// Draws `n` RUTs; duplicates are possible.
    pub fn many(&mut self, n: usize) -> Vec<Rut> {
        (0..n).map(|_| self.next_rut()).collect()
    }

    /// Draws until `n` RUTs with distinct bodies are collected, in draw order.
    ///
    /// Never returns if `n` exceeds the number of bodies in the range; the
    /// caller must keep `n` within [`GeneratorConfig::range_len`].
    pub fn unique(&mut self, n: usize) -> Vec<Rut> {
        let mut seen = FxHashSet::with_capacity_and_hasher(n, Default::default());
        let mut ruts = Vec::with_capacity(n);
        let mut rejected = 0usize;
        while ruts.len() < n {
            let rut = self.next_rut();
            if seen.insert(rut.body()) {
                ruts.push(rut);
            } else {
                rejected += 1;
            }
        }
        debug!(n, rejected, "drew unique ruts");
        ruts
    }
}

impl Iterator for RutGenerator {
    type Item = Rut;

    fn next(&mut self) -> Option<Rut> {
        Some(self.next_rut())
    }
}

/// Draws one valid RUT.
pub fn random_one(config: &GeneratorConfig) -> Result<Rut, RutError> {
    Ok(RutGenerator::new(config)?.next_rut())
}

/// Draws `n` valid RUTs; duplicates are possible.
pub fn random_many(n: usize, config: &GeneratorConfig) -> Result<Vec<Rut>, RutError> {
    Ok(RutGenerator::new(config)?.many(n))
}

/// Draws `n` valid RUTs with pairwise-distinct bodies.
///
/// See [`RutGenerator::unique`] for the range/count obligation.
pub fn unique_many(n: usize, config: &GeneratorConfig) -> Result<Vec<Rut>, RutError> {
    Ok(RutGenerator::new(config)?.unique(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_one_is_valid() {
        let rut = random_one(&GeneratorConfig::default()).unwrap();
        assert!(rut.is_valid());
        assert!((DEFAULT_MIN_BODY..DEFAULT_MAX_BODY).contains(&rut.body()));
    }

    #[test]
    fn test_random_many_lengths() {
        for n in [0, 1, 5, 10, 15] {
            let ruts = random_many(n, &GeneratorConfig::default()).unwrap();
            assert_eq!(ruts.len(), n);
            assert!(ruts.iter().all(Rut::is_valid));
        }
    }

    #[test]
    fn test_unique_many_lengths() {
        for n in [0, 1, 5, 10, 15] {
            let ruts = unique_many(n, &GeneratorConfig::default()).unwrap();
            assert_eq!(ruts.len(), n);
            assert!(ruts.iter().all(Rut::is_valid));
        }
    }

    #[test]
    fn test_unique_exhausts_small_range() {
        let config = GeneratorConfig::new(10, 20).with_seed(7);
        let mut ruts = unique_many(10, &config).unwrap();
        ruts.sort();
        let bodies: Vec<u32> = ruts.iter().map(Rut::body).collect();
        assert_eq!(bodies, (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let config = GeneratorConfig::default().with_seed(42);
        assert_eq!(
            random_many(20, &config).unwrap(),
            random_many(20, &config).unwrap()
        );
        assert_eq!(random_one(&config).unwrap(), random_one(&config).unwrap());

        let mut a = RutGenerator::seeded(9);
        let mut b = RutGenerator::seeded(9);
        assert_eq!(a.unique(5), b.unique(5));
    }

    #[test]
    fn test_generator_respects_range() {
        let config = GeneratorConfig::new(1, 18_000_000).with_seed(1);
        let generator = RutGenerator::new(&config).unwrap();
        for rut in generator.take(200) {
            assert!((1..18_000_000).contains(&rut.body()));
            assert!(rut.is_valid());
        }
    }

    #[test]
    fn test_invalid_ranges() {
        for (min, max) in [(0, 10), (10, 10), (20, 10), (1, MAX_BODY + 2)] {
            let config = GeneratorConfig::new(min, max);
            assert_eq!(
                RutGenerator::new(&config).unwrap_err(),
                RutError::InvalidRange { min, max }
            );
        }
        assert!(GeneratorConfig::new(1, MAX_BODY + 1).validate().is_ok());
    }

    #[test]
    fn test_range_len() {
        assert_eq!(GeneratorConfig::new(10, 20).range_len(), 10);
        assert_eq!(GeneratorConfig::default().range_len(), 76_000_000);
    }
}
