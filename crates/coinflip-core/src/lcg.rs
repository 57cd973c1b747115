//! Linear congruential generator.

use rand_core::{impls, Error, RngCore, SeedableRng};

/// Multiplier of the LCG recurrence.
pub const MULTIPLIER: u32 = 1664525;
/// Increment of the LCG recurrence.
pub const INCREMENT: u32 = 1013904223;
/// Seed used by [`Lcg::default()`].
pub const DEFAULT_SEED: u32 = 12345;

/// 32-bit linear congruential generator.
///
/// The state is advanced as `seed = (1664525 * seed + 1013904223) mod 2^32`, the modulus being implied by
/// wrapping `u32` arithmetic. Bounded draws return `seed % max`, so small bounds only see the low bits of the state,
/// which have short periods (with bound 2 the output simply alternates). Outputs are kept bit-exact with this
/// recurrence, so do not use the generator where statistical quality matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    /// Creates a generator with the specified initial seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Returns the current generator state.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Advances the state and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coinflip_core::Lcg;
    ///
    /// let mut lcg = Lcg::new(42);
    /// assert_eq!(lcg.advance(), 1083814273);
    /// assert_eq!(lcg.seed(), 1083814273);
    /// ```
    pub fn advance(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.seed
    }

    /// Advances the state and returns it reduced to `[0, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero. Use [`checked_next()`](Self::checked_next()) to get `None` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coinflip_core::Lcg;
    ///
    /// let mut lcg = Lcg::new(42);
    /// assert_eq!(lcg.next(2), 1);
    /// assert_eq!(lcg.next(2), 0);
    /// ```
    ///
    /// ```should_panic
    /// use coinflip_core::Lcg;
    ///
    /// let mut lcg = Lcg::new(42);
    /// lcg.next(0);
    /// ```
    pub fn next(&mut self, max: u32) -> u32 {
        assert!(max > 0, "max must be positive, got {}", max);
        self.advance() % max
    }

    /// Same as [`next()`](Self::next()), but returns `None` for zero `max` without touching the state.
    pub fn checked_next(&mut self, max: u32) -> Option<u32> {
        if max == 0 {
            return None;
        }
        Some(self.next(max))
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        let upper = self.advance() as u64;
        let lower = self.advance() as u64;
        (upper << 32) | lower
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Truncates `state` to 32 bits, so `Lcg::seed_from_u64(42)` equals `Lcg::new(42)`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
