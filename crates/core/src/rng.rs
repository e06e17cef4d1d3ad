//! RNG module - injectable randomness for tile spawning
//!
//! The engine never reaches for ambient randomness. Anything that places a tile takes a
//! [`RandomSource`], so tests can script exact cell choices and tile values.
//!
//! Also provides a simple LCG for deterministic, seedable games.

/// Source of uniform randomness used when spawning tiles.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. Callers never pass `bound == 0`.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Fair coin flip.
    fn next_bool(&mut self) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }

    fn next_bool(&mut self) -> bool {
        (**self).next_bool()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        // Low bits of a power-of-two LCG have short periods; scale by the high bits instead.
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}

/// Replays fixed sequences of picks and coin flips, cycling when exhausted.
///
/// Useful for reproducible scenarios: `picks` feed [`RandomSource::next_below`] (reduced
/// modulo the bound) and `coins` feed [`RandomSource::next_bool`]. Empty sequences yield
/// `0` and `true`.
#[derive(Debug, Clone, Default)]
pub struct SequenceRng {
    picks: Vec<u32>,
    coins: Vec<bool>,
    pick_pos: usize,
    coin_pos: usize,
}

impl SequenceRng {
    pub fn new(picks: impl Into<Vec<u32>>, coins: impl Into<Vec<bool>>) -> Self {
        Self {
            picks: picks.into(),
            coins: coins.into(),
            pick_pos: 0,
            coin_pos: 0,
        }
    }
}

impl RandomSource for SequenceRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        if self.picks.is_empty() {
            return 0;
        }
        let v = self.picks[self.pick_pos % self.picks.len()];
        self.pick_pos += 1;
        v % bound
    }

    fn next_bool(&mut self) -> bool {
        if self.coins.is_empty() {
            return true;
        }
        let v = self.coins[self.coin_pos % self.coins.len()];
        self.coin_pos += 1;
        v
    }
}
