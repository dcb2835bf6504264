//! Deterministic sequence generator (Park-Miller linear congruential)
//!
//! Every generator consumer (price history, signal draw, volatility history)
//! is handed its own explicitly seeded instance, so reseeding one consumer
//! can never perturb another's stream.

const MODULUS: i64 = 2_147_483_647;
const MULTIPLIER: i64 = 16_807;

/// Restartable pseudo-random stream over `[0, 1)`.
///
/// Recurrence: `s <- (s * 16807) mod 2147483647`, output `(s - 1) / 2147483646`.
/// The same seed yields a byte-identical sequence across runs.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: i64,
}

impl SeededRng {
    /// Create a generator from an integer seed.
    ///
    /// Seeds congruent to 0 mod 2147483647 would collapse the stream to a
    /// fixed point; they are mapped to 1 instead.
    pub fn new(seed: i64) -> Self {
        let mut state = seed.rem_euclid(MODULUS);
        if state == 0 {
            state = 1;
        }
        Self { state }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }
}
