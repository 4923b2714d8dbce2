/// Seed substituted whenever a caller asks for the degenerate seed `0`.
pub const DEFAULT_SEED: i32 = 0x2545_f491;

// |i32::MIN| / 2^31 would be exactly 1.0; keep the half-open range.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Snapshot of a [`XorShift32`] state, used to replay a draw sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RngState(pub i32);

/// Tiny xorshift32 generator with 32-bit signed wrapping semantics.
///
/// One draw is `s ^= s << 13; s ^= s >> 17; s ^= s << 5` where `>>` is an arithmetic shift, and
/// the drawn value is `|s| / 2^31`. The generator is an explicit handle: every consumer takes it
/// by `&mut`, so two call sites can only interleave draws when the caller lets them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift32 {
    state: i32,
}

impl XorShift32 {
    pub fn new(seed: i32) -> Self {
        Self {
            state: guard_seed(seed),
        }
    }

    /// Fresh non-zero seed in `[1, 1e9)` from ambient entropy (the "randomize" action).
    pub fn from_entropy() -> Self {
        Self::new(rand::random_range(1..1_000_000_000))
    }

    pub fn reseed(&mut self, seed: i32) {
        self.state = guard_seed(seed);
    }

    pub fn seed(&self) -> i32 {
        self.state
    }

    pub fn snapshot(&self) -> RngState {
        RngState(self.state)
    }

    pub fn restore(&mut self, state: RngState) {
        self.state = guard_seed(state.0);
    }

    pub fn next_i32(&mut self) -> i32 {
        let mut s = self.state;
        s ^= s.wrapping_shl(13);
        s ^= s >> 17;
        s ^= s.wrapping_shl(5);
        // The arithmetic shift makes a few states collapse to 0, which xorshift never leaves.
        if s == 0 {
            tracing::debug!("xorshift state collapsed to 0, substituting default seed");
            s = DEFAULT_SEED;
        }
        self.state = s;
        s
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let s = self.next_i32();
        let v = f64::from(s.unsigned_abs()) / 2_147_483_648.0;
        v.min(BELOW_ONE)
    }

    /// Next float in `[lo, hi)`.
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform index in `0..len`; `len` must be > 0.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// `floor(rng * span) + lo`, the integer draw used by the shuffle presets.
    pub fn int_below(&mut self, lo: u32, span: u32) -> u32 {
        lo + (self.next_f64() * f64::from(span)).floor() as u32
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

fn guard_seed(seed: i32) -> i32 {
    if seed == 0 {
        tracing::warn!(
            default_seed = DEFAULT_SEED,
            "seed 0 is a fixed point of xorshift, using default seed"
        );
        DEFAULT_SEED
    } else {
        seed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/xorshift.rs"]
mod tests;
