//! Deterministic xorshift RNG with salted forks, plus positional hashes for worldgen.
#![forbid(unsafe_code)]

mod hash;

pub use hash::{hash2, hash2_01, hash_str, mix32};

const ZERO_SEED_STATE: u32 = 0x1234_5678;

/// Salt used to derive a child stream from a parent seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Salt<'a> {
    Str(&'a str),
    Int(u32),
}

impl Salt<'_> {
    #[inline]
    fn value(self) -> u32 {
        match self {
            Salt::Str(s) => hash_str(s),
            Salt::Int(v) => v,
        }
    }
}

impl<'a> From<&'a str> for Salt<'a> {
    fn from(s: &'a str) -> Self {
        Salt::Str(s)
    }
}

impl<'a> From<&'a String> for Salt<'a> {
    fn from(s: &'a String) -> Self {
        Salt::Str(s.as_str())
    }
}

impl From<u32> for Salt<'_> {
    fn from(v: u32) -> Self {
        Salt::Int(v)
    }
}

impl From<i32> for Salt<'_> {
    fn from(v: i32) -> Self {
        Salt::Int(v as u32)
    }
}

impl From<usize> for Salt<'_> {
    fn from(v: usize) -> Self {
        Salt::Int(v as u32)
    }
}

/// Plain value; copying it duplicates the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededRng {
    seed: u32,
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_STATE } else { seed };
        Self { seed, state }
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn float(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    #[inline]
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.float()
    }

    /// Uniform integer in the inclusive range spanned by `a` and `b`, in either order.
    pub fn int(&mut self, a: i32, b: i32) -> i32 {
        let lo = a.min(b) as i64;
        let hi = a.max(b) as i64;
        let span = (hi - lo + 1) as f64;
        (lo + (self.float() * span).floor() as i64) as i32
    }

    /// Independent child stream keyed by this generator's seed, never by its current state.
    pub fn fork<'a>(&self, salt: impl Into<Salt<'a>>) -> SeededRng {
        SeededRng::new(mix32(self.seed ^ salt.into().value()))
    }
}
