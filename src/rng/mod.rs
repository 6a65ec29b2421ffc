//! RNG adapter: routes sampling for the numeric side of the embedding
//! through the host runtime's generator.
//!
//! This module provides:
//! - [`SampleSource`]: the generator contract (seeding, one scalar draw per
//!   distribution, one bulk fill per distribution, and the integer
//!   upper-bound query)
//! - [`HostRng`]: the adapter satisfying that contract over any
//!   [`HostRuntime`], using only the host's bounded uniform primitive
//!
//! The host owns the single authoritative RNG stream, so seed mutation from
//! this side is either discarded ([`SampleSource::set_seed`]) or fatal
//! ([`SampleSource::set_seed_random`]); shadowing seed state locally would
//! let the two streams diverge. Everything is statically dispatched; the
//! contract has generic fill methods and is not object safe by design.

use num_traits::AsPrimitive;

use crate::host::HostRuntime;

#[cfg(test)]
mod tests;

/// Diagnostic raised when a fresh random seed is requested from the embedded
/// side. There is no host entry point for that; seeding silently would make
/// runs non-reproducible with no trace.
pub const SEED_FATAL_MESSAGE: &str =
    "the RNG seed has to be set through the host runtime's own seeding entry point";

/// Generator contract required from any sampling source plugged into the
/// numeric side of the embedding.
///
/// Fill methods are generic over the closed element set of the dense
/// containers (`f64`, `f32`, `i32`, `u32`); the [`AsPrimitive`] bound is the
/// per-element cast applied to each draw before it is stored.
pub trait SampleSource {
    /// Accepts a seed value without acting on it.
    ///
    /// The host owns seed state exclusively; the value is discarded so the
    /// contract signature stays satisfiable without pretending the seed took
    /// effect.
    fn set_seed(&mut self, seed: u32);

    /// Requests a fresh random seed. Always fatal; never returns normally.
    fn set_seed_random(&mut self);

    /// One draw uniformly distributed in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// One draw approximating a uniform integer in `[0, i32::MAX]`.
    fn uniform_int(&mut self) -> i32;

    /// One standard-normal draw.
    fn normal(&mut self) -> f64;

    /// Upper bound of [`SampleSource::uniform_int`] draws, for downstream
    /// scaling by callers.
    fn max_value(&self) -> i32;

    /// Fills `buf` with independent draws in `[0, 1)`.
    fn fill_uniform<T>(&mut self, buf: &mut [T])
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>;

    /// Fills `buf` with independent draws in `[low, high)`, each obtained as
    /// `draw * (high - low) + low`.
    fn fill_uniform_range<T>(&mut self, buf: &mut [T], low: f64, high: f64)
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>;

    /// Fills `buf` with independent normal draws scaled as
    /// `draw * std_dev + mean`.
    fn fill_normal<T>(&mut self, buf: &mut [T], mean: f64, std_dev: f64)
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>;

    /// Fills `buf` with independent integer draws uniform over
    /// `[low, high]`, both bounds inclusive.
    fn fill_uniform_int<T>(&mut self, buf: &mut [T], low: i32, high: i32)
    where
        T: Copy + 'static,
        i32: AsPrimitive<T>;
}

/// Sampling source that delegates every draw to a host runtime.
///
/// Stateless beyond the host handle it wraps: the host's global stream is
/// the only state any draw touches, which keeps draws reproducible under the
/// host's seeding model. Swapped in once for the process lifetime of the
/// embedding.
///
/// # Examples
/// ```
/// use linalg_bridge::host::SeededHost;
/// use linalg_bridge::rng::{HostRng, SampleSource};
///
/// let mut rng = HostRng::new(SeededHost::from_seed(42));
/// let mut buf = [0.0_f64; 8];
/// rng.fill_normal(&mut buf, 1.0, 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct HostRng<H: HostRuntime> {
    host: H,
}

impl<H: HostRuntime> HostRng<H> {
    /// Wraps a host runtime as a sampling source.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Borrows the wrapped host.
    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Unwraps the adapter, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }
}

impl<H: HostRuntime> SampleSource for HostRng<H> {
    fn set_seed(&mut self, _seed: u32) {}

    fn set_seed_random(&mut self) {
        self.host.fatal(SEED_FATAL_MESSAGE)
    }

    #[inline]
    fn uniform(&mut self) -> f64 {
        self.host.uniform(0.0, 1.0)
    }

    #[inline]
    fn uniform_int(&mut self) -> i32 {
        self.host.uniform(0.0, i32::MAX as f64) as i32
    }

    /// Marsaglia polar method over host uniform draws only; no host normal
    /// primitive is assumed.
    fn normal(&mut self) -> f64 {
        loop {
            let u1 = 2.0 * self.host.uniform(0.0, 1.0) - 1.0;
            let u2 = 2.0 * self.host.uniform(0.0, 1.0) - 1.0;
            let s = u1 * u1 + u2 * u2;
            if s > 0.0 && s < 1.0 {
                return u1 * ((-2.0 * s.ln()) / s).sqrt();
            }
        }
    }

    #[inline]
    fn max_value(&self) -> i32 {
        i32::MAX
    }

    fn fill_uniform<T>(&mut self, buf: &mut [T])
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>,
    {
        for slot in buf.iter_mut() {
            *slot = self.uniform().as_();
        }
    }

    fn fill_uniform_range<T>(&mut self, buf: &mut [T], low: f64, high: f64)
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>,
    {
        let range = high - low;
        for slot in buf.iter_mut() {
            *slot = (self.uniform() * range + low).as_();
        }
    }

    fn fill_normal<T>(&mut self, buf: &mut [T], mean: f64, std_dev: f64)
    where
        T: Copy + 'static,
        f64: AsPrimitive<T>,
    {
        for slot in buf.iter_mut() {
            *slot = (self.normal() * std_dev + mean).as_();
        }
    }

    fn fill_uniform_int<T>(&mut self, buf: &mut [T], low: i32, high: i32)
    where
        T: Copy + 'static,
        i32: AsPrimitive<T>,
    {
        debug_assert!(low <= high, "integer fill bounds out of order");

        // Widen through i64: `high - low + 1` overflows i32 for full-width
        // ranges.
        let span = high as i64 - low as i64 + 1;
        let scale = span as f64 / i32::MAX as f64;
        for slot in buf.iter_mut() {
            let raw = self.host.uniform(0.0, i32::MAX as f64) * scale;
            // Scaling can land one past `high` at the top of the range.
            let value = (raw as i64 + low as i64).min(high as i64) as i32;
            *slot = value.as_();
        }
    }
}
