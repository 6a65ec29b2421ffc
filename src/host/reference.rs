//! Reference host implementation for tests and standalone embeddings.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use super::HostRuntime;

/// Host runtime backed by a seeded [`StdRng`].
///
/// Stands in for the real embedding host: it owns the generator stream the
/// way the host would, so adapter behaviour can be checked against the
/// host's reproducibility contract (same seed, same draw sequence). The
/// fatal-error capability maps to a panic, the in-process analogue of the
/// host aborting the current call.
///
/// # Examples
/// ```
/// use linalg_bridge::host::{HostRuntime, SeededHost};
///
/// let mut a = SeededHost::from_seed(42);
/// let mut b = SeededHost::from_seed(42);
/// assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
/// ```
#[derive(Clone, Debug)]
pub struct SeededHost {
    rng: StdRng,
    seed: u64,
}

impl SeededHost {
    /// Creates a host whose stream is seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this host's stream was created from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl HostRuntime for SeededHost {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        Uniform::new(low, high).sample(&mut self.rng)
    }

    fn fatal(&self, message: &str) -> ! {
        panic!("{}", message);
    }
}
