use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Unbiased in-place Fisher–Yates shuffle.
///
/// For `i` from the last index down to 1, picks `j` uniformly in `[0, i]`
/// and swaps elements `i` and `j`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
	for i in (1..items.len()).rev() {
		let j = rng.random_range(0..=i);
		items.swap(i, j);
	}
}

/// Returns `count` elements drawn without replacement from `items`, in random order.
///
/// `items` is copied before shuffling and left untouched.
/// If `count` exceeds `items.len()`, every element is returned.
pub fn sample_with<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
	let mut pool = items.to_vec();
	shuffle(&mut pool, rng);
	pool.truncate(count);
	pool
}

/// Random subset selector shared by every request.
///
/// Wraps a non-cryptographic `StdRng` behind a mutex so a single sampler can
/// be used from several threads. Seed it with [`Sampler::seeded`] to get
/// reproducible output.
#[derive(Debug)]
pub struct Sampler {
	rng: Mutex<StdRng>,
}

impl Sampler {
	/// Creates a sampler seeded from the operating system.
	pub fn new() -> Self {
		Self {
			rng: Mutex::new(StdRng::from_os_rng()),
		}
	}

	/// Creates a deterministic sampler.
	pub fn seeded(seed: u64) -> Self {
		Self {
			rng: Mutex::new(StdRng::seed_from_u64(seed)),
		}
	}

	/// Shuffled subset of `items` of length `min(count, items.len())`.
	///
	/// # Guarantees
	/// - Every element of the result comes from `items`
	/// - No element is repeated beyond the duplicates already in `items`
	/// - Every permutation of `items` is equally likely before truncation
	pub fn sample<T: Clone>(&self, items: &[T], count: usize) -> Vec<T> {
		// A panic mid-shuffle cannot leave the generator in an invalid state.
		let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
		sample_with(items, count, &mut *rng)
	}

	/// Uniform index in `[0, len)`, or `None` when `len` is zero.
	pub fn pick(&self, len: usize) -> Option<usize> {
		if len == 0 {
			return None;
		}
		let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
		Some(rng.random_range(0..len))
	}
}

impl Default for Sampler {
	fn default() -> Self {
		Self::new()
	}
}
