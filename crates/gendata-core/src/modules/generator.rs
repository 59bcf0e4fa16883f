//! Seeded element source for fixture matrices.
//!
//! Uses ChaCha20 (`rand_chacha`) seeded through `seed_from_u64`, whose output
//! stream is specified independently of platform and word size. Fixtures stay
//! reproducible as long as the seed and the order of calls are unchanged.

use crate::domain::{ElementRange, GenDataResult, Matrix, square_len};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    rng: ChaCha20Rng,
}

impl MatrixGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draws `count` values uniformly from the inclusive `range`.
    pub fn generate_elements(&mut self, count: usize, range: ElementRange) -> Vec<i64> {
        (0..count)
            .map(|_| self.rng.random_range(range.min()..=range.max()))
            .collect()
    }

    pub fn generate_matrix(&mut self, dim: usize, range: ElementRange) -> GenDataResult<Matrix> {
        let elements = self.generate_elements(square_len(dim)?, range);
        tracing::debug!(dim, %range, "generated matrix elements");
        Matrix::new(dim, elements)
    }
}
