pub mod errors;

pub use errors::{GenDataError, GenDataErrorCategory, GenDataResult};

use serde::Serialize;
use std::fmt::{Display, Formatter};

pub const DEFAULT_SEED: u64 = 154;
pub const DEFAULT_ELEMENT_RANGE: ElementRange = ElementRange { min: 0, max: 2 };

/// Inclusive bounds for generated matrix elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ElementRange {
    min: i64,
    max: i64,
}

impl ElementRange {
    pub fn new(min: i64, max: i64) -> GenDataResult<Self> {
        if min > max {
            return Err(GenDataError::input_validation(
                "INPUT.ELEMENT_RANGE",
                format!("element range minimum {} exceeds maximum {}", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Largest absolute value any element in the range can take.
    pub fn magnitude(&self) -> u64 {
        self.min.unsigned_abs().max(self.max.unsigned_abs())
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for ElementRange {
    fn default() -> Self {
        DEFAULT_ELEMENT_RANGE
    }
}

impl Display for ElementRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Element count of a `dim x dim` matrix, rejecting dimensions whose square
/// does not fit in `usize`.
pub fn square_len(dim: usize) -> GenDataResult<usize> {
    dim.checked_mul(dim).ok_or_else(|| {
        GenDataError::input_validation(
            "INPUT.DIM_SIZE",
            format!("matrix dimension {} is too large to square", dim),
        )
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    seed: u64,
    dim_size: usize,
    array_size: usize,
    data_type: String,
    element_range: ElementRange,
}

impl GenerationOptions {
    pub fn new(dim_size: usize, data_type: impl Into<String>) -> GenDataResult<Self> {
        Self::with_seed(DEFAULT_SEED, dim_size, data_type, ElementRange::default())
    }

    pub fn with_seed(
        seed: u64,
        dim_size: usize,
        data_type: impl Into<String>,
        element_range: ElementRange,
    ) -> GenDataResult<Self> {
        if dim_size == 0 {
            return Err(GenDataError::input_validation(
                "INPUT.DIM_SIZE",
                "matrix dimension must be at least 1",
            ));
        }
        let array_size = square_len(dim_size)?;
        let data_type = data_type.into();
        if data_type.trim().is_empty() {
            return Err(GenDataError::input_validation(
                "INPUT.DATA_TYPE",
                "element data type must not be empty",
            ));
        }

        Ok(Self {
            seed,
            dim_size,
            array_size,
            data_type,
            element_range,
        })
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub const fn dim_size(&self) -> usize {
        self.dim_size
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub const fn element_range(&self) -> ElementRange {
        self.element_range
    }

    pub const fn array_size(&self) -> usize {
        self.array_size
    }
}

/// Square integer matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dim: usize,
    elements: Vec<i64>,
}

impl Matrix {
    pub fn new(dim: usize, elements: Vec<i64>) -> GenDataResult<Self> {
        let expected = square_len(dim)?;
        if elements.len() != expected {
            return Err(GenDataError::input_validation(
                "INPUT.MATRIX_SHAPE",
                format!(
                    "a {dim}x{dim} matrix needs {} elements, got {}",
                    expected,
                    elements.len()
                ),
            ));
        }
        Ok(Self { dim, elements })
    }

    pub const fn dim(&self) -> usize {
        self.dim
    }

    pub fn elements(&self) -> &[i64] {
        &self.elements
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        self.elements.get(row * self.dim + col).copied()
    }

    pub fn element_sum(&self) -> i64 {
        self.elements
            .iter()
            .fold(0_i64, |acc, value| acc.wrapping_add(*value))
    }
}
