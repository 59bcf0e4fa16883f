use crate::domain::{ElementRange, GenDataError, GenDataResult, Matrix, square_len};

/// Row-major product of two `dim x dim` matrices stored as flat slices.
///
/// Accumulation wraps in two's complement, matching a fixed-width integer
/// multiply on the target rather than panicking on overflow.
pub fn multiply_square(lhs: &[i64], rhs: &[i64], dim: usize) -> GenDataResult<Vec<i64>> {
    let expected = square_len(dim)?;
    if lhs.len() != expected || rhs.len() != expected {
        return Err(GenDataError::input_validation(
            "INPUT.MATMUL_SHAPE",
            format!(
                "cannot multiply {}-element and {}-element operands as {dim}x{dim} matrices",
                lhs.len(),
                rhs.len()
            ),
        ));
    }

    let mut product = vec![0_i64; expected];
    for row in 0..dim {
        let lhs_row = &lhs[row * dim..(row + 1) * dim];
        for col in 0..dim {
            product[row * dim + col] = lhs_row
                .iter()
                .enumerate()
                .fold(0_i64, |acc, (k, value)| {
                    acc.wrapping_add(value.wrapping_mul(rhs[k * dim + col]))
                });
        }
    }

    Ok(product)
}

pub fn matmul(lhs: &Matrix, rhs: &Matrix) -> GenDataResult<Matrix> {
    if lhs.dim() != rhs.dim() {
        return Err(GenDataError::input_validation(
            "INPUT.MATMUL_SHAPE",
            format!("operand dimensions differ: {} vs {}", lhs.dim(), rhs.dim()),
        ));
    }
    let product = multiply_square(lhs.elements(), rhs.elements(), lhs.dim())?;
    Matrix::new(lhs.dim(), product)
}

/// Largest value representable by the C integer type names this tool knows
/// about. Unsigned types get one more value bit than their signed peers.
pub fn c_integer_max(data_type: &str) -> Option<u128> {
    let normalized = data_type.split_whitespace().collect::<Vec<_>>().join(" ");
    let (bits, signed) = match normalized.as_str() {
        "char" | "signed char" | "int8_t" => (8, true),
        "unsigned char" | "uint8_t" => (8, false),
        "short" | "short int" | "signed short" | "signed short int" | "int16_t" => (16, true),
        "unsigned short" | "unsigned short int" | "uint16_t" => (16, false),
        "int" | "signed" | "signed int" | "int32_t" => (32, true),
        "unsigned" | "unsigned int" | "uint32_t" => (32, false),
        "long" | "long int" | "signed long" | "signed long int" | "int64_t" | "long long"
        | "long long int" | "signed long long" | "signed long long int" => (64, true),
        "unsigned long" | "unsigned long int" | "uint64_t" | "unsigned long long"
        | "unsigned long long int" | "size_t" => (64, false),
        _ => return None,
    };
    let value_bits = if signed { bits - 1 } else { bits };
    Some((1_u128 << value_bits) - 1)
}

/// Largest magnitude a single product entry can reach: `dim * magnitude^2`,
/// saturating at `u128::MAX`.
pub fn max_product_magnitude(dim: usize, range: ElementRange) -> u128 {
    let magnitude = u128::from(range.magnitude());
    (dim as u128)
        .saturating_mul(magnitude)
        .saturating_mul(magnitude)
}

/// Describes the overflow when the worst-case product entry does not fit
/// the declared element type. Unknown type names are never flagged.
pub fn overflow_risk(data_type: &str, dim: usize, range: ElementRange) -> Option<String> {
    let limit = c_integer_max(data_type)?;
    let worst = max_product_magnitude(dim, range);
    (worst > limit).then(|| {
        format!(
            "worst-case product entry {} exceeds '{}' maximum {} for dim {} and range {}",
            worst, data_type, limit, dim, range
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{c_integer_max, matmul, max_product_magnitude, multiply_square, overflow_risk};
    use crate::domain::{ElementRange, Matrix};

    #[test]
    fn multiply_square_matches_hand_computed_product() {
        let lhs = [1, 2, 3, 4];
        let rhs = [5, 6, 7, 8];
        let product = multiply_square(&lhs, &rhs, 2).expect("product should compute");
        assert_eq!(product, vec![19, 22, 43, 50]);
    }

    #[test]
    fn identity_is_neutral() {
        let identity = [1, 0, 0, 0, 1, 0, 0, 0, 1];
        let values = [2, 0, 1, 1, 2, 2, 0, 0, 1];
        assert_eq!(
            multiply_square(&identity, &values, 3).expect("product"),
            values.to_vec()
        );
        assert_eq!(
            multiply_square(&values, &identity, 3).expect("product"),
            values.to_vec()
        );
    }

    #[test]
    fn mismatched_operand_lengths_are_rejected() {
        let error = multiply_square(&[1, 2, 3, 4], &[1, 2, 3], 2).expect_err("shape mismatch");
        assert_eq!(error.placeholder(), "INPUT.MATMUL_SHAPE");
    }

    #[test]
    fn matrix_product_rejects_dimension_mismatch() {
        let lhs = Matrix::new(1, vec![3]).expect("matrix");
        let rhs = Matrix::new(2, vec![1, 2, 3, 4]).expect("matrix");
        assert!(matmul(&lhs, &rhs).is_err());

        let square = matmul(&rhs, &rhs).expect("product");
        assert_eq!(square.elements(), &[7, 10, 15, 22]);
    }

    #[test]
    fn known_c_types_resolve_to_limits() {
        assert_eq!(c_integer_max("int"), Some(i32::MAX as u128));
        assert_eq!(c_integer_max("long  long"), Some(i64::MAX as u128));
        assert_eq!(c_integer_max("short"), Some(i16::MAX as u128));
        assert_eq!(c_integer_max("float"), None);
    }

    #[test]
    fn unsigned_c_types_get_one_more_value_bit() {
        assert_eq!(c_integer_max("unsigned char"), Some(u8::MAX as u128));
        assert_eq!(c_integer_max("uint16_t"), Some(u16::MAX as u128));
        assert_eq!(c_integer_max("unsigned  int"), Some(u32::MAX as u128));
        assert_eq!(c_integer_max("unsigned"), Some(u32::MAX as u128));
        assert_eq!(c_integer_max("uint64_t"), Some(u64::MAX as u128));

        let range = ElementRange::new(0, 2).expect("range");
        assert!(overflow_risk("char", 40, range).is_some());
        assert!(overflow_risk("unsigned char", 40, range).is_none());
        assert!(overflow_risk("unsigned char", 64, range).is_some());
    }

    #[test]
    fn worst_case_magnitude_saturates_instead_of_overflowing() {
        let range = ElementRange::new(i64::MIN, i64::MAX).expect("range");
        assert_eq!(max_product_magnitude(usize::MAX, range), u128::MAX);
        assert!(overflow_risk("uint64_t", 4, range).is_some());
    }

    #[test]
    fn overflow_risk_flags_only_undersized_types() {
        let range = ElementRange::new(0, 2).expect("range");
        assert_eq!(max_product_magnitude(32, range), 128);
        assert!(overflow_risk("int", 32, range).is_none());
        assert!(overflow_risk("char", 32, range).is_some());
        assert!(overflow_risk("float", 1_000_000, range).is_none());
    }
}
