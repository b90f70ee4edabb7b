use crate::RangeError;

#[inline]
pub fn is_sorted_non_decreasing(data: &[i64]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}

/// A partition needs a non-empty range inside the sequence.
#[inline]
pub fn check_partition_range(len: usize, low: usize, high: usize) -> Result<(), RangeError> {
    if low > high {
        return Err(RangeError::Inverted { low, high });
    }
    check_high(len, high)
}

/// A sort range may be empty; only non-empty ranges must lie inside the sequence.
#[inline]
pub fn check_sort_range(len: usize, low: usize, high: usize) -> Result<(), RangeError> {
    if low > high {
        return Ok(());
    }
    check_high(len, high)
}

#[inline]
fn check_high(len: usize, high: usize) -> Result<(), RangeError> {
    if high >= len {
        return Err(RangeError::OutOfBounds { high, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sortedness_check() {
        assert!(is_sorted_non_decreasing(&[]));
        assert!(is_sorted_non_decreasing(&[3]));
        assert!(is_sorted_non_decreasing(&[1, 1, 2, 9]));
        assert!(!is_sorted_non_decreasing(&[1, 3, 2]));
    }

    #[test]
    fn range_checks() {
        assert_eq!(check_partition_range(9, 0, 8), Ok(()));
        assert_eq!(check_partition_range(9, 4, 4), Ok(()));
        assert_eq!(
            check_partition_range(9, 5, 4),
            Err(RangeError::Inverted { low: 5, high: 4 })
        );
        assert_eq!(
            check_partition_range(9, 0, 9),
            Err(RangeError::OutOfBounds { high: 9, len: 9 })
        );

        assert_eq!(check_sort_range(0, 1, 0), Ok(()));
        assert_eq!(check_sort_range(9, 3, 3), Ok(()));
        assert_eq!(
            check_sort_range(0, 0, 0),
            Err(RangeError::OutOfBounds { high: 0, len: 0 })
        );
    }
}
