/// Sort values in ascending numeric order.
///
/// Inputs are finite by construction, so `total_cmp` only differs from the
/// usual ordering in placing `-0.0` before `0.0`, which compare equal anyway.
pub fn sort_numeric(values: &mut [f64]) {
    values.sort_by(|a, b| a.total_cmp(b));
}

/// Report the values that occur more than once.
///
/// The values are sorted numerically and every pair of equal neighbours
/// contributes one entry, so a value seen three times is reported twice.
/// Callers rely on that multiplicity.
pub fn find_duplicates(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sort_numeric(&mut sorted);

    sorted
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_numeric_not_lexicographic() {
        let mut values = [10.0, -4.0, 2.0, 100.0];
        sort_numeric(&mut values);
        assert_eq!(values, [-4.0, 2.0, 10.0, 100.0]);
    }

    #[test]
    fn test_no_duplicates() {
        assert!(find_duplicates(&[0.0, 5.0, 10.0, 13.0]).is_empty());
    }

    #[test]
    fn test_single_duplicate_unsorted_input() {
        assert_eq!(find_duplicates(&[5.0, 0.0, -5.0, 0.0]), vec![0.0]);
    }

    #[test]
    fn test_two_distinct_duplicates() {
        assert_eq!(find_duplicates(&[0.0, 5.0, 0.0, 5.0]), vec![0.0, 5.0]);
    }

    #[test]
    fn test_multiplicity_counts_neighbour_pairs() {
        assert_eq!(find_duplicates(&[3.0, 1.0, 3.0, 3.0]), vec![3.0, 3.0]);
        assert_eq!(find_duplicates(&[7.0; 4]), vec![7.0, 7.0, 7.0]);
    }

    #[test]
    fn test_signed_zero_counts_as_duplicate() {
        assert_eq!(find_duplicates(&[-0.0, 1.0, 0.0, 2.0]).len(), 1);
    }

    #[test]
    fn test_multi_digit_duplicates_found_after_numeric_sort() {
        assert_eq!(find_duplicates(&[10.0, 2.0, -4.0, 10.0]), vec![10.0]);
    }
}
