// ============================================================================
// Linear Search
// Left-to-right scan collecting every position equal to the target
// ============================================================================

/// Find every index where `sequence[i] == *item`.
///
/// Indices come back in ascending (scan) order. Comparison is by value
/// via `PartialEq`, never by identity. An empty result means no match and
/// is not an error.
///
/// # Example
/// ```
/// use numeric_formatting::search::linear_search_all_indices;
///
/// let letters = ['a', 'b', 'c', 'b', 'b', 'd'];
/// assert_eq!(linear_search_all_indices(&'b', &letters), vec![1, 3, 4]);
/// ```
pub fn linear_search_all_indices<T: PartialEq>(item: &T, sequence: &[T]) -> Vec<usize> {
    sequence
        .iter()
        .enumerate()
        .filter_map(|(idx, element)| if element == item { Some(idx) } else { None })
        .collect()
}

/// Find the first index where `sequence[i] == *item`, if any.
pub fn linear_search_first<T: PartialEq>(item: &T, sequence: &[T]) -> Option<usize> {
    sequence.iter().position(|element| element == item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_indices_letters() {
        let letters = ['a', 'b', 'c', 'b', 'b', 'd'];
        assert_eq!(linear_search_all_indices(&'b', &letters), vec![1, 3, 4]);
        assert_eq!(linear_search_all_indices(&'a', &letters), vec![0]);
        assert_eq!(linear_search_all_indices(&'d', &letters), vec![5]);
    }

    #[test]
    fn test_all_indices_no_match() {
        let letters = ['a', 'b', 'c'];
        assert!(linear_search_all_indices(&'z', &letters).is_empty());
    }

    #[test]
    fn test_all_indices_empty_sequence() {
        let empty: [i32; 0] = [];
        assert!(linear_search_all_indices(&1, &empty).is_empty());
        assert_eq!(linear_search_first(&1, &empty), None);
    }

    #[test]
    fn test_all_indices_value_equality() {
        // Distinct heap allocations compare equal by value.
        let words = vec![String::from("rust"), String::from("go"), String::from("rust")];
        let needle = String::from("rust");
        assert_eq!(linear_search_all_indices(&needle, &words), vec![0, 2]);
    }

    #[test]
    fn test_all_indices_every_element_matches() {
        let sevens = [7u8; 4];
        assert_eq!(linear_search_all_indices(&7, &sevens), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_first_match() {
        let letters = ['a', 'b', 'c', 'b', 'b', 'd'];
        assert_eq!(linear_search_first(&'b', &letters), Some(1));
        assert_eq!(linear_search_first(&'z', &letters), None);
    }

    proptest! {
        #[test]
        fn prop_indices_sound_and_complete(
            sequence in prop::collection::vec(0u8..5, 0..64),
            item in 0u8..5,
        ) {
            let indices = linear_search_all_indices(&item, &sequence);

            prop_assert!(indices.iter().all(|&i| sequence[i] == item));
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
            let occurrences = sequence.iter().filter(|&&x| x == item).count();
            prop_assert_eq!(indices.len(), occurrences);
            prop_assert_eq!(indices.first().copied(), linear_search_first(&item, &sequence));
        }
    }
}
