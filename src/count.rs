//! Counting equivalence relations: how many distinct equivalence relations
//! exist on an n-element set. This equals the number of set partitions of n
//! elements, the n-th Bell number.

/// Largest `n` whose Bell number fits in a `u64`. B(26) already overflows.
pub const MAX_COUNTABLE_N: usize = 25;

/// The number of distinct equivalence relations on a set of `n` elements,
/// i.e. the Bell number B(n). Returns 0 for `n = 0`.
///
/// Computed with the Bell-triangle recurrence: two rolling rows, additions
/// only, O(n²) time and O(n) space.
///
/// # Panics
///
/// Panics if `n > MAX_COUNTABLE_N`, where the result no longer fits in a
/// `u64`. The ceiling is hard; the sum is checked so an overflow can never
/// wrap silently.
#[must_use]
pub fn count_equivalence_relations(n: usize) -> u64 {
    if n == 0 {
        return 0;
    }
    if n == 1 {
        return 1;
    }
    assert!(
        n <= MAX_COUNTABLE_N,
        "Bell number B({}) does not fit in a u64 (max n is {})",
        n,
        MAX_COUNTABLE_N
    );

    let mut prev = vec![0u64; n];
    let mut curr = vec![0u64; n];
    prev[0] = 1;

    // Row i starts with B(i) and ends with B(i + 1), so row n - 1 already
    // holds B(n). Stopping there keeps the sums bounded by B(n); one more
    // row would compute B(n + 1), which overflows at the ceiling.
    for i in 1..n {
        curr[0] = prev[i - 1];
        for j in 1..=i {
            curr[j] = curr[j - 1].checked_add(prev[j - 1]).unwrap();
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_bell_numbers() {
        assert_eq!(count_equivalence_relations(0), 0);
        assert_eq!(count_equivalence_relations(1), 1);
        assert_eq!(count_equivalence_relations(2), 2);
        assert_eq!(count_equivalence_relations(3), 5);
        assert_eq!(count_equivalence_relations(4), 15);
        assert_eq!(count_equivalence_relations(5), 52);
        assert_eq!(count_equivalence_relations(6), 203);
        assert_eq!(count_equivalence_relations(10), 115_975);
    }

    #[test]
    fn representable_up_to_the_ceiling() {
        // The whole supported range must be computable, the ceiling value
        // included; only B(MAX_COUNTABLE_N + 1) is allowed to be out of
        // reach.
        assert_eq!(count_equivalence_relations(MAX_COUNTABLE_N - 1), 445_958_869_294_805_289);
        assert_eq!(count_equivalence_relations(MAX_COUNTABLE_N), 4_638_590_332_229_999_353);
    }

    #[test]
    #[should_panic]
    fn past_the_ceiling_panics() {
        count_equivalence_relations(MAX_COUNTABLE_N + 1);
    }
}
