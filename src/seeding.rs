// Standard tournament slot ordering for a power-of-two bracket.

/// Compute the bracket slot order for `n` seeds, where `n` is a power of
/// two. The result is a permutation of `1..=n` in which seed 1 and seed 2
/// land in opposite halves, so they can only meet in the final, seeds 1
/// and 4 in opposite quarters, and so on. For example `seed_order(8)`
/// yields `[1, 8, 4, 5, 2, 7, 3, 6]`.
///
/// Callers derive `n` as the next power of two at or above the
/// participant count; any other value is a programming error.
pub fn seed_order(n: u32) -> Result<Vec<u32>, String> {
    if n == 0 || !n.is_power_of_two() {
        return Err(format!("Bracket size must be a power of two, got {n}."));
    }
    Ok(seed_order_inner(n))
}

fn seed_order_inner(n: u32) -> Vec<u32> {
    if n == 1 {
        return vec![1];
    }
    let prev = seed_order_inner(n / 2);
    let mut out = Vec::with_capacity(n as usize);
    for seed in prev {
        // Each seed is paired with its complement in the larger bracket.
        out.push(seed);
        out.push(n + 1 - seed);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_case() {
        assert_eq!(seed_order(1).unwrap(), vec![1]);
    }

    #[test]
    fn test_known_orders() {
        assert_eq!(seed_order(2).unwrap(), vec![1, 2]);
        assert_eq!(seed_order(4).unwrap(), vec![1, 4, 2, 3]);
        assert_eq!(seed_order(8).unwrap(), vec![1, 8, 4, 5, 2, 7, 3, 6]);
    }

    #[test]
    fn test_is_permutation() {
        for n in [1u32, 2, 4, 8, 16, 32, 64] {
            let order = seed_order(n).unwrap();
            assert_eq!(order.len(), n as usize);
            let mut sorted = order.clone();
            sorted.sort();
            let expected: Vec<u32> = (1..=n).collect();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn test_top_seeds_maximally_separated() {
        for n in [2u32, 4, 8, 16, 32] {
            let order = seed_order(n).unwrap();
            // Seed 1 opens the draw; its round-1 opponent slot is the
            // weakest seed, so they meet again only in the final.
            assert_eq!(order[0], 1);
            assert_eq!(order[1], n);
            // Seed 2 anchors the opposite half.
            assert_eq!(order[n as usize / 2], 2);
        }
    }

    #[test]
    fn test_rejects_invalid_sizes() {
        assert!(seed_order(0).is_err());
        assert!(seed_order(3).is_err());
        assert!(seed_order(6).is_err());
        assert!(seed_order(12).is_err());
    }
}
