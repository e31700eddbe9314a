//! Three ways to compute the triangular number T(n) = 0 + 1 + ... + n.
//!
//! All three agree for every `n` whose result fits in a `u64`
//! (`n <= MAX_N`); larger inputs overflow.

/// Largest `n` whose triangular number fits in a `u64`.
pub const MAX_N: u64 = 6_074_000_999;

/// Deepest recursion [`sum_to_n_b`] is run with from the CLI.
pub const MAX_RECURSION_DEPTH: u64 = 10_000;

/// Iterative sum. O(n) time, O(1) space.
pub fn sum_to_n_a(n: u64) -> u64 {
    let mut sum = 0;
    for i in 0..=n {
        sum += i;
    }
    sum
}

/// Recursive sum. O(n) time and O(n) stack depth, so keep `n` small.
pub fn sum_to_n_b(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    n + sum_to_n_b(n - 1)
}

/// Closed form n(n+1)/2. O(1).
pub fn sum_to_n_c(n: u64) -> u64 {
    // Halve the even factor first so the product does not overflow early.
    if n % 2 == 0 {
        (n / 2) * (n + 1)
    } else {
        n * n.div_ceil(2)
    }
}
