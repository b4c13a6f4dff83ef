//! Prime number helpers used to size the hash tables.
//!
//! Quadratic probing relies on the slot count being prime: over a prime
//! modulus the first half of the probe sequence visits distinct slots,
//! so a table kept at most half full always reaches an empty slot.

/// Returns whether `n` is prime.
///
/// Trial division by odd numbers up to the square root of `n`. Not fast,
/// but capacities are only computed on construction and rehash.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut i: usize = 3;
    while i.saturating_mul(i) <= n {
        if n % i == 0 {
            return false;
        }
        i = i.saturating_add(2);
    }
    true
}

/// Returns an odd prime at least as large as `n`.
///
/// Even inputs are bumped to the next odd number before scanning, so the
/// result is always odd (`next_prime(2)` is 3). Treats 0 like 1.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n.saturating_add(1) } else { n };
    while !is_prime(candidate) {
        candidate = candidate.saturating_add(2);
    }
    candidate
}
