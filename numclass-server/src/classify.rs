//! The two classifiers a query can run against, selected by the server mode.

/// `true` iff `n` is prime. Values below 2 are never prime.
pub fn is_prime(n: i32) -> bool {
    n > 1 && primes::is_prime(n as u64)
}

/// `true` iff `n` is a positive power of two.
pub fn is_power_of_two(n: i32) -> bool {
    // The bit trick alone would also accept zero, so non-positive values
    // are rejected up front.
    n > 0 && n & (n - 1) == 0
}
