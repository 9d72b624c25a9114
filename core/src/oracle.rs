use crate::Candidate;

/// Trait for abstracting the primality test
/// Pure and stateless: same answer for the same input on every call,
/// safe to invoke from any number of workers without synchronization
pub trait PrimalityOracle: Send + Sync {
    /// Returns true if `n` is prime
    /// Values below 2 (including all negatives) are never prime
    fn is_prime(&self, n: Candidate) -> bool;
}
