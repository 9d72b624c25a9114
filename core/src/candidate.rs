/// One integer value to be tested for primality.
///
/// Signed 64-bit so the configured range (starting at 10^10) fits with
/// plenty of headroom for the `i * i <= n` trial-division bound.
pub type Candidate = i64;
