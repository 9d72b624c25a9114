use crate::{Candidate, PrimalityOracle};

/// Trial-division oracle: checks 2, 3, then every 6k±1 up to √n
pub struct TrialDivision;

impl PrimalityOracle for TrialDivision {
    fn is_prime(&self, n: Candidate) -> bool {
        if n <= 3 {
            return n > 1;
        }
        if n % 2 == 0 || n % 3 == 0 {
            return false;
        }

        let mut i: Candidate = 5;
        while i * i <= n {
            if n % i == 0 || n % (i + 2) == 0 {
                return false;
            }
            i += 6;
        }
        true
    }
}
