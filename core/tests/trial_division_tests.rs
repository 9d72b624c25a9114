use prime_search_core::{PrimalityOracle, TrialDivision};
use std::sync::Arc;

// ============================================================
// Boundary behavior
// ============================================================

#[test]
fn test_small_values_follow_the_documented_convention() {
    let oracle = TrialDivision;

    assert!(!oracle.is_prime(0));
    assert!(!oracle.is_prime(1));
    assert!(oracle.is_prime(2));
    assert!(oracle.is_prime(3));
    assert!(!oracle.is_prime(4));
}

#[test]
fn test_negative_values_are_never_prime() {
    let oracle = TrialDivision;

    for n in [-1, -2, -3, -17, -1_000_003] {
        assert!(!oracle.is_prime(n), "{} must not be prime", n);
    }
}

// ============================================================
// Correctness against a known range
// ============================================================

#[test]
fn test_primes_in_a_small_range_match_the_reference_set() {
    let oracle = TrialDivision;
    let expected = [11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    let found: Vec<i64> = (10..50).filter(|&n| oracle.is_prime(n)).collect();
    assert_eq!(found, expected);
}

#[test]
fn test_squares_of_primes_are_composite() {
    let oracle = TrialDivision;

    // 6k±1 candidates whose smallest factor is exactly √n
    for p in [5i64, 7, 11, 13, 101] {
        assert!(!oracle.is_prime(p * p), "{}^2 must not be prime", p);
    }
}

#[test]
fn test_values_near_the_configured_range_start() {
    let oracle = TrialDivision;

    // 10_000_000_019 is the first prime at or above 10^10
    assert!(!oracle.is_prime(10_000_000_000));
    assert!(oracle.is_prime(10_000_000_019));
}

// ============================================================
// Idempotence under concurrent callers
// ============================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_always_agree() {
    let oracle = Arc::new(TrialDivision);

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..16 {
        let oracle = oracle.clone();
        tasks.spawn(async move {
            (0..200).map(|n| oracle.is_prime(n)).collect::<Vec<bool>>()
        });
    }

    let mut answers: Vec<Vec<bool>> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        answers.push(joined.unwrap());
    }

    for answer in &answers[1..] {
        assert_eq!(answer, &answers[0]);
    }
}
