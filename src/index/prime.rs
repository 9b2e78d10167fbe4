//! Prime sizing for the probing table

/// Trial division over odd divisors up to the square root.
pub fn is_prime(candidate: usize) -> bool {
    if candidate < 2 {
        return false;
    }
    if candidate % 2 == 0 {
        return candidate == 2;
    }
    let mut divisor = 3;
    while divisor * divisor <= candidate {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Smallest odd prime `>= start`.
///
/// Only odd candidates are tested, so the result is never 2.
pub fn next_prime(start: usize) -> usize {
    let mut candidate = if start % 2 == 0 { start + 1 } else { start };
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}
