// ============================================================================
// Basic Usage Example
// ============================================================================

use large_math::prelude::*;
use num_bigint::BigInt;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Large Math Example ===\n");

    let n = BigInt::from(20);
    println!("Factorial of {}: {}", n, factorial(&n).unwrap());

    let base = BigInt::from(2);
    let exponent = BigInt::from(100);
    println!(
        "{} raised to the power of {}: {}",
        base,
        exponent,
        power(&base, &exponent).unwrap()
    );

    let candidate = BigInt::from(1_000_000_007);
    println!("Is {} prime? {}", candidate, is_prime(&candidate));

    let index = BigInt::from(50);
    println!("The {}th Fibonacci number: {}", index, fibonacci(&index).unwrap());

    let pool = BigInt::from(30);
    let picks = BigInt::from(15);
    println!(
        "Combinations of {} from {}: {}",
        picks,
        pool,
        combinations(&pool, &picks).unwrap()
    );

    // Invalid operands surface as typed errors instead of panics
    println!("\n=== Error Handling ===");
    match factorial(&BigInt::from(-1)) {
        Ok(value) => println!("factorial(-1) = {}", value),
        Err(err) => println!("factorial(-1) rejected: {}", err),
    }
    match power(&BigInt::from(2), &BigInt::from(-1)) {
        Ok(value) => println!("power(2, -1) = {}", value),
        Err(err) => println!("power(2, -1) rejected: {}", err),
    }
}
