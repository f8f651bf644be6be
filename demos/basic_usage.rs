// ============================================================================
// Basic Usage Example
// ============================================================================

use mpc_fixed_point::numeric::backend::BACKEND_NAME;
use mpc_fixed_point::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fixed-Point Example ({} backend) ===\n", BACKEND_NAME);

    // Construct from every supported input form
    let from_text = FixedPoint::fxp("0.00123", None)?;
    let from_scientific = FixedPoint::fxp("1234e-2", None)?;
    let from_float = FixedPoint::fxp(0.1, None)?;
    let from_integer = FixedPoint::fxp(42, Some(3))?;

    println!("Construction:");
    for x in [&from_text, &from_scientific, &from_float, &from_integer] {
        println!("  {:<12} {:?}", x.to_string(), x);
    }

    // Mixed-precision arithmetic is calibrated to the larger precision
    println!("\nArithmetic:");
    let a = FixedPoint::fxp("0.1", None)?;
    let b = FixedPoint::fxp("0.3", None)?;
    println!("  {} + {} = {}", a, b, &a + &b);
    println!("  {} * {} = {}", a, FixedPoint::fxp("0.4", None)?, a.checked_mul("0.4")?);
    println!("  {} / {} = {}", b, 7, b.checked_div(7)?);
    println!("  3 - {} = {}", from_scientific, 3i32 - &from_scientific);

    match a.checked_div(FixedPoint::new(0, 4)) {
        Ok(q) => println!("  unexpected quotient {}", q),
        Err(e) => println!("  {} / 0.0000 -> error: {}", a, e),
    }

    // Equality ignores precision unless asked to be strict
    println!("\nEquality:");
    let narrow = FixedPoint::new(5, 1);
    let wide = FixedPoint::new(5000, 4);
    println!("  {} == {}: {}", narrow, wide, narrow == wide);
    println!("  strong_eq: {}", narrow.strong_eq(&wide));

    // Random masks from a CSPRNG
    println!("\nRandom masks in [0.0, 10.0):");
    let lower = FixedPoint::fxp(0, Some(1))?;
    let upper = FixedPoint::fxp(10, Some(1))?;
    for _ in 0..3 {
        println!("  {}", FixedPoint::random_range(&lower, &upper, false));
    }
    println!("  signed: {}", FixedPoint::random_range(&lower, &upper, true));

    // Number-theory helpers for the encryption layer
    println!("\nNumber theory:");
    let modulus = next_prime(&BigInt::from(1_000_000_000u64));
    println!("  next prime above 10^9: {}", modulus);
    println!(
        "  inverse of 1000 mod {}: {}",
        modulus,
        modular_inverse(&BigInt::from(1000), &modulus)?
    );
    let prime = random_prime(&BigInt::from(1u64 << 31), &BigInt::from(1u64 << 32))?;
    println!("  random 32-bit prime: {} (prime: {})", prime, is_prime(&prime));

    Ok(())
}
