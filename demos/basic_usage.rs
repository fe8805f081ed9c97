// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with rejection diagnostics:
//   RUST_LOG=debug cargo run --example basic_usage --features logging

use numeric_formatting::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Numeric Formatting Example ===\n");

    println!("Factorials:");
    for n in [0i64, 2, 10, 34, 35] {
        match factorial(n) {
            Ok(value) => println!("  {}! = {}", n, value),
            Err(err) => println!("  {}! -> {}", n, err),
        }
    }

    println!("\nFibonacci:");
    match fibonacci_sequence(10) {
        Ok(sequence) => println!("  F(0..=10) = {:?}", sequence),
        Err(err) => println!("  error: {}", err),
    }
    match fibonacci_at(7) {
        Ok(value) => println!("  F(7) = {}", value),
        Err(err) => println!("  error: {}", err),
    }

    println!("\nRoman numerals (standard range):");
    for n in [1i64, 944, 3999, 5694, 0] {
        match roman_numeral_encode(n) {
            Ok(numeral) => println!("  {} -> {}", n, numeral),
            Err(err) => println!("  {} -> {}", n, err),
        }
    }

    println!("\nRoman numerals (extended range):");
    let config = RomanConfig::extended();
    let encoder = RomanEncoder::new(config);
    let decoder = RomanDecoder::new(config);
    match encoder.encode(5694) {
        Ok(numeral) => {
            println!("  5694 -> {}", numeral);
            println!("  {} -> {:?}", numeral, decoder.decode(&numeral));
        },
        Err(err) => println!("  5694 -> {}", err),
    }
    println!("  IIII -> {:?}", roman_numeral_decode("IIII"));

    println!("\nLinear search:");
    let letters = ['a', 'b', 'c', 'b', 'b', 'd'];
    println!(
        "  'b' in {:?} at {:?}",
        letters,
        linear_search_all_indices(&'b', &letters)
    );
    println!(
        "  first 'c' at {:?}",
        linear_search_first(&'c', &letters)
    );
}
