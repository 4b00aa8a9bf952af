//! Example: hand-running a backward pass with the backward functions.
//!
//! A graph engine records each forward node and later calls the
//! matching `*_back` in reverse order. This example does the same by
//! hand for a few tiny expressions.
//!
//! Run with: `cargo run --example chain_rule`

use operators::{
    add_pairwise, inv, inv_back, left_fold, log, log_back, multiply, relu, relu_back, sigmoid,
    sum, transform, Result,
};

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Backward functions: manual chain rule ===\n");

    // Example 1: f(x) = ln(x) at x=2
    println!("Example 1: f(x) = ln(x) at x=2");
    let x = 2.0;
    let out = log(x)?;
    let dx = log_back(x, 1.0)?;
    println!("  f(2) = {out}");
    println!("  f'(2) = {dx} (expected: 0.5)");
    println!();

    // Example 2: f(x) = 1/ln(x) at x=e
    // Forward: a = ln(x), out = 1/a
    // Backward: d_a = inv_back(a, 1), d_x = log_back(x, d_a)
    println!("Example 2: f(x) = 1/ln(x) at x=e");
    let x = std::f64::consts::E;
    let a = log(x)?;
    let out = inv(a)?;
    let d_a = inv_back(a, 1.0)?;
    let d_x = log_back(x, d_a)?;
    println!("  f(e) = {out}");
    println!("  f'(e) = {d_x} (expected: -1/e ≈ {:.6})", -1.0 / x);
    println!();

    // Example 3: f(x) = relu(ln(x)) on both sides of the kink
    println!("Example 3: f(x) = relu(ln(x)) at x=0.5 and x=3");
    for x in [0.5, 3.0] {
        let a = log(x)?;
        let out = relu(a);
        let d_x = log_back(x, relu_back(a, 1.0))?;
        println!("  f({x}) = {out:.6}, f'({x}) = {d_x:.6}");
    }
    println!();

    // Example 4: a tiny neuron, σ(Σ wᵢ·xᵢ)
    println!("Example 4: neuron σ(w · x)");
    let w = [0.5, -1.0, 2.0];
    let xs = [1.0, 2.0, 0.25];
    let weighted: Vec<f64> = operators::pairwise_combine(w, xs, multiply).collect();
    let z = sum(weighted);
    println!("  z = {z}, σ(z) = {:.6}", sigmoid(z));
    println!();

    // Example 5: error propagation from a domain violation
    println!("Example 5: ln(-1) is a domain error");
    match log(-1.0) {
        Ok(v) => println!("  unexpected value {v}"),
        Err(e) => {
            log::warn!("example 5: {e}");
            println!("  {e}");
        }
    }
    println!();

    // Example 6: list helpers
    println!("Example 6: list helpers");
    let shifted = add_pairwise([1.0, 2.0], [3.0, 4.0, 5.0]);
    println!("  add_pairwise([1, 2], [3, 4, 5]) = {shifted:?}");
    let relus = transform([-2.0, 0.0, 2.0], relu);
    println!("  transform([-2, 0, 2], relu) = {relus:?}");
    let running = left_fold([1.0, 2.0, 3.0], |acc, x| acc * 10.0 + x, 0.0);
    println!("  left_fold([1, 2, 3], acc*10 + x, 0) = {running}");

    Ok(())
}
