//! Regime Sweep: Damping Coefficient Walkthrough
//!
//! This binary sweeps the damping coefficient of a unit oscillator from
//! undamped through critically damped into the overdamped regime, printing
//! for each step:
//!
//! 1. Damping ratio ζ and natural frequency ω_n
//! 2. Selected regime
//! 3. First zeros, peaks, and valleys (oscillatory regime only)
//! 4. Residual displacement at the end of the time window

use damped_oscillator::{OscillatorSolver, Regime};

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Damped Oscillator: Regime Sweep");
    println!("═══════════════════════════════════════════════════════════════\n");

    // System parameters
    let mass = 1.0;
    let stiffness = 1.0;
    let x0 = 1.0;
    let v0 = 0.0;
    let critical_c = 2.0 * f64::sqrt(stiffness * mass);

    println!("System Parameters:");
    println!("  m = {:.2}, k = {:.2}", mass, stiffness);
    println!("  x0 = {:.2}, v0 = {:.2}", x0, v0);
    println!("  critical damping c* = {:.4}", critical_c);
    println!();

    let mut solver = OscillatorSolver::new();

    for &c in &[0.0, 0.2, 1.0, critical_c, 3.0, 6.0] {
        solver.update_params(&[mass, stiffness, c, x0, v0]);

        let result = match solver.calculate() {
            Ok(result) => result,
            Err(err) => {
                eprintln!("c = {:.2}: {}", c, err);
                continue;
            }
        };

        println!("───────────────────────────────────────────────────────────────");
        println!(
            "c = {:.4}   ζ = {:.4}   ω_n = {:.4}   regime: {:?}",
            c, result.zeta, result.w_n, result.regime
        );

        match result.regime {
            Regime::Underdamped => {
                let points = result
                    .critical_points
                    .expect("underdamped results carry critical points");

                print!("  zeros:   ");
                for (t, _) in &points.zeros {
                    print!("t = {:8.4}   ", t);
                }
                println!();

                print!("  peaks:   ");
                for (t, x) in &points.peaks {
                    print!("({:8.4}, {:+.4})   ", t, x);
                }
                println!();

                print!("  valleys: ");
                for (t, x) in &points.valleys {
                    print!("({:8.4}, {:+.4})   ", t, x);
                }
                println!();
            }
            Regime::CriticallyDamped => {
                println!("  fastest non-oscillatory return, no crossings");
            }
            Regime::Overdamped => {
                println!("  slow non-oscillatory return, no crossings");
            }
        }

        let last = result.x.len() - 1;
        println!(
            "  x({:.0}) = {:+.6e}   v({:.0}) = {:+.6e}",
            result.t[last], result.x[last], result.t[last], result.v[last]
        );
    }

    println!("\nDone.");
}
