//! Visual Validation for the Amenability Experiments
//!
//! This binary reproduces the three figures of the original experiments:
//! 1. Convolution variant, decreasing variance
//! 2. Triangular variant, decreasing variance
//! 3. Triangular variant, fixed variance
//!
//! Each run uses the original parameters (100 trials, initial variance 1.0)
//! and writes one PNG into the output directory.

use amenability_rs::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running All Visual Validation Figures...");
    println!("========================================");
    println!();

    let output_dir = "../output/visual/";
    std::fs::create_dir_all(output_dir)?;
    println!("Output directory: {}", output_dir);
    println!();

    run_convolution_decreasing(output_dir)?;
    println!();

    run_triangular_decreasing(output_dir)?;
    println!();

    run_triangular_fixed(output_dir)?;
    println!();

    println!("All figures rendered successfully.");
    Ok(())
}

/// 1. Convolution variant with decreasing variance
fn run_convolution_decreasing(output_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let trace = Experiment::new()
        .trials(100)
        .schedule(Decreasing { initial: 1.0 })
        .convolution(&DEMO_F, &DEMO_G)
        .run()?;

    let path = format!("{output_dir}probabilistic_amenability_plot.png");
    let written = TracePlot::new(&path)
        .title("Probabilistic Amenability: Norm Difference in Stochastic l1(Z)")
        .y_label("E[|e_n * f - f|]")
        .render(&trace)?;

    println!("1. Convolution, Decreasing Variance");
    println!("-----------------------------------");
    println!("First deviation: {:.6}", trace.values()[0]);
    println!("Last deviation:  {:.6}", trace.values()[trace.len() - 1]);
    println!("Figure: {}", written.display());
    Ok(())
}

/// 2. Triangular variant with decreasing variance
fn run_triangular_decreasing(output_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let trace = Experiment::new()
        .trials(100)
        .schedule(Decreasing { initial: 1.0 })
        .triangular(DEMO_LHS, DEMO_RHS)
        .run()?;

    let path = format!("{output_dir}probabilistic_amenability_decreasing_variance.png");
    let written = TracePlot::new(&path)
        .title("Probabilistic Amenability: Norm Difference with Decreasing Variance")
        .y_label("E[|e_n * t - t|]")
        .render(&trace)?;

    println!("2. Triangular, Decreasing Variance");
    println!("----------------------------------");
    println!("First deviation: {:.6}", trace.values()[0]);
    println!("Last deviation:  {:.6}", trace.values()[trace.len() - 1]);
    println!("Figure: {}", written.display());
    Ok(())
}

/// 3. Triangular variant with fixed variance
fn run_triangular_fixed(output_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let trace = Experiment::new()
        .trials(100)
        .schedule(Fixed(1.0))
        .triangular(DEMO_LHS, DEMO_RHS)
        .run()?;

    let path = format!("{output_dir}probabilistic_amenability_fixed_variance.png");
    let written = TracePlot::new(&path)
        .title("Probabilistic Amenability: Norm Difference with Fixed Variance")
        .y_label("E[|e_n * t - t|] with Fixed Variance")
        .render(&trace)?;

    println!("3. Triangular, Fixed Variance");
    println!("-----------------------------");
    println!("Mean deviation:  {:.6}", trace.window_mean(0..trace.len()));
    println!("Figure: {}", written.display());
    Ok(())
}
