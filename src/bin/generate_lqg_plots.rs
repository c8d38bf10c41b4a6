//! Prints the model constants and writes the five figures to the working
//! directory.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use lqg_thermo::{
    figures::{self, Figure, FigureConfig},
    models::gravity::black_hole::{CriticalPoint, LqgBlackHole, LqgParameters},
};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let model = LqgBlackHole::new(LqgParameters::default());
    print_parameters(model.parameters());

    println!("=== GENERATING ENHANCED PLOTS ===");
    let config = FigureConfig::default();
    figures::render_all(&model, &config).context("figure generation failed")?;

    println!();
    println!("=== PLOT GENERATION COMPLETE ===");
    println!("Generated files:");
    for figure in Figure::ALL {
        println!("- {}", figure.file_name());
    }

    Ok(())
}

fn print_parameters(params: &LqgParameters) {
    let critical = params.critical_point();

    println!("=== LQG BLACK HOLE THERMODYNAMICS PARAMETERS ===");
    println!("Barbero-Immirzi parameter γ: {}", params.gamma());
    println!("Quantum correction α: {:.6}", params.alpha());
    println!("AdS cosmological constant Λ_AdS: {:.6}", params.lambda_ads());
    println!("Critical horizon radius: {:.6}", critical.r_plus);
    println!("Critical pressure: {:.6}", critical.pressure);
    println!("Critical volume: {:.6}", critical.volume);
    println!("Critical temperature: {:.6}", critical.temperature);
    println!("Critical ratio PcVc/Tc: {:.6}", critical.ratio());
    println!("Classical ratio (3/8): {:.6}", CriticalPoint::CLASSICAL_RATIO);
    println!("Quantum ratio (7/18): {:.6}", CriticalPoint::QUANTUM_RATIO);
    println!();
}
