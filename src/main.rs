use std::fs;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use alloy_mc::{
    binomial_expectation, simulate, unlike_neighbor_histogram, AlloyConfig, BondSummary,
};

/// Binary alloy lattice Monte Carlo: anneal an N x N grid of A/B atoms
/// with Metropolis swaps and report the bond statistics.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lattice edge length N (grid is N x N)
    #[arg(long, default_value_t = 100)]
    size: usize,

    /// Fraction of sites occupied by A atoms
    #[arg(long, default_value_t = 0.5)]
    fraction_a: f64,

    /// Number of swap-attempt iterations
    #[arg(short = 'n', long, default_value_t = 10_000)]
    iterations: u64,

    /// Temperature in Kelvin
    #[arg(short = 't', long, default_value_t = 1000.0)]
    temperature: f64,

    /// A-B mixing energy in eV (>0 segregation, <0 ordering)
    #[arg(short = 'e', long, default_value_t = 0.5)]
    mixing_energy: f64,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write the final lattice as a text grid (one row per line, A/B)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = AlloyConfig {
        size: args.size,
        fraction_a: args.fraction_a,
        iterations: args.iterations,
        temperature: args.temperature,
        mixing_energy: args.mixing_energy,
    };

    let mut rng = Xoshiro256StarStar::seed_from_u64(args.seed);
    let interrupted = AtomicBool::new(false);

    let pb = ProgressBar::new(config.iterations);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
        )
        .unwrap()
        .progress_chars("=> "),
    );
    pb.set_message("swaps");

    let (lattice, report) = simulate(&config, &mut rng, &interrupted, &|| pb.inc(1))?;
    pb.finish();

    let (n_a, n_b) = lattice.composition();
    let bonds = BondSummary::measure(&lattice);
    let expected = BondSummary::random_unlike_fraction(args.fraction_a);

    println!(
        "Lattice: {0}x{0}  |  A: {n_a}  B: {n_b}  |  T: {1} K  |  eps: {2} eV",
        args.size, args.temperature, args.mixing_energy
    );
    println!(
        "Swaps: {} accepted, {} rejected, {} same-species ({:.1}% acceptance)",
        report.accepted,
        report.rejected,
        report.same_species,
        100.0 * report.acceptance_rate()
    );
    println!(
        "Bonds: A-A {}  A-B {}  B-B {}  |  unlike fraction {:.4} (random: {:.4})",
        bonds.aa,
        bonds.ab,
        bonds.bb,
        bonds.unlike_fraction(),
        expected
    );
    println!(
        "Microstructure: {:?}",
        bonds.classify(args.fraction_a, 0.05)
    );

    let hist = unlike_neighbor_histogram(&lattice);
    let binom = binomial_expectation(args.size, args.fraction_a);
    println!("Unlike neighbors per site (measured vs random expectation):");
    for k in 0..5 {
        println!("  {k}: {:>8}  vs {:>10.1}", hist[k], binom[k]);
    }

    if let Some(path) = args.out {
        let mut grid = String::with_capacity(args.size * (args.size + 1));
        for row in 0..args.size {
            for col in 0..args.size {
                grid.push(lattice.get(row, col).as_char());
            }
            grid.push('\n');
        }
        fs::write(&path, grid)?;
        println!("Lattice written to {}", path.display());
    }

    Ok(())
}
