//! 2D lattice Monte Carlo simulation of a binary alloy.
//!
//! A square N x N grid of A and B atoms evolves by Metropolis swaps of
//! neighboring unlike atoms, driven by a regular-solution mixing energy and
//! temperature. Positive mixing energy drives precipitation, negative
//! mixing energy drives intermetallic ordering, and high temperature drives
//! both toward a random solid solution.

pub mod config;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod simulation;
pub mod statistics;

mod draws;

pub use config::{AlloyConfig, BOLTZMANN_EV_PER_K};
pub use error::Error;
pub use geometry::{Direction, Lattice, Species};
pub use mcmc::acceptance_probability;
pub use simulation::{run, simulate, RunReport};
pub use statistics::{
    binomial_expectation, unlike_neighbor_histogram, BondSummary, Microstructure,
};
