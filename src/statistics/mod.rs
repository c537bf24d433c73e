pub mod bonds;
pub mod neighbors;

pub use bonds::{BondSummary, Microstructure};
pub use neighbors::{binomial_expectation, unlike_neighbor_histogram};
