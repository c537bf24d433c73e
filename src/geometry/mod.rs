pub mod lattice;

pub use lattice::{Direction, Lattice, Species};
