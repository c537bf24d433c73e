pub mod swap;

pub use swap::{acceptance_probability, metropolis_step, StepOutcome};
