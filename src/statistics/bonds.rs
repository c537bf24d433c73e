use crate::geometry::{Direction, Lattice, Species};

/// Nearest-neighbor bond counts of a finished lattice.
///
/// Each undirected bond is counted exactly once by scanning every site's
/// right and down toroidal neighbor, so `aa + ab + bb == 2 * N^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondSummary {
    pub aa: u64,
    pub ab: u64,
    pub bb: u64,
}

/// Coarse classification of the emergent microstructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Microstructure {
    /// Unlike-bond fraction close to the random-solution expectation.
    RandomSolution,
    /// Unlike-bond fraction well below expectation (like-species clustering).
    Precipitate,
    /// Unlike-bond fraction well above expectation (A-B ordering).
    Intermetallic,
}

impl BondSummary {
    /// Count all bonds of the lattice. Pure and idempotent.
    pub fn measure(lattice: &Lattice) -> Self {
        let mut summary = BondSummary {
            aa: 0,
            ab: 0,
            bb: 0,
        };
        for i in 0..lattice.n_sites() {
            let s = lattice.species_at(i);
            for dir in [Direction::Right, Direction::Down] {
                let t = lattice.species_at(lattice.neighbor(i, dir));
                match (s, t) {
                    (Species::A, Species::A) => summary.aa += 1,
                    (Species::B, Species::B) => summary.bb += 1,
                    _ => summary.ab += 1,
                }
            }
        }
        summary
    }

    pub fn total(&self) -> u64 {
        self.aa + self.ab + self.bb
    }

    /// Fraction of bonds joining unlike species.
    pub fn unlike_fraction(&self) -> f64 {
        self.ab as f64 / self.total() as f64
    }

    /// Expected unlike-bond fraction for an ideal (random) solution at
    /// composition `fraction_a`: `2 * x * (1 - x)`.
    pub fn random_unlike_fraction(fraction_a: f64) -> f64 {
        2.0 * fraction_a * (1.0 - fraction_a)
    }

    /// Compare the measured unlike-bond fraction against the
    /// random-solution expectation, with a symmetric tolerance band.
    pub fn classify(&self, fraction_a: f64, tolerance: f64) -> Microstructure {
        let expected = Self::random_unlike_fraction(fraction_a);
        let measured = self.unlike_fraction();
        if measured < expected - tolerance {
            Microstructure::Precipitate
        } else if measured > expected + tolerance {
            Microstructure::Intermetallic
        } else {
            Microstructure::RandomSolution
        }
    }
}
