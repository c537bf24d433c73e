use rand::RngCore;

use crate::draws;
use crate::error::Error;

/// Atomic species label for one lattice cell.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    A = 0,
    B = 1,
}

impl Species {
    /// The opposite label.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Species::A => Species::B,
            Species::B => Species::A,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Species::A => 'A',
            Species::B => 'B',
        }
    }
}

/// One of the four nearest-neighbor directions on the square lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// N x N periodic grid of species labels, stored row-major.
///
/// All neighbor lookups wrap at the edges, so cell (0, j) is adjacent to
/// (N-1, j) and likewise for columns. Sites are addressed by flat index
/// `row * size + col`.
#[derive(Debug)]
pub struct Lattice {
    size: usize,
    cells: Vec<Species>,
}

impl Lattice {
    /// Fill an N x N grid with an independent Bernoulli draw per cell:
    /// species A with probability `fraction_a`, else B.
    ///
    /// This is deliberately not an exact-count shuffle; the realized
    /// composition fluctuates around `fraction_a` with binomial variance.
    pub fn random<R: RngCore>(size: usize, fraction_a: f64, rng: &mut R) -> Result<Self, Error> {
        if size < 1 {
            return Err(Error::invalid("size must be >= 1"));
        }
        if !(0.0..=1.0).contains(&fraction_a) {
            return Err(Error::invalid("fraction_a must be in [0, 1]"));
        }

        let n_sites = size * size;
        let mut cells = Vec::with_capacity(n_sites);
        for _ in 0..n_sites {
            let u = draws::unit_uniform(rng)?;
            cells.push(if u < fraction_a { Species::A } else { Species::B });
        }

        Ok(Self { size, cells })
    }

    /// Build a lattice from an explicit cell vector (row-major, length N^2).
    pub fn from_cells(size: usize, cells: Vec<Species>) -> Result<Self, Error> {
        if size < 1 {
            return Err(Error::invalid("size must be >= 1"));
        }
        if cells.len() != size * size {
            return Err(Error::invalid(format!(
                "expected {} cells for a {size}x{size} lattice, got {}",
                size * size,
                cells.len()
            )));
        }
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn n_sites(&self) -> usize {
        self.cells.len()
    }

    /// Flat index of cell (row, col).
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Species {
        self.cells[self.index(row, col)]
    }

    /// Renderer-facing view: the raw row-major label array.
    #[inline]
    pub fn cells(&self) -> &[Species] {
        &self.cells
    }

    #[inline]
    pub fn species_at(&self, flat_idx: usize) -> Species {
        self.cells[flat_idx]
    }

    /// Flat index of the toroidal neighbor of `flat_idx` in `dir`.
    #[inline]
    pub fn neighbor(&self, flat_idx: usize, dir: Direction) -> usize {
        let n = self.size;
        let row = flat_idx / n;
        let col = flat_idx % n;
        let (row, col) = match dir {
            Direction::Up => (if row == 0 { n - 1 } else { row - 1 }, col),
            Direction::Down => (if row + 1 == n { 0 } else { row + 1 }, col),
            Direction::Left => (row, if col == 0 { n - 1 } else { col - 1 }),
            Direction::Right => (row, if col + 1 == n { 0 } else { col + 1 }),
        };
        row * n + col
    }

    /// Counts of (A, B) sites.
    pub fn composition(&self) -> (usize, usize) {
        let n_a = self.cells.iter().filter(|&&s| s == Species::A).count();
        (n_a, self.cells.len() - n_a)
    }

    /// Exchange the labels at two sites. A self-swap is a no-op.
    #[inline]
    pub(crate) fn swap_sites(&mut self, i: usize, j: usize) {
        self.cells.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_neighbor_wraparound() {
        let lat = Lattice::from_cells(3, vec![Species::A; 9]).unwrap();

        // Site 0 = (0,0): up wraps to (2,0)=6, left wraps to (0,2)=2
        assert_eq!(lat.neighbor(0, Direction::Up), 6);
        assert_eq!(lat.neighbor(0, Direction::Left), 2);
        assert_eq!(lat.neighbor(0, Direction::Down), 3);
        assert_eq!(lat.neighbor(0, Direction::Right), 1);

        // Site 8 = (2,2): down wraps to (0,2)=2, right wraps to (2,0)=6
        assert_eq!(lat.neighbor(8, Direction::Down), 2);
        assert_eq!(lat.neighbor(8, Direction::Right), 6);
        assert_eq!(lat.neighbor(8, Direction::Up), 5);
        assert_eq!(lat.neighbor(8, Direction::Left), 7);
    }

    #[test]
    fn test_size_one_neighbors_are_self() {
        let lat = Lattice::from_cells(1, vec![Species::B]).unwrap();
        for dir in Direction::ALL {
            assert_eq!(lat.neighbor(0, dir), 0);
        }
    }

    #[test]
    fn test_random_rejects_invalid_inputs() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        assert!(Lattice::random(0, 0.5, &mut rng).is_err());
        assert!(Lattice::random(4, -0.1, &mut rng).is_err());
        assert!(Lattice::random(4, 1.5, &mut rng).is_err());
        assert!(Lattice::random(4, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_random_extreme_fractions() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);

        let all_a = Lattice::random(8, 1.0, &mut rng).unwrap();
        assert_eq!(all_a.composition(), (64, 0));

        let all_b = Lattice::random(8, 0.0, &mut rng).unwrap();
        assert_eq!(all_b.composition(), (0, 64));
    }

    #[test]
    fn test_random_composition_near_target() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let lat = Lattice::random(50, 0.5, &mut rng).unwrap();
        let (n_a, n_b) = lat.composition();
        assert_eq!(n_a + n_b, 2500);
        // Binomial sd is 25; allow 6 sigma.
        assert!((n_a as f64 - 1250.0).abs() < 150.0, "n_a = {n_a}");
    }

    #[test]
    fn test_from_cells_length_mismatch() {
        assert!(Lattice::from_cells(3, vec![Species::A; 8]).is_err());
    }
}
