use crate::geometry::{Direction, Lattice};

/// Histogram of per-site unlike-neighbor counts.
///
/// `hist[k]` is the number of sites with exactly `k` of their four toroidal
/// neighbors holding the other species. Sums to N^2.
pub fn unlike_neighbor_histogram(lattice: &Lattice) -> [u64; 5] {
    let mut hist = [0u64; 5];
    for i in 0..lattice.n_sites() {
        let s = lattice.species_at(i);
        let unlike = Direction::ALL
            .iter()
            .filter(|&&dir| lattice.species_at(lattice.neighbor(i, dir)) != s)
            .count();
        hist[unlike] += 1;
    }
    hist
}

fn choose_4(k: usize) -> f64 {
    [1.0, 4.0, 6.0, 4.0, 1.0][k]
}

/// Expected unlike-neighbor histogram for a perfectly random solution.
///
/// `expected[k]` is the expected number of sites with `k` unlike neighbors
/// on an N x N grid at composition `fraction_a`, from the binomial
/// distribution over the two site species:
/// `C(4,k) * (x * x^(4-k) * (1-x)^k + (1-x) * (1-x)^(4-k) * x^k) * N^2`.
pub fn binomial_expectation(size: usize, fraction_a: f64) -> [f64; 5] {
    let x = fraction_a;
    let n_sites = (size * size) as f64;
    let mut expected = [0.0f64; 5];
    for (k, slot) in expected.iter_mut().enumerate() {
        let frac = x * x.powi(4 - k as i32) * (1.0 - x).powi(k as i32)
            + (1.0 - x) * (1.0 - x).powi(4 - k as i32) * x.powi(k as i32);
        *slot = choose_4(k) * frac * n_sites;
    }
    expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Species::{A, B};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_histogram_sums_to_site_count() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(31);
        let lat = Lattice::random(17, 0.4, &mut rng).unwrap();
        let hist = unlike_neighbor_histogram(&lat);
        assert_eq!(hist.iter().sum::<u64>(), 17 * 17);
    }

    #[test]
    fn test_pure_lattice_histogram() {
        let lat = Lattice::from_cells(4, vec![B; 16]).unwrap();
        assert_eq!(unlike_neighbor_histogram(&lat), [16, 0, 0, 0, 0]);
    }

    #[test]
    fn test_checkerboard_histogram() {
        let cells = (0..36)
            .map(|i| if (i / 6 + i % 6) % 2 == 0 { A } else { B })
            .collect();
        let lat = Lattice::from_cells(6, cells).unwrap();
        assert_eq!(unlike_neighbor_histogram(&lat), [0, 0, 0, 0, 36]);
    }

    #[test]
    fn test_expectation_sums_to_site_count() {
        for x in [0.0, 0.2, 0.5, 0.9, 1.0] {
            let total: f64 = binomial_expectation(10, x).iter().sum();
            assert!((total - 100.0).abs() < 1e-9, "x = {x}: total = {total}");
        }
    }

    #[test]
    fn test_expectation_degenerate_composition() {
        let expected = binomial_expectation(5, 0.0);
        assert!((expected[0] - 25.0).abs() < 1e-12);
        assert!(expected[1..].iter().all(|&v| v.abs() < 1e-12));
    }
}
