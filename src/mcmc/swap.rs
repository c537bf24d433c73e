use rand::RngCore;

use crate::draws;
use crate::error::Error;
use crate::geometry::{Direction, Lattice};

/// Below this exponent `exp` underflows to zero anyway; short-circuit so the
/// probability is an exact 0.0 rather than a denormal.
const EXP_UNDERFLOW: f64 = -745.0;

/// What happened during one swap attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Unlike pair, swap performed.
    Accepted,
    /// Unlike pair, Metropolis draw failed, lattice unchanged.
    Rejected,
    /// The chosen pair held the same species; nothing to do.
    SameSpecies,
}

/// Metropolis acceptance probability for an energy change `delta_e` at
/// thermal energy `kt` (both in eV).
///
/// Exactly 1 for `delta_e <= 0`, `exp(-delta_e / kt)` otherwise,
/// non-increasing in `delta_e`.
#[inline]
pub fn acceptance_probability(delta_e: f64, kt: f64) -> f64 {
    if delta_e <= 0.0 {
        return 1.0;
    }
    let exponent = -delta_e / kt;
    if exponent < EXP_UNDERFLOW {
        0.0
    } else {
        exponent.exp()
    }
}

/// Unlike-neighbor count of `site` over its four bonds, skipping every bond
/// to `partner`. Returns `(counted_bonds, unlike_bonds)`.
///
/// On an N >= 3 grid the pair shares exactly one bond, so `counted_bonds`
/// is 3; on N = 2 the pair can be mutually adjacent in two directions and
/// both pair bonds are skipped (they connect the same two atoms before and
/// after the swap).
fn unlike_bonds_excluding(lattice: &Lattice, site: usize, partner: usize) -> (u32, u32) {
    let species = lattice.species_at(site);
    let mut counted = 0u32;
    let mut unlike = 0u32;
    for dir in Direction::ALL {
        let neighbor = lattice.neighbor(site, dir);
        if neighbor == partner {
            continue;
        }
        counted += 1;
        if lattice.species_at(neighbor) != species {
            unlike += 1;
        }
    }
    (counted, unlike)
}

/// Energy change of swapping the unlike pair (`site`, `partner`), by bond
/// counting in the regular-solution model.
///
/// Exchanging the two binary labels turns every counted unlike bond into a
/// like bond and vice versa, so each site contributes
/// `counted - 2 * unlike` unlike bonds of change, each worth
/// `mixing_energy`. On a standard grid this reduces to
/// `mixing_energy * (6 - 2*u_site - 2*u_partner)`.
pub(crate) fn delta_energy(
    lattice: &Lattice,
    site: usize,
    partner: usize,
    mixing_energy: f64,
) -> f64 {
    let (c_s, u_s) = unlike_bonds_excluding(lattice, site, partner);
    let (c_p, u_p) = unlike_bonds_excluding(lattice, partner, site);
    let unlike_change = (c_s as i32 - 2 * u_s as i32) + (c_p as i32 - 2 * u_p as i32);
    mixing_energy * unlike_change as f64
}

/// One Metropolis swap attempt.
///
/// Picks a site and one of its four toroidal neighbors uniformly at random.
/// A same-species pair is a no-op; an unlike pair is swapped with
/// probability [`acceptance_probability`] of its [`delta_energy`].
pub fn metropolis_step<R: RngCore>(
    lattice: &mut Lattice,
    mixing_energy: f64,
    kt: f64,
    rng: &mut R,
) -> Result<StepOutcome, Error> {
    let site = draws::uniform_index(rng, lattice.n_sites())?;
    let dir = Direction::ALL[draws::uniform_index(rng, 4)?];
    let partner = lattice.neighbor(site, dir);

    if lattice.species_at(site) == lattice.species_at(partner) {
        return Ok(StepOutcome::SameSpecies);
    }

    let delta_e = delta_energy(lattice, site, partner, mixing_energy);
    let p = acceptance_probability(delta_e, kt);
    let accept = p >= 1.0 || draws::unit_uniform(rng)? < p;

    if accept {
        lattice.swap_sites(site, partner);
        Ok(StepOutcome::Accepted)
    } else {
        Ok(StepOutcome::Rejected)
    }
}
