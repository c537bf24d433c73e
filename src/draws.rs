use rand::RngCore;

use crate::error::Error;

/// Pull 64 bits through the fallible entry point so a broken or exhausted
/// random source surfaces as [`Error::RandomSource`] instead of a panic.
#[inline]
pub(crate) fn next_u64<R: RngCore + ?Sized>(rng: &mut R) -> Result<u64, Error> {
    let mut buf = [0u8; 8];
    rng.try_fill_bytes(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Uniform f64 in [0, 1) from the top 53 bits.
#[inline]
pub(crate) fn unit_uniform<R: RngCore + ?Sized>(rng: &mut R) -> Result<f64, Error> {
    Ok((next_u64(rng)? >> 11) as f64 * (1.0 / (1u64 << 53) as f64))
}

/// Uniform index in [0, n) via multiply-shift range reduction.
#[inline]
pub(crate) fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> Result<usize, Error> {
    let x = next_u64(rng)?;
    Ok(((x as u128 * n as u128) >> 64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_unit_uniform_in_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        for _ in 0..1000 {
            let u = unit_uniform(&mut rng).unwrap();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_uniform_index_in_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let i = uniform_index(&mut rng, 4).unwrap();
            assert!(i < 4);
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
