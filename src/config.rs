use validator::{Validate, ValidationError};

use crate::error::Error;

/// Boltzmann constant in eV/K, matching the units of `mixing_energy` (eV)
/// and `temperature` (K).
pub const BOLTZMANN_EV_PER_K: f64 = 8.617332e-5;

fn validate_alloy_config(cfg: &AlloyConfig) -> Result<(), ValidationError> {
    if cfg.size < 1 {
        return Err(ValidationError::new("size must be >= 1"));
    }
    if !(0.0..=1.0).contains(&cfg.fraction_a) {
        return Err(ValidationError::new("fraction_a must be in [0, 1]"));
    }
    if !cfg.temperature.is_finite() || cfg.temperature <= 0.0 {
        return Err(ValidationError::new(
            "temperature must be strictly positive and finite",
        ));
    }
    if !cfg.mixing_energy.is_finite() {
        return Err(ValidationError::new("mixing_energy must be finite"));
    }
    Ok(())
}

/// Immutable parameter bundle for one simulation run.
///
/// `mixing_energy` is the A-B interaction energy in eV: positive values
/// favor segregation (precipitates), negative values favor A-B ordering
/// (intermetallics).
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_alloy_config"))]
pub struct AlloyConfig {
    /// Lattice edge length N; the grid is N x N.
    pub size: usize,
    /// Target fraction of sites occupied by A atoms, in [0, 1].
    pub fraction_a: f64,
    /// Number of swap-attempt iterations.
    pub iterations: u64,
    /// Temperature in Kelvin, strictly positive.
    pub temperature: f64,
    /// A-B interaction energy in eV.
    pub mixing_energy: f64,
}

impl AlloyConfig {
    /// Validate, mapping schema violations to [`Error::InvalidConfiguration`].
    pub fn checked(&self) -> Result<(), Error> {
        self.validate()
            .map_err(|e| Error::InvalidConfiguration(format!("{e}")))
    }

    /// Thermal energy k_B * T in eV.
    pub fn kt(&self) -> f64 {
        BOLTZMANN_EV_PER_K * self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> AlloyConfig {
        AlloyConfig {
            size: 20,
            fraction_a: 0.5,
            iterations: 1000,
            temperature: 1000.0,
            mixing_energy: 0.5,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base().checked().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let cfg = AlloyConfig { size: 0, ..base() };
        assert!(matches!(cfg.checked(), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_fraction_out_of_range_rejected() {
        for bad in [-0.1, 1.1, f64::NAN] {
            let cfg = AlloyConfig {
                fraction_a: bad,
                ..base()
            };
            assert!(cfg.checked().is_err(), "fraction_a = {bad} should fail");
        }
    }

    #[test]
    fn test_nonpositive_temperature_rejected() {
        for bad in [0.0, -300.0, f64::NAN, f64::INFINITY] {
            let cfg = AlloyConfig {
                temperature: bad,
                ..base()
            };
            assert!(cfg.checked().is_err(), "temperature = {bad} should fail");
        }
    }

    #[test]
    fn test_nonfinite_mixing_energy_rejected() {
        let cfg = AlloyConfig {
            mixing_energy: f64::NEG_INFINITY,
            ..base()
        };
        assert!(cfg.checked().is_err());
    }

    #[test]
    fn test_kt_at_room_temperature() {
        let cfg = AlloyConfig {
            temperature: 300.0,
            ..base()
        };
        assert!((cfg.kt() - 0.02585).abs() < 1e-4);
    }
}
