use crate::error::{Error, Result};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub du: f64, // diffusion rate of u (activator)
    pub dv: f64, // diffusion rate of v (inhibitor)
    pub f: f64,  // feed rate
    pub k: f64,  // kill rate
    pub dt: f64, // time step
                 // Note: dx = dy = 1.0 (grid spacing is fixed)
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            du: 0.14,
            dv: 0.07,
            f: 0.03,
            k: 0.0648,
            dt: 0.06,
        }
    }
}

impl Parameters {
    pub fn new(du: f64, dv: f64, f: f64, k: f64, dt: f64) -> Self {
        Self { du, dv, f, k, dt }
    }

    /// Largest stable time step of the explicit 5-point scheme on a unit grid.
    pub fn max_stable_dt(&self) -> f64 {
        0.25 / self.du.max(self.dv)
    }

    pub fn validate(&self) -> Result<()> {
        if self.du <= 0.0 || self.dv <= 0.0 {
            return Err(Error::invalid_parameters("Diffusion rates must be > 0"));
        }
        if self.f < 0.0 {
            return Err(Error::invalid_parameters("Feed rate must be >= 0"));
        }
        if self.k < 0.0 {
            return Err(Error::invalid_parameters("Kill rate must be >= 0"));
        }
        if self.dt <= 0.0 {
            return Err(Error::invalid_parameters("Time step must be > 0"));
        }

        let max_stable_dt = self.max_stable_dt();
        if self.dt > max_stable_dt {
            return Err(Error::InvalidParameters(format!(
                "Time step exceeds stability limit (max: {})",
                max_stable_dt
            )));
        }

        Ok(())
    }

    pub fn warn(&self) {
        if self.f > 0.1 || self.k > 0.1 {
            warn!(
                f = self.f,
                k = self.k,
                "F and k values above 0.1 might not produce typical Turing patterns"
            );
        }

        if self.du <= self.dv {
            warn!(
                du = self.du,
                dv = self.dv,
                "Du is usually larger than Dv for pattern formation"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults_are_valid() {
        let p = Parameters::default();
        assert_eq!(p, Parameters::new(0.14, 0.07, 0.03, 0.0648, 0.06));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_diffusion() {
        let p = Parameters {
            dv: 0.0,
            ..Parameters::default()
        };
        assert!(matches!(p.validate(), Err(Error::InvalidParameters(_))));
    }

    #[test]
    fn rejects_negative_rates() {
        let feed = Parameters {
            f: -0.01,
            ..Parameters::default()
        };
        let kill = Parameters {
            k: -0.01,
            ..Parameters::default()
        };
        assert!(feed.validate().is_err());
        assert!(kill.validate().is_err());
    }

    #[test]
    fn zero_feed_and_kill_are_allowed() {
        let p = Parameters {
            f: 0.0,
            k: 0.0,
            ..Parameters::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_unstable_time_step() {
        let p = Parameters {
            du: 1.0,
            dt: 0.3,
            ..Parameters::default()
        };
        assert_eq!(p.max_stable_dt(), 0.25);
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("stability limit"));
    }
}
