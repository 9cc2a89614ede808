use crate::error::Result;
use crate::model::{Domain, InitialCondition, Parameters};

/// Everything a run needs, fixed before the first step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub nx: usize,
    pub ny: usize,
    pub steps: usize,
    /// Progress is logged every `interval` steps; 0 disables it.
    pub interval: usize,
    pub threshold: f64,
    pub init: InitialCondition,
    pub params: Parameters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nx: 256,
            ny: 256,
            steps: 10_000,
            interval: 100,
            threshold: 0.1,
            init: InitialCondition::Zero,
            params: Parameters::default(),
        }
    }
}

impl Config {
    pub fn domain(&self) -> Result<Domain> {
        Domain::new(self.nx, self.ny)
    }
}
