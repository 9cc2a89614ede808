use super::{metric, step_into, Diagnostics, Domain, Field, Parameters};
use crate::error::Result;
use std::time::{Duration, Instant};
use tracing::info;

/// A Gray-Scott run: two concentration fields plus their double buffers.
///
/// Construct through [`GrayScottFactory`](super::GrayScottFactory), which
/// validates the configuration and applies the initial condition.
#[derive(Debug, Clone)]
pub struct GrayScott {
    domain: Domain,
    params: Parameters,
    u: Field,
    v: Field,
    next_u: Field,
    next_v: Field,
    steps_taken: usize,
    diagnostics: Diagnostics,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub diagnostics: Diagnostics,
    pub elapsed: Duration,
}

impl GrayScott {
    pub(crate) fn new(domain: Domain, params: Parameters, u: Field, v: Field) -> Self {
        Self {
            domain,
            params,
            next_u: u.clone_same_shape(),
            next_v: v.clone_same_shape(),
            u,
            v,
            steps_taken: 0,
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }
    pub fn params(&self) -> &Parameters {
        &self.params
    }
    pub fn u(&self) -> &Field {
        &self.u
    }
    pub fn v(&self) -> &Field {
        &self.v
    }
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Last-cell terms of the most recent step.
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    pub fn step(&mut self) -> Result<Diagnostics> {
        let diagnostics = step_into(
            &self.u,
            &self.v,
            &mut self.next_u,
            &mut self.next_v,
            &self.params,
        )?;
        std::mem::swap(&mut self.u, &mut self.next_u);
        std::mem::swap(&mut self.v, &mut self.next_v);
        self.steps_taken += 1;
        self.diagnostics = diagnostics;
        Ok(diagnostics)
    }

    /// Performs `steps` steps, logging progress every `interval` steps
    /// (`0` disables progress logging).
    pub fn run(&mut self, steps: usize, interval: usize, threshold: f64) -> Result<RunSummary> {
        info!(
            nx = self.domain.nx,
            ny = self.domain.ny,
            steps,
            du = self.params.du,
            dv = self.params.dv,
            f = self.params.f,
            k = self.params.k,
            dt = self.params.dt,
            "starting run"
        );
        let start = Instant::now();

        for i in 1..=steps {
            self.step()?;
            if interval != 0 && i % interval == 0 {
                info!(
                    step = self.steps_taken,
                    v_fraction = self.fraction_above_threshold(threshold),
                    "progress"
                );
            }
        }

        let summary = RunSummary {
            steps,
            diagnostics: self.diagnostics,
            elapsed: start.elapsed(),
        };
        info!(
            steps,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "run finished"
        );
        Ok(summary)
    }

    /// Fraction of V cells strictly above `threshold`.
    pub fn fraction_above_threshold(&self, threshold: f64) -> f64 {
        metric::fraction_above_threshold(&self.v, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::{step, GrayScottFactory, InitialCondition};

    fn small(nx: usize, ny: usize) -> GrayScott {
        let config = Config {
            nx,
            ny,
            ..Config::default()
        };
        GrayScottFactory::create(&config).unwrap()
    }

    #[test]
    fn driver_matches_free_step() {
        let mut sim = small(12, 10);
        let mut u = sim.u().clone();
        let mut v = sim.v().clone();
        for _ in 0..25 {
            let r = step(&u, &v, sim.params()).unwrap();
            let d = sim.step().unwrap();
            assert_eq!(d, r.diagnostics);
            u = r.u;
            v = r.v;
        }
        assert_eq!(sim.u(), &u);
        assert_eq!(sim.v(), &v);
        assert_eq!(sim.steps_taken(), 25);
    }

    #[test]
    fn run_counts_steps_and_keeps_shape() {
        let mut sim = small(16, 8);
        let summary = sim.run(40, 10, 0.1).unwrap();
        assert_eq!(summary.steps, 40);
        assert_eq!(sim.steps_taken(), 40);
        assert_eq!(summary.diagnostics, sim.diagnostics());
        assert!(sim.u().same_shape(sim.v()));
        assert_eq!(sim.u().shape(), (16, 8));
    }

    #[test]
    fn zero_initialised_v_never_grows() {
        let mut sim = small(10, 10);
        sim.run(200, 0, 0.1).unwrap();
        assert!(sim.v().iter().all(|&c| c == 0.0));
        assert_eq!(sim.fraction_above_threshold(0.1), 0.0);
        let d = sim.diagnostics();
        assert_eq!(d.dv, sim.params().dv * d.laplace_v);
    }

    #[test]
    fn baseline_state_is_a_fixed_point() {
        let config = Config {
            nx: 10,
            ny: 10,
            init: InitialCondition::Baseline,
            ..Config::default()
        };
        let mut sim = GrayScottFactory::create(&config).unwrap();
        sim.run(50, 0, 0.5).unwrap();
        assert!(sim.u().iter().all(|&c| c == 1.0));
        assert!(sim.v().iter().all(|&c| c == 0.0));
    }
}
