//! Gray-Scott reaction-diffusion on a fixed 2D grid.
//!
//! Two concentration fields `U` and `V` evolve under an explicit Euler scheme
//! with a 5-point Laplacian. The outermost ring of cells is held fixed.
//!
//! ```
//! use rdsim::config::Config;
//! use rdsim::model::GrayScottFactory;
//!
//! let config = Config { nx: 32, ny: 32, ..Config::default() };
//! let mut sim = GrayScottFactory::create(&config).unwrap();
//! let summary = sim.run(100, 0, config.threshold).unwrap();
//! assert_eq!(summary.steps, 100);
//! assert!(sim.fraction_above_threshold(config.threshold) <= 1.0);
//! ```

pub mod config;
pub mod error;
pub mod model;
