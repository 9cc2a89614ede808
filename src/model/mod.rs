mod domain;
mod factory;
mod field;
mod gray_scott;
mod init;
pub mod metric;
mod parameters;
mod step;

pub use domain::Domain;
pub use factory::GrayScottFactory;
pub use field::Field;
pub use gray_scott::{GrayScott, RunSummary};
pub use init::{init, InitialCondition};
pub use metric::{count_above_threshold, fraction_above_threshold};
pub use parameters::Parameters;
pub use step::{step, step_into, Diagnostics, StepResult};
