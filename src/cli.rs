use clap::Parser;
use clap::ValueEnum;
use rdsim::config::Config;
use rdsim::error::Result;
use rdsim::model::{InitialCondition, Parameters};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Gray-Scott reaction-diffusion on a fixed 2D grid"
)]
pub struct Cli {
    // Grid settings
    #[arg(long, default_value = "256")]
    pub width: usize,
    #[arg(long, default_value = "256")]
    pub height: usize,

    // Simulation settings
    #[arg(long, default_value = "10000")]
    pub steps: usize,
    #[arg(long, default_value = "100")]
    pub interval: usize,
    #[arg(long, default_value = "0.1")]
    pub threshold: f64,
    #[arg(long, value_enum, default_value = "zero")]
    pub init: InitKind,
    #[arg(long)]
    pub verbose: bool,

    // Gray-Scott model parameters
    #[arg(long, default_value = "0.03")]
    pub param_f: f64,
    #[arg(long, default_value = "0.0648")]
    pub param_k: f64,
    #[arg(long, default_value = "0.06")]
    pub param_dt: f64,
    #[arg(long, default_value = "0.14")]
    pub param_du: f64,
    #[arg(long, default_value = "0.07")]
    pub param_dv: f64,
}

impl Cli {
    pub fn from_args() -> Self {
        Self::parse()
    }

    pub fn params(&self) -> Parameters {
        Parameters::new(
            self.param_du,
            self.param_dv,
            self.param_f,
            self.param_k,
            self.param_dt,
        )
    }

    pub fn validate_parameters(&self) -> Result<()> {
        self.params().validate()
    }

    pub fn config(&self) -> Config {
        Config {
            nx: self.width,
            ny: self.height,
            steps: self.steps,
            interval: self.interval,
            threshold: self.threshold,
            init: self.init.into(),
            params: self.params(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InitKind {
    Zero,
    Baseline,
}

impl From<InitKind> for InitialCondition {
    fn from(kind: InitKind) -> Self {
        match kind {
            InitKind::Zero => InitialCondition::Zero,
            InitKind::Baseline => InitialCondition::Baseline,
        }
    }
}
