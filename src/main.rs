mod cli;
use cli::Cli;
use rdsim::model::GrayScottFactory;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::from_args();
    init_tracing(cli.verbose);
    if let Err(e) = cli.validate_parameters() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = cli.config();
    let result = GrayScottFactory::create(&config).and_then(|mut sim| {
        let summary = sim.run(config.steps, config.interval, config.threshold)?;
        Ok((summary, sim.fraction_above_threshold(config.threshold)))
    });

    match result {
        Ok((summary, fraction)) => {
            let d = summary.diagnostics;
            println!(
                "steps={} laplace_u={:e} laplace_v={:e} du={:e} dv={:e} v_fraction={}",
                summary.steps, d.laplace_u, d.laplace_v, d.du, d.dv, fraction
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
