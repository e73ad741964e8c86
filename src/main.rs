use anyhow::Context;
use clap::Parser;
use closecast::application::dispatcher::PredictionDispatcher;
use closecast::application::registry::ModelRegistry;
use closecast::config::Config;
use closecast::domain::types::{FeatureVector, PredictionOutcome};
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Next-day close price prediction from pre-trained models", long_about = None)]
struct Args {
    /// Model to use (display name from the registry table)
    #[arg(long, default_value = "Tata Motors")]
    model: String,

    /// Today's open price
    #[arg(long, required_unless_present = "list")]
    open: Option<f64>,

    /// Today's high price
    #[arg(long, required_unless_present = "list")]
    high: Option<f64>,

    /// Today's low price
    #[arg(long, required_unless_present = "list")]
    low: Option<f64>,

    /// Today's close price
    #[arg(long, required_unless_present = "list")]
    close: Option<f64>,

    /// List selectable model names and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = Config::from_env().context("Failed to load config")?;

    if args.list {
        for name in config.models.model_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let registry =
        ModelRegistry::from_config(&config.models).context("Failed to initialize model registry")?;
    info!(models = registry.len(), "Ready to serve predictions");

    let handle = registry.get(&args.model)?;

    let open = args.open.context("--open is required")?;
    let high = args.high.context("--high is required")?;
    let low = args.low.context("--low is required")?;
    let close = args.close.context("--close is required")?;
    let features = FeatureVector::new(open, high, low, close)?;

    let outcome = PredictionDispatcher::new().predict(&handle, &features);
    match &outcome {
        PredictionOutcome::Success(_) => {
            println!("Predicted close for tomorrow ({}): {}", handle.name(), outcome);
        }
        PredictionOutcome::Failure(_) => {
            eprintln!("{}", outcome);
        }
    }

    Ok(())
}
