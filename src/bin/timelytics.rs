// Delivery time prediction CLI
//
// Usage: timelytics <category> <location> <shipping>
// Example: timelytics "Home & Garden" Rural Economy

use anyhow::Context;
use timelytics::{
    Config, Estimator, InsightGenerator, JsonFormatter, MarkdownFormatter, OutputFormat,
    PredictionRequest,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timelytics=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        anyhow::bail!("Usage: timelytics <category> <location> <shipping>");
    }

    let config = Config::from_env()?;
    tracing::debug!("Configuration: seed={:?}, format={:?}", config.seed, config.format);

    // Restrict to the closed enumerations before estimating
    let request = PredictionRequest::parse(&args[0], &args[1], &args[2])
        .context("Unsupported order details")?;

    let mut estimator = Estimator::from_seed_option(config.seed);
    let hours = estimator.predict_request(&request);
    let report = InsightGenerator::report(&request, hours, chrono::Local::now());

    let output = match config.format {
        OutputFormat::Markdown => MarkdownFormatter::format(&report),
        OutputFormat::Json => JsonFormatter::format(&report)?,
    };
    println!("{}", output);

    Ok(())
}
