//! Generate Sample Delivery Table
//!
//! Runs every category × location × shipping combination through the
//! estimator and prints the table followed by the two analytics views.
//! Run with: cargo run --bin sample_table

use timelytics::{hours_to_readable, Config, Estimator, MarkdownFormatter, OutputFormat, SampleData};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timelytics=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    let mut estimator = Estimator::from_seed_option(config.seed);
    let data = SampleData::generate(&mut estimator);
    let analytics = data.analytics()?;

    match config.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "rows": data.rows,
                "analytics": analytics,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Markdown => {
            println!("# Sample Delivery Table\n");
            println!("| Product Category | Location | Shipping Method | Hours | Readable |");
            println!("|---|---|---|---|---|");
            for row in &data.rows {
                println!(
                    "| {} | {} | {} | {:.1} | {} |",
                    row.category,
                    row.location,
                    row.shipping,
                    row.hours,
                    hours_to_readable(row.hours)
                );
            }
            println!();
            print!("{}", MarkdownFormatter::format_analytics(&analytics));
        }
    }

    Ok(())
}
