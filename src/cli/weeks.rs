use anyhow::Result;
use serde_json::{Value, json};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::AppConfig;
use crate::menu::{MenuSource, SheetCsvSource};

pub async fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::default();
    let schedule = SheetCsvSource::new(&config.sheet_csv_url)
        .schedule()
        .await?;

    let weeks: Vec<Value> = schedule.iter().map(|week| week.to_json()).collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "count": weeks.len(),
            "weeks": weeks,
        }))?
    );
    Ok(())
}
