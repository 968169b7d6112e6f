use anyhow::Result;
use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::AppConfig;
use crate::menu::{MenuSource, ResolvedQuery, SheetCsvSource, compose, resolve};

pub async fn run(day: Option<String>, today: Option<NaiveDate>) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::default();
    let today = today.unwrap_or_else(|| config.today());
    let date = resolve(day.as_deref(), today);
    let query = ResolvedQuery::new(date);
    tracing::info!(
        "Resolved {:?} to {} ({}, ISO week {})",
        day.as_deref().unwrap_or(""),
        query.date,
        query.day_name,
        query.iso_week
    );

    let schedule = SheetCsvSource::new(&config.sheet_csv_url)
        .schedule()
        .await?;
    println!("{}", compose(date, &schedule));

    Ok(())
}
