use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

pub mod ask;
pub mod serve;
pub mod weeks;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Print what's planned for a day
    Ask {
        /// A date (2026-02-17), ISO week (2026-W08) or weekday name (viernes)
        #[arg(long)]
        day: Option<String>,
        /// Resolve the day relative to this date instead of the clock
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Print every week parsed from the sheet as JSON
    Weeks {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::Ask { day, today }) => {
            ask::run(day, today).await?;
        }
        Some(Command::Weeks {}) => {
            weeks::run().await?;
        }
        None => {}
    }

    Ok(())
}
