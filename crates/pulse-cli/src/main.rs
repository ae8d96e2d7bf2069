use clap::Parser;
use tracing::{info, warn};

use pulse_bus::{Event, SubscriptionManager, TOPIC_SUBSCRIPTIONS, TOPIC_TIME_WILDCARD};

mod config;

/// Subscribe to timeframe ticks and print every event as a JSON line.
#[derive(Debug, Parser)]
#[command(name = "pulse", version, about)]
struct Cli {
    /// Timeframe token (e.g. "5s", "2h") or cron string; repeatable.
    /// Overrides the configured list.
    #[arg(short, long = "timeframe")]
    timeframe: Vec<String>,

    /// Path to the config file (default: pulse.toml).
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = config::CliConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!("Config load failed ({e}), using defaults");
        config::CliConfig::default()
    });

    let timeframes = if cli.timeframe.is_empty() {
        config.timeframes
    } else {
        cli.timeframe
    };

    let manager = SubscriptionManager::new();
    let mut confirmations = manager.on(TOPIC_SUBSCRIPTIONS);
    let mut ticks = manager.on(TOPIC_TIME_WILDCARD);

    for timeframe in &timeframes {
        manager.subscribe(timeframe)?;
    }
    info!(count = timeframes.len(), "subscriptions active — Ctrl-C to exit");

    loop {
        tokio::select! {
            event = confirmations.recv() => print_event(event)?,
            event = ticks.recv() => print_event(event)?,
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    manager.unsubscribe_all();
    info!("all subscriptions stopped");
    Ok(())
}

fn print_event(
    event: Result<Event, tokio::sync::broadcast::error::RecvError>,
) -> anyhow::Result<()> {
    match event {
        Ok(event) => println!("{}", serde_json::to_string(&event)?),
        Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
            warn!(missed, "event consumer lagged behind");
        }
        Err(tokio::sync::broadcast::error::RecvError::Closed) => {
            anyhow::bail!("event bus closed unexpectedly");
        }
    }
    Ok(())
}
