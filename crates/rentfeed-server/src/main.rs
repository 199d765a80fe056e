mod api;
mod constants;
mod credentials;

use std::str::FromStr;

use clap::Parser;
use rand::Rng;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use rentfeed_core::{ConfigError, MAX_RECORDS_PER_REQUEST, RecordCount, ServiceConfig};

use constants::{defaults, env};

#[derive(Debug, Error)]
enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "rentfeed", version, about = "Mock rental-listings API")]
struct Cli {
    /// Port for the HTTP listener; falls back to PORT.
    #[arg(long)]
    port: Option<u16>,
    /// Records generated per request, 1..=1000; falls back to
    /// RENTFEED_RECORDS, then to a value drawn once at startup.
    #[arg(long)]
    records: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::info!(
        port = config.port,
        records_per_request = config.records_per_request.get(),
        "initialized config"
    );

    api::setup_and_serve(config).await?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ServiceConfig, ServerError> {
    let secret_key = env_or(env::SECRET_KEY, defaults::SECRET_KEY);
    let secret_password = env_or(env::SECRET_PASSWORD, defaults::SECRET_PASSWORD);

    let port = match cli.port {
        Some(port) => port,
        None => parse_env(env::PORT)?.unwrap_or(defaults::PORT),
    };

    let records = match cli.records {
        Some(value) => Some(value),
        None => parse_env(env::RECORDS)?,
    };
    let records = match records {
        Some(value) => RecordCount::new(value)?,
        // No count configured: draw one at startup and keep it for the
        // process lifetime.
        None => draw_record_count(&mut rand::rng())?,
    };

    Ok(ServiceConfig::new(
        secret_key,
        secret_password,
        records,
        port,
    )?)
}

fn draw_record_count(rng: &mut impl Rng) -> Result<RecordCount, ConfigError> {
    RecordCount::new(rng.random_range(1..=MAX_RECORDS_PER_REQUEST))
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn drawn_record_count_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let count = draw_record_count(&mut rng).expect("valid draw").get();
            assert!((1..=MAX_RECORDS_PER_REQUEST).contains(&count));
        }
    }
}
