use std::io::Write;

use airvisual_lookup::{AirQualityClient, Config};
use tracing::{Instrument, info, span, warn};
use tracing_subscriber::EnvFilter;

/// Reads `city, state, country` lines from stdin and prints the air quality data for each
/// until the user sends `exit` or closes the input.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    info!("Loaded configuration: {:?}", config);
    let client = AirQualityClient::new(&config)?;

    span!(tracing::Level::INFO, "lookup", role = "prompt").in_scope(|| {
        info!("Enter a location as `city, state, country`");
        info!("Send `exit` to stop");
    });

    let mut buffer = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        buffer.clear();
        if std::io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let line = buffer.trim();
        if line == "exit" {
            info!("User wants to exit");
            break;
        }
        if line.is_empty() {
            continue;
        }

        let Some((city, state, country)) = parse_location(line) else {
            warn!("Expected `city, state, country`, got: {}", line);
            continue;
        };

        let data = client
            .lookup_or_none(city, state, country)
            .instrument(span!(tracing::Level::INFO, "lookup", city, state, country))
            .await;

        match data {
            Some(data) => println!("{}", serde_json::to_string_pretty(&data)?),
            None => println!("no air quality data available"),
        }
    }

    Ok(())
}

/// Splits `city, state, country` into its three trimmed parts.
fn parse_location(line: &str) -> Option<(&str, &str, &str)> {
    let mut parts = line.split(',').map(str::trim);
    let location = (parts.next()?, parts.next()?, parts.next()?);
    match parts.next() {
        Some(_) => None,
        None => Some(location),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        assert_eq!(
            parse_location("Los Angeles, California , USA"),
            Some(("Los Angeles", "California", "USA"))
        );
        assert_eq!(parse_location(",,"), Some(("", "", "")));
        assert_eq!(parse_location("Los Angeles, USA"), None);
        assert_eq!(parse_location("a, b, c, d"), None);
    }
}
