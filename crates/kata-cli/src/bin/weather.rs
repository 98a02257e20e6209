use anyhow::{Context, Result};
use kata_weather::{pick_candidate, render_location, render_report, WeatherClient, WeatherError};
use std::io::Write;

const ADDRESS_PROMPT: &str = "Enter an Address: ";
const ADDRESS_INDEX_PROMPT: &str = "Enter an address index: ";
const ADDRESS_DOES_NOT_EXIST_MESSAGE: &str = "Address does not exist.";

#[tokio::main]
async fn main() -> Result<()> {
    kata_core::init()?;
    let config = kata_core::Config::load()?;

    let api_key = config
        .weather
        .api_key()
        .context("No API key configured. Set KATA_WEATHER_API_KEY.")?;

    let client = WeatherClient::new(
        &config.weather.geocode_url,
        &config.weather.weather_url,
        &api_key,
    )?;

    let address = prompt(ADDRESS_PROMPT)?;

    let candidates = match client.geocode(&address).await {
        Ok(candidates) => candidates,
        Err(e @ WeatherError::Status(_)) => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if candidates.is_empty() {
        println!("{}", ADDRESS_DOES_NOT_EXIST_MESSAGE);
        return Ok(());
    }

    for (i, candidate) in candidates.iter().enumerate() {
        println!("{}    {}", i, candidate.formatted_address);
    }

    let index_input = prompt(ADDRESS_INDEX_PROMPT)?;
    let candidate = match pick_candidate(&index_input, &candidates) {
        Ok(candidate) => candidate,
        Err(e) => {
            // Invalid or out-of-range index aborts; there is no re-prompt
            println!("{}", e);
            return Ok(());
        }
    };

    let (latitude, longitude) = (candidate.latitude(), candidate.longitude());
    for line in render_location(latitude, longitude) {
        println!("{}", line);
    }

    let conditions = match client.current_conditions(latitude, longitude).await {
        Ok(conditions) => conditions,
        Err(e @ WeatherError::Status(_)) => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for line in render_report(&conditions) {
        println!("{}", line);
    }

    Ok(())
}

fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;

    Ok(line.trim().to_string())
}
