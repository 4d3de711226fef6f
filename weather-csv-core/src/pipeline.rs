use tracing::{debug, info};

use crate::{
    Config, Result, WeatherProvider, WeatherRecord, appender::append_records,
    provider::openweather::OpenWeatherClient,
};

/// Fetches every city in order, one request at a time.
///
/// The first failure aborts the whole batch; nothing partial is returned.
pub async fn collect_records<P, S>(provider: &P, cities: &[S]) -> Result<Vec<WeatherRecord>>
where
    P: WeatherProvider + ?Sized,
    S: AsRef<str>,
{
    let mut records = Vec::with_capacity(cities.len());

    for city in cities {
        let record = provider.current_weather(city.as_ref()).await?;
        debug!(city = %record.city, temperature = record.temperature, "Fetched current weather");
        records.push(record);
    }

    Ok(records)
}

/// Fetch all configured cities, then append them to the output file in one write.
pub async fn run(config: &Config) -> Result<usize> {
    let client = OpenWeatherClient::new(config.api_key.clone()).with_base_url(&config.base_url);

    let records = collect_records(&client, config.cities.as_slice()).await?;
    let written = append_records(&records, &config.output_path)?;

    info!(rows = written, path = %config.output_path.display(), "Weather run complete");
    Ok(written)
}
