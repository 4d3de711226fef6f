use std::path::PathBuf;

use crate::{appender::normalize_output_path, geo::DEFAULT_CITIES, provider::openweather};

/// Settings for a single run, assembled from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeather API key; passed through untouched.
    pub api_key: String,
    pub output_path: PathBuf,
    pub base_url: String,
    /// Cities to fetch, in output order.
    pub cities: Vec<String>,
}

impl Config {
    pub fn new(api_key: impl Into<String>, output: &str) -> Self {
        Self {
            api_key: api_key.into(),
            output_path: normalize_output_path(output),
            base_url: openweather::DEFAULT_BASE_URL.to_string(),
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = cities.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let cfg = Config::new("KEY", "out/weather");

        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.output_path, PathBuf::from("out/weather.csv"));
        assert_eq!(cfg.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(cfg.cities, vec!["boston", "san francisco", "london"]);
    }

    #[test]
    fn builders_override_defaults() {
        let cfg = Config::new("KEY", "weather.csv")
            .with_base_url("http://localhost:8080")
            .with_cities(["london"]);

        assert_eq!(cfg.output_path, PathBuf::from("weather.csv"));
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.cities, vec!["london"]);
    }
}
