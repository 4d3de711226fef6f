use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Result, WeatherRecord};

pub mod openweather;

/// Source of current conditions for a named city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherRecord>;
}
