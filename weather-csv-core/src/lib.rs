//! Core library for the `weather-csv` tool.
//!
//! This crate defines:
//! - A fixed city → coordinate table
//! - An OpenWeather client producing flat weather records
//! - An append-only CSV writer that emits a header only for new files
//!
//! `pipeline::run` ties them together for the binary.

pub mod appender;
pub mod config;
pub mod error;
pub mod geo;
pub mod model;
pub mod pipeline;
pub mod provider;

pub use appender::{append_records, normalize_output_path};
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use geo::GeoCoordinate;
pub use model::{CsvRow, WeatherRecord};
pub use provider::{WeatherProvider, openweather::OpenWeatherClient};
