use serde::{Deserialize, Serialize};

/// A value that can be written as one CSV line.
///
/// `field_names` and `field_values` must have the same length and order;
/// the names of the first row become the header of a new file.
pub trait CsvRow {
    fn field_names(&self) -> Vec<&str>;
    fn field_values(&self) -> Vec<String>;
}

/// One city's current conditions, in imperial units.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    /// `MM/DD/YYYY` in the zone the observation was rendered in.
    pub date: String,
    pub temperature: f64,
    pub description: String,
    pub pressure: u32,
    pub humidity: u8,
}

impl WeatherRecord {
    pub const FIELD_NAMES: [&'static str; 6] = [
        "city",
        "date",
        "temperature",
        "description",
        "pressure",
        "humidity",
    ];
}

impl CsvRow for WeatherRecord {
    fn field_names(&self) -> Vec<&str> {
        Self::FIELD_NAMES.to_vec()
    }

    fn field_values(&self) -> Vec<String> {
        vec![
            self.city.clone(),
            self.date.clone(),
            format_float(self.temperature),
            self.description.clone(),
            self.pressure.to_string(),
            self.humidity.to_string(),
        ]
    }
}

/// Whole numbers keep a trailing `.0` so the column always reads as a float.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
