use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::{CsvRow, Error, Result};

const CSV_EXTENSION: &str = ".csv";

/// Appends `.csv` unless the path already ends with it.
pub fn normalize_output_path(path: &str) -> PathBuf {
    if path.ends_with(CSV_EXTENSION) {
        PathBuf::from(path)
    } else {
        PathBuf::from(format!("{path}{CSV_EXTENSION}"))
    }
}

/// Appends one line per record to `path`, creating the file if needed.
///
/// A header built from the first record's field names is written only when the file did not
/// exist beforehand. Existing headers are never checked against the records, so appending a
/// different schema to an old file silently misaligns columns. Values are written verbatim
/// unless they contain a delimiter, quote or line break, in which case they are quoted.
///
/// Returns the number of data rows written.
pub fn append_records<R: CsvRow>(records: &[R], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let first = records.first().ok_or(Error::EmptyInput)?;

    let existed = path.is_file();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    let csv_err = |source| Error::Csv { path: path.to_path_buf(), source };

    if !existed {
        writer.write_record(first.field_names()).map_err(csv_err)?;
    }

    for record in records {
        writer.write_record(record.field_values()).map_err(csv_err)?;
    }

    writer
        .flush()
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;

    info!(
        path = %path.display(),
        rows = records.len(),
        header = !existed,
        "Appended weather rows"
    );

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, WeatherRecord};
    use std::fs;

    fn record(city: &str, description: &str) -> WeatherRecord {
        WeatherRecord {
            city: city.into(),
            date: "10/23/2022".into(),
            temperature: 50.1,
            description: description.into(),
            pressure: 1026,
            humidity: 35,
        }
    }

    #[test]
    fn normalize_appends_extension() {
        assert_eq!(normalize_output_path("weather"), PathBuf::from("weather.csv"));
        assert_eq!(normalize_output_path("out/weather.csv"), PathBuf::from("out/weather.csv"));
        assert_eq!(normalize_output_path("weather.CSV"), PathBuf::from("weather.CSV.csv"));
    }

    #[test]
    fn new_file_gets_header_then_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.csv");

        let written =
            append_records(&[record("boston", "few clouds"), record("london", "mist")], &path)
                .unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "city,date,temperature,description,pressure,humidity\n\
             boston,10/23/2022,50.1,few clouds,1026,35\n\
             london,10/23/2022,50.1,mist,1026,35\n"
        );
    }

    #[test]
    fn second_append_skips_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.csv");

        append_records(&[record("boston", "few clouds")], &path).unwrap();
        append_records(&[record("london", "mist")], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines.iter().filter(|l| l.starts_with("city,")).count(), 1);
        assert_eq!(lines[2], "london,10/23/2022,50.1,mist,1026,35");
    }

    #[test]
    fn existing_file_is_never_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();

        append_records(&[record("boston", "few clouds")], &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "a,b\n1,2\nboston,10/23/2022,50.1,few clouds,1026,35\n"
        );
    }

    #[test]
    fn empty_input_is_rejected_without_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.csv");

        let err = append_records::<WeatherRecord>(&[], &path).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        assert!(!path.exists());
    }

    #[test]
    fn missing_parent_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("weather.csv");

        let err = append_records(&[record("boston", "few clouds")], &path).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn rows_split_back_into_field_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.csv");
        let records = [record("san francisco", "overcast clouds"), record("boston", "haze")];

        append_records(&records, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        for (line, record) in contents.lines().skip(1).zip(&records) {
            let fields: Vec<String> = line.split(',').map(str::to_string).collect();
            assert_eq!(fields, record.field_values());
        }
    }

    #[test]
    fn values_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.csv");

        append_records(&[record("boston", "rain, heavy")], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("boston,10/23/2022,50.1,\"rain, heavy\",1026,35\n"));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[3], "rain, heavy");
    }
}
