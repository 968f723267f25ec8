//! CSV Export
//!
//! Writes the filtered subset or a grouping to any `io::Write` as CSV.
//! Absent values are written as empty cells.

use std::io::Write;
use thiserror::Error;

use crate::pipeline::{GroupedCount, SeriesPoint};
use crate::record::{Field, Record};

/// Column order of a record export
pub const RECORD_COLUMNS: [&str; 17] = [
    "title",
    "country",
    "sector",
    "region",
    "topic",
    "intensity",
    "likelihood",
    "relevance",
    "impact",
    "pestle",
    "source",
    "insight",
    "start_year",
    "end_year",
    "added",
    "published",
    "url",
];

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write records with a header row. Returns the number of data rows.
pub fn write_records<'a, W, I>(writer: W, records: I) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(RECORD_COLUMNS)?;

    let mut rows = 0;
    for record in records {
        csv.write_record([
            text(&record.title),
            text(&record.country),
            text(&record.sector),
            text(&record.region),
            text(&record.topic),
            text(&record.intensity),
            number(record.likelihood),
            number(record.relevance),
            number(record.impact),
            text(&record.pestle),
            text(&record.source),
            text(&record.insight),
            year(record.start_year),
            year(record.end_year),
            text(&record.added),
            text(&record.published),
            text(&record.url),
        ])?;
        rows += 1;
    }

    csv.flush()?;
    Ok(rows)
}

/// Write one grouping as `<field>,count` rows in grouping order
pub fn write_counts<W: Write>(
    writer: W,
    key_header: &str,
    counts: &[GroupedCount],
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([key_header, "count"])?;
    for group in counts {
        csv.write_record([group.key.as_str(), group.count.to_string().as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the likelihood series as `title,likelihood` rows
pub fn write_series<W: Write>(writer: W, points: &[SeriesPoint]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["title", "likelihood"])?;
    for point in points {
        csv.write_record([point.label.as_str(), point.value.to_string().as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write filter options as `field,value` rows, one per option
pub fn write_facets<W: Write>(writer: W, facets: &[(Field, &[String])]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["field", "value"])?;
    for (field, values) in facets {
        for value in values.iter() {
            csv.write_record([field.as_str(), value.as_str()])?;
        }
    }
    csv.flush()?;
    Ok(())
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn year(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_records() {
        let records = vec![
            Record::new()
                .titled("Gas, oil and coal")
                .with(Field::Country, "USA")
                .with(Field::Intensity, "6")
                .with_likelihood(3.0)
                .with_url("http://example.com/report"),
            Record::new(),
        ];

        let mut out = Vec::new();
        let rows = write_records(&mut out, &records).unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("title,country,sector,region,topic,intensity,likelihood"));
        assert!(lines[1].starts_with("\"Gas, oil and coal\",USA,,,,6,3,"));
        assert!(lines[1].ends_with(",http://example.com/report"));
        assert_eq!(lines[2], ",".repeat(RECORD_COLUMNS.len() - 1));
    }

    #[test]
    fn test_write_counts() {
        let counts = vec![GroupedCount::new("Energy", 2), GroupedCount::new("", 1)];
        let mut out = Vec::new();
        write_counts(&mut out, "sector", &counts).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "sector,count\nEnergy,2\n,1\n");
    }

    #[test]
    fn test_write_series() {
        let points = vec![SeriesPoint {
            label: "a".to_string(),
            value: 2.5,
        }];
        let mut out = Vec::new();
        write_series(&mut out, &points).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "title,likelihood\na,2.5\n");
    }

    #[test]
    fn test_write_facets_quotes_values() {
        let sectors = vec!["Energy".to_string(), "Oil, gas".to_string()];
        let regions = vec!["North\rAmerica".to_string()];
        let facets = [
            (Field::Sector, sectors.as_slice()),
            (Field::Region, regions.as_slice()),
        ];

        let mut out = Vec::new();
        write_facets(&mut out, &facets).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "field,value\nsector,Energy\nsector,\"Oil, gas\"\nregion,\"North\rAmerica\"\n"
        );
    }
}
