//! CSV loading and row validation.
//!
//! Rows that fail to parse or carry out-of-range coordinates are dropped
//! silently (counted at debug level); only structural problems such as a
//! missing header column or an unreadable file are fatal.

use crate::error::{Error, Result};
use crate::geometry::GeoPoint;
use std::path::Path;

/// Load geographic points from a CSV file.
///
/// The header must contain `lat_column` and `lon_column`. Each data row is
/// validated with [`GeoPoint::is_valid`]; invalid rows (unparseable fields,
/// short rows, out-of-range coordinates) are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a required column is
/// absent from the header.
pub fn load_points<P: AsRef<Path>>(
    path: P,
    lat_column: &str,
    lon_column: &str,
) -> Result<Vec<GeoPoint>> {
    // Flexible so short rows become drops instead of reader errors.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader.headers()?;
    let lat_idx = column_index(headers, lat_column)?;
    let lon_idx = column_index(headers, lon_column)?;

    let mut points = Vec::new();
    let mut dropped = 0usize;

    for record in reader.records() {
        let record = record?;
        match parse_row(&record, lat_idx, lon_idx) {
            Some(point) => points.push(point),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} invalid rows");
    }
    log::info!("loaded {} valid points", points.len());

    Ok(points)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::MissingColumn {
            name: name.to_string(),
        })
}

fn parse_row(record: &csv::StringRecord, lat_idx: usize, lon_idx: usize) -> Option<GeoPoint> {
    let latitude: f64 = record.get(lat_idx)?.trim().parse().ok()?;
    let longitude: f64 = record.get(lon_idx)?.trim().parse().ok()?;

    let point = GeoPoint::new(latitude, longitude);
    point.is_valid().then_some(point)
}
