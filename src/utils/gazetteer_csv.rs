//! Reader for worldcities-style gazetteer CSV files.
//!
//! Rows are matched by header name; columns other than `city`, `city_ascii`,
//! `lat`, `lng`, `country` and `admin_name` are ignored. Empty text cells
//! become empty strings.

use serde::Deserialize;
use std::io::Read;

use crate::domain::entities::NewCity;
use crate::domain::regions::continent_for;

#[derive(Debug, Deserialize)]
struct CityRow {
    #[serde(default)]
    city: String,
    #[serde(default)]
    city_ascii: String,
    lat: f64,
    lng: f64,
    #[serde(default)]
    country: String,
    #[serde(default)]
    admin_name: String,
}

impl From<CityRow> for NewCity {
    fn from(row: CityRow) -> Self {
        let region = continent_for(&row.country).map(str::to_string);
        Self {
            city: row.city,
            city_ascii: row.city_ascii,
            lat: row.lat,
            lng: row.lng,
            country: row.country,
            admin_name: row.admin_name,
            region,
        }
    }
}

/// Parsed gazetteer plus the rows that could not be read.
#[derive(Debug, Default)]
pub struct GazetteerImport {
    pub cities: Vec<NewCity>,
    /// 1-based data line numbers and reasons of skipped rows.
    pub skipped: Vec<(u64, String)>,
}

/// Reads every row of a gazetteer CSV, assigning each city its continent.
///
/// Malformed rows (e.g. non-numeric coordinates) are collected in
/// [`GazetteerImport::skipped`] instead of aborting the import.
///
/// # Errors
///
/// Returns an error if the header row cannot be read.
pub fn read_gazetteer<R: Read>(reader: R) -> Result<GazetteerImport, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader.headers()?;

    let mut import = GazetteerImport::default();
    for (index, record) in csv_reader.deserialize::<CityRow>().enumerate() {
        match record {
            Ok(row) => import.cities.push(row.into()),
            Err(e) => import.skipped.push((index as u64 + 1, e.to_string())),
        }
    }

    Ok(import)
}
