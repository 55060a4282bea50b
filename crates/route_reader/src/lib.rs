use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};
use serde::Deserialize;
use std::{io::Read, path::Path};

/// One row of a route table: a connection from `origin_id` to `destination_id`.
///
/// Column names follow the CSV layout
/// `id,city,to,ticket_average,distance,hours`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteRecord {
    #[serde(rename = "id")]
    pub origin_id: i64,
    #[serde(rename = "city")]
    pub origin_name: String,
    #[serde(rename = "to")]
    pub destination_id: i64,
    #[serde(rename = "ticket_average")]
    pub ticket_price: f64,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    // Not used for weighting
    #[serde(rename = "hours")]
    pub duration_hours: f64,
}

impl RouteRecord {
    /// Creates a record without any checks, see [`RouteRecord::validate`].
    pub fn new(
        origin_id: i64,
        origin_name: impl Into<String>,
        destination_id: i64,
        ticket_price: f64,
        distance_km: f64,
        duration_hours: f64,
    ) -> Self {
        RouteRecord {
            origin_id,
            origin_name: origin_name.into(),
            destination_id,
            ticket_price,
            distance_km,
            duration_hours,
        }
    }

    /// Fails unless ticket price and distance are finite and non-negative.
    ///
    /// Records returned by [`read_routes`] are always valid.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.ticket_price.is_finite() && self.ticket_price >= 0.0,
            "ticket price must be a non-negative number, got {}",
            self.ticket_price
        );
        anyhow::ensure!(
            self.distance_km.is_finite() && self.distance_km >= 0.0,
            "distance must be a non-negative number, got {}",
            self.distance_km
        );
        Ok(())
    }
}

/// Reads all route records from the CSV file at `path`.
///
/// Rows that cannot be parsed are logged and skipped. Failing to open the
/// file or to read it as CSV at all is an error.
pub fn read_routes(path: &Path) -> anyhow::Result<Vec<RouteRecord>> {
    info!("BEGIN reading routes from {}", path.display());
    let file = std::fs::File::open(path)
        .with_context(|| format!("Could not open file {}", path.display()))?;
    let records = read_routes_from(file)?;
    info!("FINISHED reading {} routes", records.len());
    Ok(records)
}

/// Same as [`read_routes`] but for any reader, e.g. an in-memory buffer.
pub fn read_routes_from<R: Read>(rdr: R) -> anyhow::Result<Vec<RouteRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);

    let headers = reader.headers().context("Failed to read header row")?.clone();

    let mut routes = Vec::new();
    let mut record = StringRecord::new();
    loop {
        if !reader
            .read_record(&mut record)
            .context("Failed to read route table")?
        {
            break;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match parse_row(&record, &headers) {
            Ok(route) => routes.push(route),
            Err(err) => warn!("Error parsing row at line {}: {:#}", line, err),
        }
    }

    Ok(routes)
}

fn parse_row(record: &StringRecord, headers: &StringRecord) -> anyhow::Result<RouteRecord> {
    anyhow::ensure!(
        record.len() == headers.len(),
        "expected {} fields, found {}",
        headers.len(),
        record.len()
    );
    let route: RouteRecord = record.deserialize(Some(headers))?;
    route.validate()?;
    Ok(route)
}
