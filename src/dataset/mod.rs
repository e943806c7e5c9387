//! CSV-backed tabular dataset, loaded once and read-only for the session.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv_async::{AsyncReaderBuilder, AsyncWriterBuilder};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::{fs::File, io::BufReader};

/// Fallback coordinate for rows (or whole tables) without usable
/// latitude/longitude: Jakarta, the dataset's home.
pub const DEFAULT_LOCATION: (f64, f64) = (-6.2, 106.816666);

const LATITUDE_ALIASES: &[&str] = &["latitude", "lat"];
const LONGITUDE_ALIASES: &[&str] = &["longitude", "lon", "lng"];

#[derive(Debug, Error, PartialEq)]
pub enum ColumnError {
    #[error("unknown column '{0}'")]
    Unknown(String),
    #[error("column '{column}' is not numeric: value '{value}' at data row {row}")]
    NotNumeric {
        column: String,
        value: String,
        row: usize,
    },
}

/// Rectangular table of named string columns with a header row.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, padding short rows and truncating long ones so every
    /// row matches the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .await
            .with_context(|| format!("cannot open dataset {}", path.display()))?;
        let mut reader = AsyncReaderBuilder::new()
            .flexible(true)
            .create_reader(BufReader::new(file));

        let headers: Vec<String> = reader
            .headers()
            .await
            .context("dataset has no readable header row")?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() {
            return Err(anyhow!("dataset {} has an empty header row", path.display()));
        }

        let mut rows = Vec::new();
        let mut records = reader.records();
        while let Some(record) = records.next().await {
            let record = record.with_context(|| format!("malformed record in {}", path.display()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self::new(headers, rows))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Case-insensitive column lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.eq_ignore_ascii_case(name))
    }

    /// Canonical header name for a (possibly differently-cased) column name.
    pub fn resolve_column(&self, name: &str) -> Option<&str> {
        self.column_index(name).map(|i| self.headers[i].as_str())
    }

    pub fn column(&self, name: &str) -> Result<Vec<&str>, ColumnError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| ColumnError::Unknown(name.to_string()))?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, ColumnError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| ColumnError::Unknown(name.to_string()))?;
        let mut values = Vec::with_capacity(self.rows.len());
        for (row_no, row) in self.rows.iter().enumerate() {
            let cell = row[idx].trim();
            let value = cell.parse::<f64>().map_err(|_| ColumnError::NotNumeric {
                column: self.headers[idx].clone(),
                value: cell.to_string(),
                row: row_no + 1,
            })?;
            values.push(value);
        }
        Ok(values)
    }

    /// Serialize the header plus the first `max_rows` rows back to CSV text.
    /// This is the small data excerpt handed to the chat dispatcher.
    pub async fn excerpt(&self, max_rows: usize) -> Result<String> {
        let mut writer = AsyncWriterBuilder::new().create_writer(Vec::new());
        writer.write_record(&self.headers).await?;
        for row in self.rows.iter().take(max_rows) {
            writer.write_record(row).await?;
        }
        let buf = writer
            .into_inner()
            .await
            .map_err(|e| anyhow!("excerpt serialization failed: {}", e))?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Extract map points from a geo table. Rows with missing or unparsable
/// coordinates fall back to [`DEFAULT_LOCATION`], as does a table with no
/// latitude/longitude columns at all.
pub fn geo_points(table: &Table) -> Vec<(f64, f64)> {
    let lat = find_any(table, LATITUDE_ALIASES);
    let lon = find_any(table, LONGITUDE_ALIASES);
    let (Some(lat), Some(lon)) = (lat, lon) else {
        return vec![DEFAULT_LOCATION];
    };
    if table.row_count() == 0 {
        return vec![DEFAULT_LOCATION];
    }
    table
        .rows()
        .iter()
        .map(|row| {
            let parse = |i: usize| row.get(i).and_then(|v| v.trim().parse::<f64>().ok());
            match (parse(lat), parse(lon)) {
                (Some(latitude), Some(longitude)) => (latitude, longitude),
                _ => DEFAULT_LOCATION,
            }
        })
        .collect()
}

fn find_any(table: &Table, aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| table.column_index(alias))
}
