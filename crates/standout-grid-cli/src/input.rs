//! Reading records from CSV and JSON.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Guesses the format from a file extension, defaulting to CSV.
    pub fn detect(path: Option<&Path>) -> Self {
        match path.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Csv,
        }
    }
}

/// Tabular input: optional headers and rows of values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Records {
    /// Column names; empty when the input has none.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Records {
    /// Number of columns needed to hold every row.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}

pub fn read(reader: impl Read, format: Format) -> Result<Records> {
    match format {
        Format::Csv => read_csv(reader),
        Format::Json => read_json(reader),
    }
}

/// Reads CSV; the first record is the header.
pub fn read_csv(reader: impl Read) -> Result<Records> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading CSV record {}", index + 1))?;
        rows.push(record.iter().map(|field| Value::String(field.to_string())).collect());
    }

    Ok(Records { headers, rows })
}

/// Reads a JSON array of objects (keys become headers) or of arrays
/// (no headers).
pub fn read_json(mut reader: impl Read) -> Result<Records> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .context("reading JSON input")?;
    let document: Value = serde_json::from_str(&source).context("parsing JSON input")?;

    let Value::Array(items) = document else {
        bail!("expected a JSON array of records");
    };

    if items.iter().all(Value::is_array) {
        let rows = items
            .into_iter()
            .filter_map(|item| match item {
                Value::Array(values) => Some(values),
                _ => None,
            })
            .collect();
        return Ok(Records {
            headers: Vec::new(),
            rows,
        });
    }

    let mut headers: Vec<String> = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let Value::Object(map) = item else {
            bail!("record {} is not an object", index + 1);
        };
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|key| item.get(key).cloned().unwrap_or(Value::Null))
                .collect()
        })
        .collect();

    Ok(Records { headers, rows })
}
