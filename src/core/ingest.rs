use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{Column, Columns, RawCell};
use crate::error::{LogPlotError, LogPlotResult};

/// File-level input format, usually resolved from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    /// Delimited text using the configured delimiter.
    Csv,
    /// Tab-delimited text regardless of the configured delimiter.
    Tsv,
    /// A JSON array of key-value records.
    Json,
}

impl InputFormat {
    /// Resolves a format from a file extension (case-insensitive, without dot).
    pub fn from_extension(extension: &str) -> LogPlotResult<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "json" => Ok(Self::Json),
            other => Err(LogPlotError::UnsupportedFormat(format!(
                "unrecognized file extension `.{other}`; expected .csv or .json"
            ))),
        }
    }

    pub fn from_path(path: &Path) -> LogPlotResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                LogPlotError::UnsupportedFormat(format!(
                    "`{}` has no file extension",
                    path.display()
                ))
            })?;
        Self::from_extension(extension)
    }
}

/// Parsing options applied to every upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Leading physical lines (or leading JSON records) dropped before parsing.
    pub skip_lines: usize,
    /// After `skip_lines`, leading lines starting with this prefix are dropped
    /// up to the first non-comment line. Delimited text only.
    pub comment_prefix: Option<String>,
    pub delimiter: char,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            skip_lines: 0,
            comment_prefix: Some("#".to_owned()),
            delimiter: ',',
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_skip_lines(mut self, skip_lines: usize) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: Option<&str>) -> Self {
        self.comment_prefix = prefix.map(str::to_owned);
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Raw upload content handed to the ingestor.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput<'a> {
    Delimited(&'a str),
    Json(&'a str),
    /// Records already decoded by the host.
    Records(Vec<Value>),
}

/// Parses raw input into named columns.
///
/// The first header cell (or first record key) names the key column. Inputs
/// without data rows or without any column besides the key are rejected.
pub fn ingest(raw: RawInput<'_>, options: &IngestOptions) -> LogPlotResult<Columns> {
    match raw {
        RawInput::Delimited(text) => ingest_delimited(text, delimiter_byte(options.delimiter)?, options),
        RawInput::Json(text) => ingest_json(text, options),
        RawInput::Records(records) => ingest_records(records, options),
    }
}

/// Decodes `bytes` as UTF-8 and ingests them in the given format.
pub fn ingest_bytes(
    bytes: &[u8],
    format: InputFormat,
    options: &IngestOptions,
) -> LogPlotResult<Columns> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| LogPlotError::MalformedInput(format!("input is not valid UTF-8: {e}")))?;
    match format {
        InputFormat::Csv => ingest(RawInput::Delimited(text), options),
        InputFormat::Tsv => ingest_delimited(text, b'\t', options),
        InputFormat::Json => ingest(RawInput::Json(text), options),
    }
}

fn delimiter_byte(delimiter: char) -> LogPlotResult<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            LogPlotError::InvalidData(format!("delimiter `{delimiter}` must be an ASCII character"))
        })
}

fn ingest_delimited(text: &str, delimiter: u8, options: &IngestOptions) -> LogPlotResult<Columns> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let body = skip_leading_lines(text, options.skip_lines);
    let body = match options.comment_prefix.as_deref() {
        Some(prefix) => skip_comment_lines(body, prefix),
        None => body,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let names: Vec<String> = reader
        .headers()
        .map_err(|e| LogPlotError::MalformedInput(format!("failed to read header row: {e}")))?
        .iter()
        .map(|name| name.trim().to_owned())
        .collect();
    check_header(&names)?;

    let mut cells: Vec<Vec<RawCell>> = vec![Vec::new(); names.len()];
    for record in reader.records() {
        let record = record
            .map_err(|e| LogPlotError::MalformedInput(format!("failed to read row: {e}")))?;
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }
        for (idx, column) in cells.iter_mut().enumerate() {
            column.push(record.get(idx).map_or(RawCell::Absent, RawCell::from));
        }
    }

    let columns = build_columns(names, cells)?;
    debug!(
        rows = columns.row_count(),
        columns = columns.all().len(),
        skip_lines = options.skip_lines,
        "ingested delimited input"
    );
    Ok(columns)
}

fn ingest_json(text: &str, options: &IngestOptions) -> LogPlotResult<Columns> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let document: Value = serde_json::from_str(text)
        .map_err(|e| LogPlotError::MalformedInput(format!("failed to parse json: {e}")))?;
    match document {
        Value::Array(records) => ingest_records(records, options),
        _ => Err(LogPlotError::EmptyOrInvalid(
            "json document must be an array of records".to_owned(),
        )),
    }
}

fn ingest_records(records: Vec<Value>, options: &IngestOptions) -> LogPlotResult<Columns> {
    let records: Vec<Value> = records.into_iter().skip(options.skip_lines).collect();
    let Some(first) = records.first() else {
        return Err(LogPlotError::EmptyOrInvalid(
            "no records left after skipping".to_owned(),
        ));
    };
    let names: Vec<String> = first
        .as_object()
        .map(|record| record.keys().cloned().collect())
        .unwrap_or_default();
    check_header(&names)?;

    let cells: Vec<Vec<RawCell>> = names
        .iter()
        .map(|name| {
            records
                .iter()
                .map(|record| {
                    record
                        .as_object()
                        .and_then(|fields| fields.get(name))
                        .map_or(RawCell::Absent, json_cell)
                })
                .collect()
        })
        .collect();

    let columns = build_columns(names, cells)?;
    debug!(
        rows = columns.row_count(),
        columns = columns.all().len(),
        skip_records = options.skip_lines,
        "ingested json records"
    );
    Ok(columns)
}

fn json_cell(value: &Value) -> RawCell {
    match value {
        Value::Null => RawCell::Absent,
        Value::Number(number) => number.as_f64().map_or(RawCell::Absent, RawCell::Number),
        Value::String(text) => RawCell::Text(text.clone()),
        Value::Bool(flag) => RawCell::Number(if *flag { 1.0 } else { 0.0 }),
        other => RawCell::Text(other.to_string()),
    }
}

fn check_header(names: &[String]) -> LogPlotResult<()> {
    if names.is_empty() || (names.len() == 1 && names[0].is_empty()) {
        return Err(LogPlotError::EmptyOrInvalid(
            "no header row or record keys found".to_owned(),
        ));
    }
    if names.len() < 2 {
        return Err(LogPlotError::EmptyOrInvalid(format!(
            "only the key column `{}` is present",
            names[0]
        )));
    }
    Ok(())
}

fn build_columns(names: Vec<String>, cells: Vec<Vec<RawCell>>) -> LogPlotResult<Columns> {
    if cells.first().is_none_or(Vec::is_empty) {
        return Err(LogPlotError::EmptyOrInvalid("no data rows".to_owned()));
    }
    Columns::new(
        names
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| Column::new(name, cells))
            .collect(),
    )
}

/// Drops `count` physical lines; `\r\n` endings are handled because the `\r`
/// stays with the dropped line.
fn skip_leading_lines(text: &str, count: usize) -> &str {
    let mut rest = text;
    for _ in 0..count {
        match rest.find('\n') {
            Some(idx) => rest = &rest[idx + 1..],
            None => return "",
        }
    }
    rest
}

/// Drops leading comment lines. Blank lines in that region are dropped too.
fn skip_comment_lines<'a>(text: &'a str, prefix: &str) -> &'a str {
    let mut rest = text;
    loop {
        let (line, tail) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], &rest[idx + 1..]),
            None => (rest, ""),
        };
        let line = line.trim_start();
        if !(line.trim_end().is_empty() || line.starts_with(prefix)) || rest.is_empty() {
            return rest;
        }
        rest = tail;
    }
}
