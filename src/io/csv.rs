use crate::api::location::LocationRecord;
use crate::api::table::{LoadReport, LocationTable};
use crate::util::error::PlzError;
use csv::StringRecord;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Selects a CSV column either by header name or by zero-based index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    Name(String),
    Index(usize),
}

impl ColumnRef {
    /// A value that parses as an integer is an index, anything else a name.
    ///
    /// ```
    /// use plzfinder_rs::ColumnRef;
    ///
    /// assert_eq!(ColumnRef::parse("9"), ColumnRef::Index(9));
    /// assert_eq!(ColumnRef::parse("latitude"), ColumnRef::Name("latitude".into()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<usize>() {
            Ok(idx) => ColumnRef::Index(idx),
            Err(_) => ColumnRef::Name(s.trim().to_string()),
        }
    }

    fn resolve(&self, headers: Option<&StringRecord>) -> Result<usize, PlzError> {
        match self {
            ColumnRef::Index(idx) => Ok(*idx),
            ColumnRef::Name(name) => headers
                .and_then(|h| h.iter().position(|col| col.trim() == name))
                .ok_or_else(|| PlzError::ColumnNotFound(name.clone())),
        }
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::Name(name.to_string())
    }
}

impl From<usize> for ColumnRef {
    fn from(idx: usize) -> Self {
        ColumnRef::Index(idx)
    }
}

/// Geometry column format for CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text, e.g. `POINT(13.3846 52.5323)`
    Wkt,
    /// GeoJSON geometry object
    GeoJson,
}

/// Configuration for loading a postal-code CSV.
#[derive(Debug, Clone)]
pub struct CsvLoadConfig {
    pub code_column: ColumnRef,
    pub latitude_column: ColumnRef,
    pub longitude_column: ColumnRef,
    pub delimiter: u8,
    pub has_headers: bool,
}

impl Default for CsvLoadConfig {
    /// Layout of `zipcodes.de.csv`: header row, code in column 1, latitude in
    /// column 9, longitude in column 10.
    fn default() -> Self {
        Self {
            code_column: ColumnRef::Index(1),
            latitude_column: ColumnRef::Index(9),
            longitude_column: ColumnRef::Index(10),
            delimiter: b',',
            has_headers: true,
        }
    }
}

impl CsvLoadConfig {
    /// Create config selecting columns by name or index.
    ///
    /// # Example
    /// ```
    /// use plzfinder_rs::CsvLoadConfig;
    ///
    /// let config = CsvLoadConfig::new("zipcode", "latitude", "longitude")
    ///     .delimiter(b';');
    /// ```
    pub fn new(
        code_column: impl Into<ColumnRef>,
        latitude_column: impl Into<ColumnRef>,
        longitude_column: impl Into<ColumnRef>,
    ) -> Self {
        Self {
            code_column: code_column.into(),
            latitude_column: latitude_column.into(),
            longitude_column: longitude_column.into(),
            ..Self::default()
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }
}

/// Loads a postal-code CSV file into a [`LocationTable`].
///
/// Rows with unparsable or missing coordinates, or a postal code that is not
/// valid UTF-8, are skipped and reported in [`LoadReport::rejected`]. Other
/// columns may hold any encoding. Unreadable files are errors.
///
/// ```no_run
/// use plzfinder_rs::{CsvLoadConfig, load_csv};
///
/// let report = load_csv("zipcodes.de.csv", &CsvLoadConfig::default()).unwrap();
/// println!("{} locations", report.table.len());
/// ```
pub fn load_csv(path: impl AsRef<Path>, config: &CsvLoadConfig) -> Result<LoadReport, PlzError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening dataset");
    let file = File::open(path).map_err(|e| PlzError::IoError(e.to_string()))?;
    load_csv_from_reader(file, config)
}

/// Same as [`load_csv`], reading from any `Read` source.
pub fn load_csv_from_reader<R: Read>(
    reader: R,
    config: &CsvLoadConfig,
) -> Result<LoadReport, PlzError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .flexible(true)
        .from_reader(reader);

    let headers = if config.has_headers {
        Some(
            reader
                .byte_headers()
                .map_err(|e| PlzError::CsvError(e.to_string()))?
                .iter()
                .map(|h| String::from_utf8_lossy(h).into_owned())
                .collect::<StringRecord>(),
        )
    } else {
        None
    };

    let code_idx = config.code_column.resolve(headers.as_ref())?;
    let lat_idx = config.latitude_column.resolve(headers.as_ref())?;
    let lon_idx = config.longitude_column.resolve(headers.as_ref())?;

    // Only the code field has to be valid UTF-8; everything else decodes lossily.
    let mut rows = Vec::new();
    let mut row_index = Vec::new();
    let mut undecodable = Vec::new();
    for (index, result) in reader.byte_records().enumerate() {
        let record = result.map_err(|e| PlzError::CsvError(e.to_string()))?;
        // Short rows keep their slot so diagnostics line up with the file.
        let raw = |idx: usize| record.get(idx).unwrap_or_default();
        let field = |idx: usize| String::from_utf8_lossy(raw(idx)).into_owned();

        if std::str::from_utf8(raw(code_idx)).is_err() {
            let code = field(code_idx).trim().to_string();
            warn!(index, code = %code, "skipping record with undecodable postal code");
            undecodable.push(PlzError::RecordParse {
                index,
                code,
                reason: "postal code is not valid UTF-8".to_string(),
            });
            continue;
        }

        row_index.push(index);
        rows.push((field(code_idx), field(lat_idx), field(lon_idx)));
    }

    let mut report = LocationTable::load(rows);
    for err in &mut report.rejected {
        if let PlzError::RecordParse { index, .. } = err {
            if let Some(&row) = row_index.get(*index) {
                *index = row;
            }
        }
    }
    if !undecodable.is_empty() {
        report.rejected.extend(undecodable);
        report.rejected.sort_by_key(|err| match err {
            PlzError::RecordParse { index, .. } => *index,
            _ => usize::MAX,
        });
    }

    Ok(report)
}

/// Writes search results as CSV: `code,latitude,longitude,distance_km`, plus
/// a `geometry` column when `geometry` is set.
pub fn write_matches_csv<W: Write>(
    writer: W,
    matches: &[LocationRecord],
    geometry: Option<GeometryFormat>,
) -> Result<(), PlzError> {
    let mut writer = csv::Writer::from_writer(writer);

    let mut header_row = vec!["code", "latitude", "longitude", "distance_km"];
    if geometry.is_some() {
        header_row.push("geometry");
    }
    writer
        .write_record(&header_row)
        .map_err(|e| PlzError::CsvError(e.to_string()))?;

    for rec in matches {
        let mut row = vec![
            rec.code().to_string(),
            rec.latitude().value().to_string(),
            rec.longitude().value().to_string(),
            rec.distance_km().map(|d| d.to_string()).unwrap_or_default(),
        ];
        if let Some(format) = geometry {
            row.push(point_geometry(rec, format));
        }
        writer
            .write_record(&row)
            .map_err(|e| PlzError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| PlzError::IoError(e.to_string()))?;
    Ok(())
}

fn point_geometry(rec: &LocationRecord, format: GeometryFormat) -> String {
    let point = rec.point();
    match format {
        GeometryFormat::Wkt => {
            use wkt::ToWkt;
            point.wkt_string()
        }
        GeometryFormat::GeoJson => geojson::Geometry::new(geojson::Value::from(&point)).to_string(),
    }
}
