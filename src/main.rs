use clap::{Parser, ValueEnum};
use plzfinder_rs::{
    ColumnRef, CsvLoadConfig, GeometryFormat, LocationRecord, LocationsToParquet, PlzError,
    ProximitySearch, init_logging, load_csv, matches_to_feature_collection, matches_to_json,
    result_extent, write_matches_csv,
};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "plzfinder")]
#[command(about = "List all postal codes within a radius (km) of a postal code")]
struct Args {
    /// Postal code at the centre of the search
    code: String,

    /// Search radius in kilometres
    radius_km: f64,

    /// Postal-code dataset (CSV)
    #[arg(long, default_value = "zipcodes.de.csv")]
    data: PathBuf,

    /// Postal-code column (header name or zero-based index)
    #[arg(long, default_value = "1")]
    code_column: String,

    /// Latitude column (header name or zero-based index)
    #[arg(long, default_value = "9")]
    lat_column: String,

    /// Longitude column (header name or zero-based index)
    #[arg(long, default_value = "10")]
    lon_column: String,

    /// Field delimiter of the dataset
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// The dataset has no header row
    #[arg(long)]
    no_header: bool,

    /// Output format for the matches
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Geometry column for CSV output (only valid with `--format csv`)
    #[arg(long, value_enum)]
    geometry: Option<GeometryArg>,

    /// Write matches to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
    Geojson,
    Parquet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GeometryArg {
    Wkt,
    Geojson,
}

impl From<GeometryArg> for GeometryFormat {
    fn from(arg: GeometryArg) -> Self {
        match arg {
            GeometryArg::Wkt => GeometryFormat::Wkt,
            GeometryArg::Geojson => GeometryFormat::GeoJson,
        }
    }
}

fn main() -> Result<(), PlzError> {
    let args = Args::parse();
    init_logging(args.verbose);
    check_args(&args)?;

    let config = CsvLoadConfig::new(
        ColumnRef::parse(&args.code_column),
        ColumnRef::parse(&args.lat_column),
        ColumnRef::parse(&args.lon_column),
    )
    .delimiter(args.delimiter as u8)
    .has_headers(!args.no_header);

    let report = load_csv(&args.data, &config)?;
    if !report.rejected.is_empty() {
        warn!(count = report.rejected.len(), "records skipped while loading");
    }
    info!(path = %args.data.display(), locations = report.table.len(), "dataset ready");

    println!("{}", args.code);

    let start = Instant::now();
    let matches = ProximitySearch::new(&report.table).search(&args.code, args.radius_km)?;
    let elapsed = start.elapsed();

    println!("Search ended in: {:?}", elapsed);
    println!("Found postal codes: {}", matches.len());

    write_output(&args, &matches)
}

/// Rejects flag combinations clap cannot express.
fn check_args(args: &Args) -> Result<(), PlzError> {
    if !args.delimiter.is_ascii() {
        return Err(PlzError::CsvError(format!(
            "delimiter must be a single ASCII character, got '{}'",
            args.delimiter
        )));
    }
    if args.geometry.is_some() && args.format != OutputFormat::Csv {
        return Err(PlzError::ExportError(
            "--geometry only applies to --format csv".to_string(),
        ));
    }
    Ok(())
}

fn write_output(args: &Args, matches: &[LocationRecord]) -> Result<(), PlzError> {
    let io_err = |e: io::Error| PlzError::IoError(e.to_string());

    match args.format {
        OutputFormat::Parquet => {
            let path = args.output.as_ref().ok_or_else(|| {
                PlzError::ExportError("--format parquet requires --output".to_string())
            })?;
            matches.to_parquet(path)
        }
        OutputFormat::Table => {
            let mut out = open_output(args)?;
            write_table(&mut out, matches)?;
            out.flush().map_err(io_err)
        }
        OutputFormat::Csv => {
            let out = open_output(args)?;
            write_matches_csv(out, matches, args.geometry.map(Into::into))
        }
        OutputFormat::Json => {
            let mut out = open_output(args)?;
            writeln!(out, "{}", matches_to_json(matches)?).map_err(io_err)?;
            out.flush().map_err(io_err)
        }
        OutputFormat::Geojson => {
            let mut out = open_output(args)?;
            writeln!(out, "{}", matches_to_feature_collection(matches)).map_err(io_err)?;
            out.flush().map_err(io_err)
        }
    }
}

fn open_output(args: &Args) -> Result<Box<dyn Write>, PlzError> {
    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).map_err(|e| PlzError::IoError(e.to_string()))?),
        None => Box::new(io::stdout().lock()),
    };
    Ok(out)
}

fn write_table(out: &mut dyn Write, matches: &[LocationRecord]) -> Result<(), PlzError> {
    let io_err = |e: io::Error| PlzError::IoError(e.to_string());

    writeln!(out, "{:<8} {:>10} {:>10} {:>12}", "code", "latitude", "longitude", "distance_km")
        .map_err(io_err)?;
    for rec in matches {
        writeln!(
            out,
            "{:<8} {:>10.4} {:>10.4} {:>12.3}",
            rec.code(),
            rec.latitude().value(),
            rec.longitude().value(),
            rec.distance_km().unwrap_or_default()
        )
        .map_err(io_err)?;
    }
    if let Some(rect) = result_extent(matches) {
        writeln!(
            out,
            "Extent: lat {:.4}..{:.4}, lon {:.4}..{:.4}",
            rect.min().y,
            rect.max().y,
            rect.min().x,
            rect.max().x
        )
        .map_err(io_err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("valid command line")
    }

    #[test]
    fn test_geometry_with_csv_format() {
        let args = parse(&["plzfinder", "01067", "10", "--format", "csv", "--geometry", "wkt"]);
        assert!(check_args(&args).is_ok());
    }

    #[test]
    fn test_geometry_rejected_for_other_formats() {
        for format in ["table", "json", "geojson", "parquet"] {
            let args = parse(&["plzfinder", "01067", "10", "--format", format, "--geometry", "geojson"]);
            assert!(
                matches!(check_args(&args), Err(PlzError::ExportError(_))),
                "format {}",
                format
            );
        }
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let args = parse(&["plzfinder", "01067", "10", "--delimiter", "§"]);
        assert!(matches!(check_args(&args), Err(PlzError::CsvError(_))));
    }
}
